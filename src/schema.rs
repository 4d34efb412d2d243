use serde_json::Value;
use std::fmt;
use thiserror::Error;

use super::records::{DEPARTURE_TIME_KEY, DESTINATION_KEY, TRAIN_NUMBER_KEY, is_departure_time};

/// Properties every record must carry, in the order they are checked.
const REQUIRED_PROPERTIES: [&str; 3] = [DESTINATION_KEY, TRAIN_NUMBER_KEY, DEPARTURE_TIME_KEY];

/// Where in the document a violation was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Root,
    Record(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => write!(f, "$"),
            Location::Record(index) => write!(f, "$[{index}]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("expected an array of train records, found {found}")]
    NotAnArray { found: &'static str },
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("'{property}' is a required property")]
    MissingProperty { property: &'static str },
    #[error("'{property}' must be a string, found {found}")]
    NotAString {
        property: &'static str,
        found: &'static str,
    },
    #[error("'{value}' does not match '^\\d{{2}}:\\d{{2}}$'")]
    BadDepartureTime { value: String },
}

/// The first violation found in a roster document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("schema violation at {location}: {violation}")]
pub struct SchemaError {
    pub location: Location,
    pub violation: Violation,
}

impl SchemaError {
    fn at(location: Location, violation: Violation) -> Self {
        SchemaError {
            location,
            violation,
        }
    }
}

/// Checks a parsed document against the roster schema and stops at the first violation.
/// Extra properties on a record are allowed.
pub fn validate(document: &Value) -> Result<(), SchemaError> {
    let records = document.as_array().ok_or_else(|| {
        SchemaError::at(
            Location::Root,
            Violation::NotAnArray {
                found: type_name(document),
            },
        )
    })?;

    for (index, record) in records.iter().enumerate() {
        validate_record(record)
            .map_err(|violation| SchemaError::at(Location::Record(index), violation))?;
    }
    Ok(())
}

fn validate_record(record: &Value) -> Result<(), Violation> {
    let fields = record.as_object().ok_or(Violation::NotAnObject {
        found: type_name(record),
    })?;

    for property in REQUIRED_PROPERTIES {
        let value = fields
            .get(property)
            .ok_or(Violation::MissingProperty { property })?;
        let text = value.as_str().ok_or(Violation::NotAString {
            property,
            found: type_name(value),
        })?;
        if property == DEPARTURE_TIME_KEY && !is_departure_time(text) {
            return Err(Violation::BadDepartureTime {
                value: text.to_string(),
            });
        }
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
