use log::{debug, info};
use serde_json::Value;
use std::io;
use std::path::Path;
use thiserror::Error;

use super::roster::Roster;
use super::schema::{self, SchemaError};
use super::utils::{read_optional_file, write_json_file};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// Valid against the schema but still not decodable into records.
    #[error("could not decode train records: {0}")]
    Decode(serde_json::Error),
}

/// Reads and validates a roster file. A file that does not exist is an empty roster.
pub fn load(path: &Path) -> Result<Roster, LoadError> {
    let Some(text) = read_optional_file(path)? else {
        debug!("{} does not exist, starting with an empty roster", path.display());
        return Ok(Roster::new());
    };
    let roster = parse(&text)?;
    info!("Loaded {} trains from {}", roster.len(), path.display());
    Ok(roster)
}

/// Parses roster text, rejecting it on the first schema violation.
pub fn parse(text: &str) -> Result<Roster, LoadError> {
    let document: Value = serde_json::from_str(text)?;
    schema::validate(&document)?;
    serde_json::from_value(document).map_err(LoadError::Decode)
}

/// Rewrites the whole roster file.
pub fn save(path: &Path, roster: &Roster, indent: usize) -> io::Result<()> {
    write_json_file(path, indent, roster)?;
    info!("Saved {} trains to {}", roster.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TrainRecord;
    use crate::schema::{Location, Violation};
    use crate::utils::temp_path;

    const VALID: &str = r#"[
    {
        "название пункта назначения": "Владивосток",
        "номер поезда": "001М",
        "время отправления": "13:50"
    },
    {
        "название пункта назначения": "Пермь",
        "номер поезда": "22",
        "время отправления": "06:10"
    }
]"#;

    #[test]
    fn test_missing_file_is_empty_roster() {
        let path = temp_path("missing.json");
        let _ = fs_err::remove_file(&path);
        let roster = load(&path).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_round_trip_keeps_records() {
        let path = temp_path("round-trip.json");
        let original = parse(VALID).unwrap();
        save(&path, &original, 4).unwrap();
        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded, original);

        save(&path, &reloaded, 4).unwrap();
        assert_eq!(load(&path).unwrap(), original);
        fs_err::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_writes_unescaped_indented_json() {
        let path = temp_path("unescaped.json");
        let roster = Roster::new().add(TrainRecord::new("Екатеринбург", "7", "09:00"));
        save(&path, &roster, 4).unwrap();
        let text = fs_err::read_to_string(&path).unwrap();
        assert!(text.contains("\"название пункта назначения\": \"Екатеринбург\""));
        assert!(text.contains("\n        \"номер поезда\": \"7\""));
        assert!(!text.contains("\\u"));
        fs_err::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_uses_configured_indent() {
        let path = temp_path("indent-two.json");
        let roster = Roster::new().add(TrainRecord::new("Тверь", "3", "07:00"));
        save(&path, &roster, 2).unwrap();
        let text = fs_err::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"название пункта назначения\": \"Тверь\""));
        assert!(!text.contains("\n      \""));
        assert_eq!(parse(&text).unwrap(), roster);
        fs_err::remove_file(&path).unwrap();
    }

    #[test]
    fn test_record_without_departure_time_is_rejected() {
        let text = r#"[{"название пункта назначения": "Пермь", "номер поезда": "22"}]"#;
        match parse(text) {
            Err(LoadError::Schema(err)) => {
                assert_eq!(err.location, Location::Record(0));
                assert!(matches!(err.violation, Violation::MissingProperty { .. }));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(parse("[{"), Err(LoadError::MalformedJson(_))));
    }

    #[test]
    fn test_load_reports_schema_error_from_file() {
        let path = temp_path("bad-schema.json");
        fs_err::write(&path, r#"{"not": "an array"}"#).unwrap();
        assert!(matches!(load(&path), Err(LoadError::Schema(_))));
        fs_err::remove_file(&path).unwrap();
    }
}
