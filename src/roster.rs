use log::warn;
use serde::{Deserialize, Serialize};

use super::records::{TrainRecord, is_departure_time};

/// The departures held in one roster file. Kept sorted by destination after every insertion.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster(Vec<TrainRecord>);

/// Result of filtering a roster by departure time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Found(Vec<TrainRecord>),
    NoTrainsFound,
}

impl Roster {
    pub fn new() -> Self {
        Roster(Vec::new())
    }

    pub fn records(&self) -> &[TrainRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a record and re-sorts by destination. Duplicates are kept.
    pub fn add(self, record: TrainRecord) -> Roster {
        if !is_departure_time(record.departure_time()) {
            warn!(
                "Departure time {:?} for train {:?} is not in HH:MM form; the file will fail validation on the next load",
                record.departure_time(),
                record.train_number()
            );
        }
        let mut records = self.0;
        records.push(record);
        // Stable, so equal destinations keep their insertion order
        records.sort_by(|a, b| a.destination().cmp(b.destination()));
        Roster(records)
    }

    /// Every record departing at or after `time`, in roster order.
    pub fn select(&self, time: &str) -> Selection {
        let found: Vec<TrainRecord> = self
            .0
            .iter()
            .filter(|record| record.departs_at_or_after(time))
            .cloned()
            .collect();
        if found.is_empty() {
            Selection::NoTrainsFound
        } else {
            Selection::Found(found)
        }
    }
}

impl From<Vec<TrainRecord>> for Roster {
    fn from(records: Vec<TrainRecord>) -> Self {
        Roster(records)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a TrainRecord;
    type IntoIter = std::slice::Iter<'a, TrainRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
