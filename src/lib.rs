pub mod commands;
pub mod config;
pub mod prompt;
pub mod records;
pub mod roster;
pub mod schema;
pub mod storage;
pub mod table;
mod utils;

pub use records::TrainRecord;
pub use roster::{Roster, Selection};
