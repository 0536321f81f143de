pub mod coerce;
pub mod format;
pub mod sizing;
