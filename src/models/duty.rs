use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DutyStatus {
    Pickup,
    Dropoff,
    Driving,
    Resting,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DutyLogEntry {
    pub hour: u32,
    pub status: DutyStatus,
}

/// One day's sheet of the duty log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayLog {
    pub day: u32,
    pub entries: Vec<DutyLogEntry>,
}
