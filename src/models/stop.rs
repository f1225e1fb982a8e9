use serde::{Deserialize, Serialize};

use crate::models::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StopKind {
    Fuel,
    Rest,
    Vehicle,
}

impl StopKind {
    pub fn label(self) -> &'static str {
        match self {
            StopKind::Fuel => "Fuel Stop",
            StopKind::Rest => "Rest Stop",
            StopKind::Vehicle => "Vehicle",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopMarker {
    pub position: Coordinate,
    pub kind: StopKind,
}

impl StopMarker {
    pub fn new(position: Coordinate, kind: StopKind) -> Self {
        Self { position, kind }
    }
}
