use serde::{Deserialize, Serialize};

use crate::geo::{cumulative_km, point_along};
use crate::models::duty::{DutyLogEntry, DutyStatus};
use crate::models::route::Route;
use crate::models::stop::{StopKind, StopMarker};

pub const DEFAULT_FUEL_INTERVAL_KM: f64 = 1_600.0;

/// How fuel stops are positioned along the route polyline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopPlacement {
    /// Evenly spaced vertex indices; assumes uniform vertex density.
    #[default]
    IndexInterpolation,
    /// True distance offsets along the polyline.
    DistanceWalk,
}

impl std::str::FromStr for StopPlacement {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "index" | "index_interpolation" => Ok(StopPlacement::IndexInterpolation),
            "distance" | "distance_walk" => Ok(StopPlacement::DistanceWalk),
            other => Err(format!("unknown stop placement {other:?}")),
        }
    }
}

pub fn fuel_stop_count(distance_km: f64, interval_km: f64) -> usize {
    if !distance_km.is_finite() || !interval_km.is_finite() || interval_km <= 0.0 {
        return 0;
    }

    (distance_km.max(0.0) / interval_km).floor() as usize
}

pub fn fuel_stops(route: &Route, interval_km: f64, placement: StopPlacement) -> Vec<StopMarker> {
    let count = fuel_stop_count(route.distance_km(), interval_km);
    if count == 0 {
        return Vec::new();
    }

    match placement {
        StopPlacement::IndexInterpolation => by_index(route, count),
        StopPlacement::DistanceWalk => by_distance(route, count, interval_km),
    }
}

fn by_index(route: &Route, count: usize) -> Vec<StopMarker> {
    let points = route.points();
    let segment = points.len() / (count + 1);
    if segment == 0 {
        return Vec::new();
    }

    (1..=count)
        .filter_map(|i| points.get(i * segment))
        .map(|point| StopMarker::new(*point, StopKind::Fuel))
        .collect()
}

fn by_distance(route: &Route, count: usize, interval_km: f64) -> Vec<StopMarker> {
    let points = route.points();
    let cumulative = cumulative_km(points);
    let polyline_km = cumulative.last().copied().unwrap_or(0.0);

    // The router's distance and the polyline's great-circle length differ
    // slightly, so offsets are placed by fraction of the trip.
    (1..=count)
        .filter_map(|i| {
            let fraction = (i as f64 * interval_km) / route.distance_km();
            point_along(points, &cumulative, fraction * polyline_km)
        })
        .map(|point| StopMarker::new(point, StopKind::Fuel))
        .collect()
}

/// Maps every resting hour of the log onto the route, proportionally to its
/// position in the cycle budget. Nothing is emitted for a non-positive budget.
pub fn rest_stops(route: &Route, log: &[DutyLogEntry], cycle_hours: f64) -> Vec<StopMarker> {
    if !cycle_hours.is_finite() || cycle_hours <= 0.0 {
        return Vec::new();
    }

    let points = route.points();
    let last_idx = points.len() - 1;

    log.iter()
        .enumerate()
        .filter(|(_, entry)| entry.status == DutyStatus::Resting)
        .map(|(flat_idx, _)| {
            let idx = ((flat_idx as f64 / cycle_hours) * last_idx as f64).floor() as usize;
            StopMarker::new(points[idx.min(last_idx)], StopKind::Rest)
        })
        .collect()
}
