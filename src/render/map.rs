//! Map view of a trip plan.
//!
//! Icons are resolved from an [`IconConfig`] handed to the render layer when
//! the service starts, so every marker in a [`MapView`] carries the exact
//! image and anchor a map client needs to draw it.

use serde::{Deserialize, Serialize};

use crate::models::coordinate::Coordinate;
use crate::models::duty::DayLog;
use crate::models::plan::TripPlan;
use crate::models::stop::{StopKind, StopMarker};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconSpec {
    pub url: String,
    pub retina_url: Option<String>,
    pub shadow_url: Option<String>,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

impl IconSpec {
    fn square(url: String, side: u32) -> Self {
        let side_i = side as i32;
        Self {
            url,
            retina_url: None,
            shadow_url: None,
            size: [side, side],
            anchor: [side_i / 2, side_i],
            popup_anchor: [0, -side_i],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconConfig {
    pub default: IconSpec,
    pub fuel: IconSpec,
    pub rest: IconSpec,
    pub vehicle: IconSpec,
}

impl IconConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');

        Self {
            default: IconSpec {
                url: format!("{base}/marker-icon.png"),
                retina_url: Some(format!("{base}/marker-icon-2x.png")),
                shadow_url: Some(format!("{base}/marker-shadow.png")),
                size: [25, 41],
                anchor: [12, 41],
                popup_anchor: [1, -34],
            },
            fuel: IconSpec::square(format!("{base}/petrol.png"), 30),
            rest: IconSpec::square(format!("{base}/rest.png"), 30),
            vehicle: IconSpec::square(format!("{base}/truck.png"), 32),
        }
    }

    pub fn for_kind(&self, kind: StopKind) -> &IconSpec {
        match kind {
            StopKind::Fuel => &self.fuel,
            StopKind::Rest => &self.rest,
            StopKind::Vehicle => &self.vehicle,
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self::with_base_url("/img")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    /// `[lat, lon]`, the order map clients expect.
    pub position: [f64; 2],
    pub popup: String,
    pub icon: IconSpec,
}

impl MapMarker {
    fn new(position: Coordinate, popup: &str, icon: &IconSpec) -> Self {
        Self {
            position: position.to_lat_lon(),
            popup: popup.to_string(),
            icon: icon.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapView {
    pub plan_id: uuid::Uuid,
    pub center: [f64; 2],
    pub start: MapMarker,
    pub end: MapMarker,
    pub polyline: Vec<[f64; 2]>,
    pub overlays: Vec<MapMarker>,
    pub log: Vec<DayLog>,
}

impl MapView {
    pub fn from_plan(plan: &TripPlan, icons: &IconConfig) -> Self {
        let route = &plan.route;

        let overlays = plan
            .fuel_stops
            .iter()
            .chain(plan.rest_stops.iter())
            .chain(std::iter::once(&plan.vehicle))
            .map(|marker| overlay(marker, icons))
            .collect();

        Self {
            plan_id: plan.id,
            center: route.start().to_lat_lon(),
            start: MapMarker::new(route.start(), "Start", &icons.default),
            end: MapMarker::new(route.end(), "End", &icons.default),
            polyline: route.points().iter().map(|p| p.to_lat_lon()).collect(),
            overlays,
            log: plan.log.clone(),
        }
    }
}

fn overlay(marker: &StopMarker, icons: &IconConfig) -> MapMarker {
    MapMarker::new(marker.position, marker.kind.label(), icons.for_kind(marker.kind))
}
