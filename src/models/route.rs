use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::coordinate::Coordinate;

/// Driving route from pickup to dropoff. Always holds at least one point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Coordinate>,
    distance_km: f64,
}

impl Route {
    pub fn new(points: Vec<Coordinate>, distance_km: f64) -> Result<Self, AppError> {
        if points.is_empty() {
            return Err(AppError::RouteUnavailable(
                "route geometry is empty".to_string(),
            ));
        }

        Ok(Self {
            points,
            distance_km: distance_km.max(0.0),
        })
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::error::AppError;
    use crate::models::coordinate::Coordinate;

    #[test]
    fn empty_geometry_is_rejected() {
        let result = Route::new(Vec::new(), 12.0);
        assert!(matches!(result, Err(AppError::RouteUnavailable(_))));
    }

    #[test]
    fn start_and_end_are_first_and_last_points() {
        let route = Route::new(
            vec![
                Coordinate::new(37.78, -122.42),
                Coordinate::new(38.0, -120.0),
                Coordinate::new(38.91, -77.03),
            ],
            4_500.0,
        )
        .unwrap();

        assert_eq!(route.start(), Coordinate::new(37.78, -122.42));
        assert_eq!(route.end(), Coordinate::new(38.91, -77.03));
        assert_eq!(route.len(), 3);
    }
}
