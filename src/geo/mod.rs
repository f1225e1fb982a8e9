use crate::models::coordinate::Coordinate;

const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lon = (delta_lon / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;
    let central_angle = 2.0 * haversine.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

/// Running distance from the first point; `result[i]` is the km travelled at `points[i]`.
pub fn cumulative_km(points: &[Coordinate]) -> Vec<f64> {
    let mut totals = Vec::with_capacity(points.len());
    let mut travelled = 0.0;

    for (idx, point) in points.iter().enumerate() {
        if idx > 0 {
            travelled += haversine_km(&points[idx - 1], point);
        }
        totals.push(travelled);
    }

    totals
}

/// Point `target_km` along the polyline, linearly interpolated inside the segment
/// it falls into. Targets past either end are clamped to the end points.
pub fn point_along(points: &[Coordinate], cumulative: &[f64], target_km: f64) -> Option<Coordinate> {
    let first = points.first()?;
    let last = points.last()?;

    if target_km <= 0.0 {
        return Some(*first);
    }

    let segment_end = cumulative.iter().position(|&travelled| travelled >= target_km);
    let Some(end_idx) = segment_end else {
        return Some(*last);
    };
    if end_idx == 0 {
        return Some(*first);
    }

    let start = points[end_idx - 1];
    let end = points[end_idx];
    let segment_km = cumulative[end_idx] - cumulative[end_idx - 1];
    if segment_km <= f64::EPSILON {
        return Some(end);
    }

    let t = (target_km - cumulative[end_idx - 1]) / segment_km;
    Some(Coordinate::new(
        start.lat + (end.lat - start.lat) * t,
        start.lon + (end.lon - start.lon) * t,
    ))
}

#[cfg(test)]
mod tests {
    use super::{cumulative_km, haversine_km, point_along};
    use crate::models::coordinate::Coordinate;

    #[test]
    fn zero_distance_for_same_point() {
        let p = Coordinate::new(53.5511, 9.9937);
        let distance = haversine_km(&p, &p);
        assert!(distance < 1e-9);
    }

    #[test]
    fn london_to_paris_is_around_343_km() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let distance = haversine_km(&london, &paris);
        assert!((distance - 343.0).abs() < 5.0);
    }

    #[test]
    fn cumulative_distance_is_monotonic() {
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 3.0),
        ];
        let totals = cumulative_km(&points);

        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0], 0.0);
        assert!(totals.windows(2).all(|w| w[1] >= w[0]));
        assert!((totals[3] - 3.0 * totals[1]).abs() < 1e-6);
    }

    #[test]
    fn point_along_interpolates_inside_segment() {
        let points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 2.0)];
        let totals = cumulative_km(&points);

        let midpoint = point_along(&points, &totals, totals[1] / 2.0).unwrap();
        assert!(midpoint.lat.abs() < 1e-9);
        assert!((midpoint.lon - 1.0).abs() < 1e-6);
    }

    #[test]
    fn point_along_clamps_to_ends() {
        let points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 2.0)];
        let totals = cumulative_km(&points);

        assert_eq!(point_along(&points, &totals, -5.0), Some(points[0]));
        assert_eq!(point_along(&points, &totals, 1e9), Some(points[1]));
        assert_eq!(point_along(&[], &[], 1.0), None);
    }
}
