use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate from a GeoJSON position, which is `[lon, lat]`.
    pub fn from_lon_lat(position: [f64; 2]) -> Self {
        Self {
            lat: position[1],
            lon: position[0],
        }
    }

    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    pub fn to_lat_lon(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn geojson_position_is_swapped_to_lat_lon() {
        let point = Coordinate::from_lon_lat([-122.42, 37.78]);
        assert_eq!(point.lat, 37.78);
        assert_eq!(point.lon, -122.42);
        assert_eq!(point.to_lat_lon(), [37.78, -122.42]);
    }

    #[test]
    fn swapping_twice_restores_original_order() {
        let raw = [-77.03, 38.91];
        let restored = Coordinate::from_lon_lat(raw).to_lon_lat();
        assert_eq!(restored, raw);
    }
}
