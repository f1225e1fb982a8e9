use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::coordinate::Coordinate;
use crate::models::route::Route;

#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, from: Coordinate, to: Coordinate) -> Result<Route, AppError>;
}

/// Client for an OSRM-compatible `/route/v1/driving` endpoint.
pub struct OsrmRouter {
    client: Client,
    base_url: String,
}

impl OsrmRouter {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn route_url(&self, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, from.lon, from.lat, to.lon, to.lat
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRouteResponse {
    pub(crate) code: String,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    pub(crate) distance: f64,
    pub(crate) geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmGeometry {
    pub(crate) coordinates: Vec<[f64; 2]>,
}

#[async_trait]
impl RouteProvider for OsrmRouter {
    async fn route(&self, from: Coordinate, to: Coordinate) -> Result<Route, AppError> {
        let url = self.route_url(from, to);
        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RouteUnavailable(format!(
                "router responded with {status}"
            )));
        }

        let body: OsrmRouteResponse = response.json().await?;
        debug!(code = %body.code, routes = body.routes.len(), "router responded");

        into_route(body)
    }
}

/// Uses the first alternative; geometry arrives as `[lon, lat]` and distance in meters.
pub(crate) fn into_route(body: OsrmRouteResponse) -> Result<Route, AppError> {
    if body.code != "Ok" {
        let reason = body.message.unwrap_or_else(|| body.code.clone());
        return Err(AppError::RouteUnavailable(reason));
    }

    let first = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| AppError::RouteUnavailable("router returned no routes".to_string()))?;

    let points = first
        .geometry
        .coordinates
        .into_iter()
        .map(Coordinate::from_lon_lat)
        .collect();

    Route::new(points, first.distance / 1_000.0)
}

#[cfg(test)]
mod tests {
    use reqwest::Client;

    use super::{OsrmRouteResponse, OsrmRouter, into_route};
    use crate::error::AppError;
    use crate::models::coordinate::Coordinate;

    fn parse(body: &str) -> OsrmRouteResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn url_encodes_lon_lat_pairs() {
        let router = OsrmRouter::new(Client::new(), "https://router.example/");
        let url = router.route_url(Coordinate::new(37.78, -122.42), Coordinate::new(38.91, -77.03));
        assert_eq!(
            url,
            "https://router.example/route/v1/driving/-122.42,37.78;-77.03,38.91"
        );
    }

    #[test]
    fn first_route_is_swapped_and_converted_to_km() {
        let body = parse(
            r#"{"code": "Ok", "routes": [
                {"distance": 4500000.0, "geometry": {"coordinates": [[-122.42, 37.78], [-77.03, 38.91]]}},
                {"distance": 1.0, "geometry": {"coordinates": [[0.0, 0.0]]}}
            ]}"#,
        );

        let route = into_route(body).unwrap();
        assert_eq!(route.distance_km(), 4_500.0);
        assert_eq!(route.start(), Coordinate::new(37.78, -122.42));
        assert_eq!(route.end(), Coordinate::new(38.91, -77.03));
    }

    #[test]
    fn non_ok_code_is_unavailable() {
        let body = parse(r#"{"code": "NoRoute", "message": "Impossible route between points"}"#);
        let err = into_route(body).unwrap_err();
        assert!(matches!(err, AppError::RouteUnavailable(msg) if msg.contains("Impossible")));
    }

    #[test]
    fn missing_routes_or_geometry_is_unavailable() {
        assert!(matches!(
            into_route(parse(r#"{"code": "Ok", "routes": []}"#)),
            Err(AppError::RouteUnavailable(_))
        ));
        assert!(matches!(
            into_route(parse(
                r#"{"code": "Ok", "routes": [{"distance": 10.0, "geometry": {"coordinates": []}}]}"#
            )),
            Err(AppError::RouteUnavailable(_))
        ));
    }
}
