use std::env;

use crate::engine::duty_log::DEFAULT_DAY_HOURS;
use crate::engine::planner::PlannerSettings;
use crate::engine::stops::{DEFAULT_FUEL_INTERVAL_KM, StopPlacement};
use crate::error::AppError;
use crate::render::map::IconConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub event_buffer_size: usize,
    pub geocoder_url: String,
    pub router_url: String,
    pub trip_store_url: Option<String>,
    pub http_user_agent: String,
    pub http_timeout_secs: u64,
    pub fuel_interval_km: f64,
    pub stop_placement: StopPlacement,
    pub log_day_hours: u32,
    pub icon_base_url: String,
    pub session_idle_ttl_secs: u64,
    pub session_sweep_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        let config = Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format,
            event_buffer_size: parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            geocoder_url: env::var("GEOCODER_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            router_url: env::var("ROUTER_URL")
                .unwrap_or_else(|_| "https://router.project-osrm.org".to_string()),
            trip_store_url: env::var("TRIP_STORE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            http_user_agent: env::var("HTTP_USER_AGENT")
                .unwrap_or_else(|_| format!("trip-planner/{}", env!("CARGO_PKG_VERSION"))),
            http_timeout_secs: parse_or_default("HTTP_TIMEOUT_SECS", 30)?,
            fuel_interval_km: parse_or_default("FUEL_INTERVAL_KM", DEFAULT_FUEL_INTERVAL_KM)?,
            stop_placement: parse_or_default("STOP_PLACEMENT", StopPlacement::default())?,
            log_day_hours: parse_or_default("LOG_DAY_HOURS", DEFAULT_DAY_HOURS)?,
            icon_base_url: env::var("ICON_BASE_URL").unwrap_or_else(|_| "/img".to_string()),
            session_idle_ttl_secs: parse_or_default("SESSION_IDLE_TTL_SECS", 3600)?,
            session_sweep_secs: parse_or_default("SESSION_SWEEP_SECS", 60)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.fuel_interval_km.is_nan() || self.fuel_interval_km <= 0.0 {
            return Err(must_be_positive("FUEL_INTERVAL_KM"));
        }
        if self.log_day_hours == 0 {
            return Err(must_be_positive("LOG_DAY_HOURS"));
        }
        if self.event_buffer_size == 0 {
            return Err(must_be_positive("EVENT_BUFFER_SIZE"));
        }
        if self.session_sweep_secs == 0 {
            return Err(must_be_positive("SESSION_SWEEP_SECS"));
        }

        Ok(())
    }

    pub fn planner_settings(&self) -> PlannerSettings {
        PlannerSettings {
            fuel_interval_km: self.fuel_interval_km,
            stop_placement: self.stop_placement,
            day_hours: self.log_day_hours,
        }
    }

    pub fn icons(&self) -> IconConfig {
        IconConfig::with_base_url(&self.icon_base_url)
    }
}

fn must_be_positive(key: &str) -> AppError {
    AppError::Internal(format!("invalid {key}: must be > 0"))
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
