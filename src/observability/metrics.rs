use prometheus::{
    Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub trip_plans_total: IntCounterVec,
    pub trip_plan_latency_seconds: HistogramVec,
    pub external_calls_total: IntCounterVec,
    pub active_sessions: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let trip_plans_total = IntCounterVec::new(
            Opts::new("trip_plans_total", "Total trip plans by outcome"),
            &["outcome"],
        )
        .expect("valid trip_plans_total metric");

        let trip_plan_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "trip_plan_latency_seconds",
                "Latency of the full planning pipeline in seconds",
            ),
            &["outcome"],
        )
        .expect("valid trip_plan_latency_seconds metric");

        let external_calls_total = IntCounterVec::new(
            Opts::new(
                "external_calls_total",
                "Calls to geocoder, router and trip store by outcome",
            ),
            &["service", "outcome"],
        )
        .expect("valid external_calls_total metric");

        let active_sessions = IntGauge::new("active_sessions", "Planner sessions held in memory")
            .expect("valid active_sessions metric");

        registry
            .register(Box::new(trip_plans_total.clone()))
            .expect("register trip_plans_total");
        registry
            .register(Box::new(trip_plan_latency_seconds.clone()))
            .expect("register trip_plan_latency_seconds");
        registry
            .register(Box::new(external_calls_total.clone()))
            .expect("register external_calls_total");
        registry
            .register(Box::new(active_sessions.clone()))
            .expect("register active_sessions");

        Self {
            registry,
            trip_plans_total,
            trip_plan_latency_seconds,
            external_calls_total,
            active_sessions,
        }
    }

    pub fn record_call<T, E>(&self, service: &str, result: &Result<T, E>) {
        let outcome = if result.is_ok() { "success" } else { "error" };
        self.external_calls_total
            .with_label_values(&[service, outcome])
            .inc();
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
