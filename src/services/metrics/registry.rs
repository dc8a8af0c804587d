use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Metrics registry owned by one application instance
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Domain Metrics
    pub tickets_created_total: IntCounter,
    pub notifications_delivered_total: IntCounter,
    pub flights_seeded_total: IntCounter,
    pub otp_verifications_total: IntCounterVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, prometheus::Error> {
        let registry = Registry::new_custom(Some("ourair".to_string()), None)?;

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        let tickets_created_total =
            IntCounter::with_opts(Opts::new("tickets_created_total", "Tickets created"))?;
        registry.register(Box::new(tickets_created_total.clone()))?;

        let notifications_delivered_total = IntCounter::with_opts(Opts::new(
            "notifications_delivered_total",
            "Websocket notifications handed to open connections",
        ))?;
        registry.register(Box::new(notifications_delivered_total.clone()))?;

        let flights_seeded_total =
            IntCounter::with_opts(Opts::new("flights_seeded_total", "Synthetic flights created"))?;
        registry.register(Box::new(flights_seeded_total.clone()))?;

        let otp_verifications_total = IntCounterVec::new(
            Opts::new("otp_verifications_total", "OTP verification attempts"),
            &["outcome"],
        )?;
        registry.register(Box::new(otp_verifications_total.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            tickets_created_total,
            notifications_delivered_total,
            flights_seeded_total,
            otp_verifications_total,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
