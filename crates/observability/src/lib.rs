use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct PlannerMetrics {
    requests_total: AtomicU64,
    itineraries_total: AtomicU64,
    failures_total: AtomicU64,
    budget_floor_total: AtomicU64,
    over_budget_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub itineraries_total: u64,
    pub failures_total: u64,
    pub budget_floor_total: u64,
    pub over_budget_total: u64,
    pub avg_latency_millis: f64,
}

impl PlannerMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_itinerary(&self) {
        self.itineraries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_failure(&self) {
        self.failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_budget_floor(&self) {
        self.budget_floor_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_over_budget(&self) {
        self.over_budget_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            itineraries_total: self.itineraries_total.load(Ordering::Relaxed),
            failures_total: self.failures_total.load(Ordering::Relaxed),
            budget_floor_total: self.budget_floor_total.load(Ordering::Relaxed),
            over_budget_total: self.over_budget_total.load(Ordering::Relaxed),
            avg_latency_millis: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64 / 1000.0
            },
        }
    }
}

/// Crates whose planning decisions are logged at `info` unless `RUST_LOG` says otherwise.
const PLANNER_TARGETS: [&str; 3] = ["wayfarer_service", "wayfarer_core", "wayfarer_catalog"];

/// `WAYFARER_LOG_FORMAT=text` switches to human-readable lines; anything else keeps JSON.
pub const LOG_FORMAT_ENV: &str = "WAYFARER_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::Json,
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("text") {
            Self::Text
        } else {
            Self::Json
        }
    }
}

pub fn default_filter(service_name: &str) -> String {
    std::iter::once(service_name)
        .chain(PLANNER_TARGETS)
        .map(|target| format!("{target}=info"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Logs go to stderr so command output on stdout stays machine-readable.
/// Later calls are no-ops.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(service_name)));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        match LogFormat::from_env() {
            LogFormat::Json => builder
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .init(),
            LogFormat::Text => builder.with_target(false).init(),
        }
    });
}
