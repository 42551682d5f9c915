use crate::config::AppConfig;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ── Lock-free request counters ──

#[derive(Debug, Default)]
pub struct Counters {
    pub requests_received: AtomicU64,
    pub analyses_completed: AtomicU64,
    pub requests_rejected: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CountersSnapshot {
    pub requests_received: u64,
    pub analyses_completed: u64,
    pub requests_rejected: u64,
}

impl Counters {
    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            requests_received: self.requests_received.load(Ordering::Relaxed),
            analyses_completed: self.analyses_completed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

// ── Shared Application State ──

/// Read-only configuration plus counters. Analyses themselves share nothing.
pub struct AppState {
    pub config: AppConfig,
    pub counters: Counters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            counters: Counters::default(),
        })
    }
}
