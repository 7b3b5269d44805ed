// src/state.rs
use std::sync::Arc;

pub type SharedState = Arc<AppState>;

/// Service metadata, fixed at startup and only ever read by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub service_id: &'static str,
    pub docs_path: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: "UMKMPRO AI Service",
            version: "1.0.0",
            service_id: "ai-service",
            docs_path: "/docs",
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub info: ServiceInfo,
}

impl AppState {
    pub fn new(info: ServiceInfo) -> Self {
        Self { info }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
