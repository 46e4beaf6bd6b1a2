use crate::config::Config;
use crate::form::FormLimits;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Numeric bounds applied to every form edit and submission.
    pub limits: FormLimits,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let limits = FormLimits::new(config.max_resolution);
        Self { config, limits }
    }
}
