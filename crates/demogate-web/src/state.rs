use std::sync::Arc;

use demogate_core::RateLimiter;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Fixed-window counter store shared by all request handlers. Owned here
    /// and injected at construction so tests can substitute their own.
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let limiter = RateLimiter::new(
            config.rate_limit.login_attempts,
            config.rate_limit_window(),
        );
        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
        }
    }
}
