use std::sync::Arc;

use crate::config::Secrets;

/// Shared, read-only request state.
pub struct AppState {
    pub production: bool,
    pub secrets: Secrets,
}

impl AppState {
    pub fn new(production: bool, secrets: Secrets) -> Arc<Self> {
        Arc::new(Self {
            production,
            secrets,
        })
    }
}
