use crate::config::ServerConfig;
use std::sync::Arc;
use x402::Verifier;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub verifier: Arc<Verifier>,
}

impl AppState {
    pub fn new(config: ServerConfig, verifier: Verifier) -> Self {
        Self {
            config: Arc::new(config),
            verifier: Arc::new(verifier),
        }
    }

    /// State with the verifier the config asks for.
    pub fn from_config(config: ServerConfig) -> Self {
        let verifier = config.build_verifier(reqwest::Client::new());
        Self::new(config, verifier)
    }
}
