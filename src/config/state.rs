// Application state shared by every handler

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::pages::layout::SiteMetadata;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub site: Arc<SiteMetadata>,
}

impl AppState {
    /// Builds the state around an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
            site: Arc::new(SiteMetadata::default()),
        }
    }

    /// Loads configuration from the process environment (and `.env`)
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        tracing::debug!(environment = %environment.environment, "Configuration loaded");
        Ok(Self::new(environment))
    }
}
