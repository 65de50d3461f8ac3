//! Top-level client
//!
//! Owns the configuration and the HTTP adapter shared by every endpoint.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpAdapter, HttpClient, HttpClientConfig};
use crate::reserve::Reserve;
use std::fmt;
use std::sync::Arc;

/// Uphold API client
#[derive(Clone)]
pub struct UpholdClient {
    config: ClientConfig,
    adapter: Arc<dyn HttpAdapter>,
}

impl UpholdClient {
    /// Create a client backed by reqwest
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(HttpClientConfig::from(&config))?;
        Ok(Self {
            config,
            adapter: Arc::new(http),
        })
    }

    /// Create a client that sends every request through `adapter`
    pub fn with_adapter(config: ClientConfig, adapter: Arc<dyn HttpAdapter>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, adapter })
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Adapter shared by every endpoint
    pub fn adapter(&self) -> Arc<dyn HttpAdapter> {
        self.adapter.clone()
    }

    /// Reserve endpoints, paginated with the configured page size
    pub fn reserve(&self) -> Reserve {
        Reserve::new(self.adapter.clone()).with_page_size(self.config.page_size)
    }
}

impl fmt::Debug for UpholdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpholdClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
