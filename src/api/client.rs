use async_trait::async_trait;
use crate::error::Result;
use super::types::{CnpjSearch, ProceedingsPage};

/// Default Escavador API v2 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.escavador.com/api/v2";

/// Trait for legal-records API clients
#[async_trait]
pub trait ProceedingsApi: Send + Sync {
    /// Look up the party behind a digits-only CNPJ and fetch its first page of proceedings
    async fn search_by_cnpj(&self, cnpj: &str) -> Result<CnpjSearch>;

    /// Fetch the page after `page`, or `None` when `page` is the last one
    async fn continue_search(&self, page: &ProceedingsPage) -> Result<Option<ProceedingsPage>>;

    /// Get the base URL for this API
    fn base_url(&self) -> &str;

    /// Check if the client is configured properly
    fn is_configured(&self) -> bool;
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 15,
            user_agent: format!("trabalhista-cli/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
