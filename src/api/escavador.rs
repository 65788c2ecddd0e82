use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::client::{ClientConfig, ProceedingsApi};
use super::types::{CnpjSearch, ProceedingsPage, RawProceedingsResponse};
use crate::error::{Result, TrabalhistaError};
use crate::lookup;

const PROCESSES_PATH: &str = "envolvido/processos";

/// Escavador API v2 client
pub struct EscavadorClient {
    config: ClientConfig,
    http_client: Client,
}

impl EscavadorClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint_base(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the first-page URL for a CNPJ
    fn search_url(&self, cnpj: &str) -> Result<Url> {
        let endpoint = format!("{}{}", self.endpoint_base(), PROCESSES_PATH);
        Url::parse_with_params(&endpoint, &[("cpf_cnpj", cnpj)])
            .map_err(|e| TrabalhistaError::Parse(format!("Invalid base URL '{}': {}", self.config.base_url, e)))
    }

    /// Next links are usually absolute, but relative ones are resolved against the base URL
    fn resolve_next_url(&self, next: &str) -> Result<Url> {
        match Url::parse(next) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&self.endpoint_base())
                .and_then(|base| base.join(next))
                .map_err(|e| TrabalhistaError::Parse(format!("Invalid next page link '{}': {}", next, e))),
            Err(e) => Err(TrabalhistaError::Parse(format!("Invalid next page link '{}': {}", next, e))),
        }
    }

    /// Execute a single GET and decode the proceedings payload. No retries.
    async fn fetch(&self, url: Url) -> Result<RawProceedingsResponse> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.config.api_key)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        info!("Escavador responded with status {}", status);

        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("text/html"))
            .unwrap_or(false);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        if is_html || body.trim_start().starts_with('<') {
            return Err(TrabalhistaError::api_error(
                "INVALID_RESPONSE",
                "API returned HTML instead of JSON.",
                Some("The service may be unavailable or the base URL may be wrong.".to_string()),
            ));
        }

        if body.trim().is_empty() {
            return Err(TrabalhistaError::api_error(
                "EMPTY_RESPONSE",
                "API returned an empty response.",
                Some("This might indicate a server issue. Try again later.".to_string()),
            ));
        }

        serde_json::from_str(&body)
            .map_err(|e| TrabalhistaError::Parse(format!("Failed to parse Escavador response: {}", e)))
    }
}

/// Extract the message Escavador puts in error bodies
fn api_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = lookup::get_str_or(&value, "error", lookup::get_str_or(&value, "message", ""));
    if message.trim().is_empty() {
        None
    } else {
        Some(message.trim().to_string())
    }
}

/// Map a non-success HTTP status to the matching error category
pub(crate) fn status_error(status: StatusCode, body: &str) -> TrabalhistaError {
    let message = api_message(body).unwrap_or_else(|| format!("API request failed with status {}", status));

    match status {
        StatusCode::UNAUTHORIZED => TrabalhistaError::AuthenticationFailed(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => TrabalhistaError::InvalidParams(message),
        StatusCode::PAYMENT_REQUIRED => TrabalhistaError::api_error(
            status.as_str(),
            message,
            Some("Your Escavador account has no credits left for this request.".to_string()),
        ),
        StatusCode::NOT_FOUND => TrabalhistaError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => TrabalhistaError::RateLimit,
        s if s.is_server_error() => TrabalhistaError::ServerError(format!("Server returned status {}: {}", s, message)),
        s => TrabalhistaError::api_error(s.as_str(), message, None),
    }
}

#[async_trait]
impl ProceedingsApi for EscavadorClient {
    async fn search_by_cnpj(&self, cnpj: &str) -> Result<CnpjSearch> {
        if self.config.api_key.trim().is_empty() {
            return Err(TrabalhistaError::NoApiKey);
        }

        if cnpj.is_empty() {
            return Err(TrabalhistaError::InvalidInput("CNPJ must contain digits".to_string()));
        }

        let url = self.search_url(cnpj)?;
        Ok(self.fetch(url).await?.into_search())
    }

    async fn continue_search(&self, page: &ProceedingsPage) -> Result<Option<ProceedingsPage>> {
        let Some(next) = page.next_url.as_deref() else {
            return Ok(None);
        };

        if self.config.api_key.trim().is_empty() {
            return Err(TrabalhistaError::NoApiKey);
        }

        let url = self.resolve_next_url(next)?;
        Ok(Some(self.fetch(url).await?.into_page()))
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }
}
