use crate::autocomplete::response::parse_autocomplete_body;
use crate::autocomplete::traits::AutocompleteSource;
use crate::config::Config;
use crate::error::AutocompleteError;
use crate::models::SuggestionGroup;
use crate::search::AutocompleteRequest;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

const AUTOCOMPLETE_PATH: &str = "/properties/autocomplete/";

/// Autocomplete backed by the listings API
pub struct HttpAutocompleteClient {
    client: Client,
    endpoint: String,
}

impl HttpAutocompleteClient {
    pub fn new(config: &Config) -> Result<Self, AutocompleteError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("listing-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_for(&config.api_base_url)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_for(base_url: &str) -> Result<String, AutocompleteError> {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() || base.contains('?') {
        return Err(AutocompleteError::Url(base_url.to_string()));
    }
    Ok(format!("{}{}", base, AUTOCOMPLETE_PATH))
}

#[async_trait]
impl AutocompleteSource for HttpAutocompleteClient {
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<SuggestionGroup>, AutocompleteError> {
        debug!(endpoint = %self.endpoint, query = %request.query, "fetching suggestions");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&request.to_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("autocomplete returned status: {}", response.status());
            return Err(AutocompleteError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of suggestions", body.len());

        parse_autocomplete_body(&body)
    }

    fn source_name(&self) -> &'static str {
        "listings API"
    }
}
