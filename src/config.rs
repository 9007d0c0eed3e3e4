use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PAGE_URL: &str = "/buying/";

/// Runtime configuration loaded from environment variables.
///
/// | Env Var                     | Default                 |
/// |-----------------------------|-------------------------|
/// | `LISTING_API_BASE_URL`      | `http://localhost:8000` |
/// | `AUTOCOMPLETE_TIMEOUT_SECS` | `30`                    |
/// | `SEARCH_PAGE_URL`           | `/buying/`              |
/// | `SEARCH_TERM`               | unset                   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    /// Page the search form is hydrated from
    pub page_url: String,
    /// Term to look up, if any
    pub search_term: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_url: DEFAULT_PAGE_URL.to_string(),
            search_term: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup; `from_env` reads the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = match lookup("AUTOCOMPLETE_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "AUTOCOMPLETE_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value,
                    })
                }
            },
            None => defaults.timeout,
        };

        let api_base_url = lookup("LISTING_API_BASE_URL").unwrap_or(defaults.api_base_url);
        let parsed = Url::parse(&api_base_url).ok();
        let is_http = parsed.as_ref().is_some_and(|url| {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        });
        if !is_http {
            return Err(ConfigError::Invalid {
                var: "LISTING_API_BASE_URL",
                expected: "an http(s) URL",
                value: api_base_url,
            });
        }

        Ok(Self {
            api_base_url,
            timeout,
            page_url: lookup("SEARCH_PAGE_URL").unwrap_or(defaults.page_url),
            search_term: lookup("SEARCH_TERM").filter(|t| !t.trim().is_empty()),
        })
    }
}
