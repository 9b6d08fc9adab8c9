use model::{error::ConfigurationError, pagination::cursor::KeepAlive};
use reqwest::Url;
use std::{fmt, time::Duration};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9200;
pub const DEFAULT_USERNAME: &str = "elastic";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the store. Credentials are passed to the store
/// verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct ElasticConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub verify_certs: bool,
    pub timeout: Duration,
}

impl ElasticConfig {
    pub fn new(password: impl Into<String>) -> Self {
        ElasticConfig {
            scheme: "https".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.to_string(),
            password: password.into(),
            verify_certs: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(&self) -> Result<Url, ConfigurationError> {
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(ConfigurationError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                self.scheme
            )));
        }
        let raw = format!("{}://{}:{}/", self.scheme, self.host, self.port);
        Url::parse(&raw).map_err(|e| ConfigurationError::InvalidEndpoint(format!("{raw}: {e}")))
    }

    /// `/{index}/_search`, with `?scroll=<keep-alive>` when opening a scroll.
    pub fn search_url(
        &self,
        index: &str,
        scroll: Option<KeepAlive>,
    ) -> Result<Url, ConfigurationError> {
        validate_index(index)?;
        let mut url = self
            .base_url()?
            .join(&format!("{index}/_search"))
            .map_err(|e| ConfigurationError::InvalidEndpoint(e.to_string()))?;
        if let Some(keep_alive) = scroll {
            url.query_pairs_mut()
                .append_pair("scroll", &keep_alive.to_string());
        }
        Ok(url)
    }

    pub fn scroll_url(&self) -> Result<Url, ConfigurationError> {
        self.base_url()?
            .join("_search/scroll")
            .map_err(|e| ConfigurationError::InvalidEndpoint(e.to_string()))
    }
}

impl fmt::Debug for ElasticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElasticConfig")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("verify_certs", &self.verify_certs)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Index names end up in a URL path; reject anything that would change the
/// path shape or address a system endpoint.
pub fn validate_index(index: &str) -> Result<(), ConfigurationError> {
    let invalid = index.is_empty()
        || index.starts_with(['_', '-', '+'])
        || index
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | ' ' | '"' | '*' | '<' | '>' | '|' | ','));
    if invalid {
        return Err(ConfigurationError::InvalidEndpoint(format!(
            "invalid index name '{index}'"
        )));
    }
    Ok(())
}
