use crate::{
    error::{ConnectorError, Operation, TransportError},
    search::{
        config::ElasticConfig,
        transport::SearchTransport,
        wire::{SearchRequest, SearchResponse},
    },
};
use model::pagination::cursor::{KeepAlive, ScrollRequest};
use reqwest::{Url, blocking::Client};
use serde::Serialize;
use tracing::{debug, warn};

/// Blocking HTTPS transport with basic authentication.
pub struct HttpTransport {
    client: Client,
    config: ElasticConfig,
    scroll_url: Url,
}

impl HttpTransport {
    pub fn new(config: ElasticConfig) -> Result<Self, ConnectorError> {
        let scroll_url = config.scroll_url()?;
        if !config.verify_certs {
            warn!(
                "Certificate verification is disabled for {}:{}",
                config.host, config.port
            );
        }
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.verify_certs)
            .timeout(config.timeout)
            .build()?;
        Ok(HttpTransport {
            client,
            config,
            scroll_url,
        })
    }

    fn post<B: Serialize>(
        &self,
        operation: Operation,
        url: Url,
        body: &B,
    ) -> Result<SearchResponse, TransportError> {
        debug!("POST {} ({})", url, operation);
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(body)
            .send()
            .map_err(|e| TransportError::Network {
                operation: operation.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TransportError::Http {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SearchResponse>()
            .map_err(|e| TransportError::Decode {
                operation,
                message: e.to_string(),
            })
    }
}

impl SearchTransport for HttpTransport {
    fn search(
        &self,
        index: &str,
        request: &SearchRequest,
        scroll: Option<KeepAlive>,
    ) -> Result<SearchResponse, TransportError> {
        let operation = Operation::Search {
            index: index.to_string(),
        };
        let url = self
            .config
            .search_url(index, scroll)
            .map_err(|e| TransportError::InvalidRequest {
                operation: operation.clone(),
                message: e.to_string(),
            })?;
        self.post(operation, url, request)
    }

    fn scroll(&self, request: &ScrollRequest) -> Result<SearchResponse, TransportError> {
        self.post(Operation::Scroll, self.scroll_url.clone(), request)
    }
}
