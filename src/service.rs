use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::data_models::{ApiException, TargetingIdeaPage, TargetingIdeaSelector};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("service rejected the request ({status}): {exception}")]
    Api {
        status: StatusCode,
        exception: ApiException,
    },
    #[error("service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed targeting idea page")]
    Decode(#[source] serde_json::Error),
}

/// Remote "get ideas" operation: one page per call.
#[allow(async_fn_in_trait)]
pub trait TargetingIdeaService {
    async fn get(&self, selector: &TargetingIdeaSelector)
    -> Result<TargetingIdeaPage, ServiceError>;
}

/// JSON-over-HTTP client for the targeting idea service.
pub struct HttpTargetingIdeaService {
    http: Client,
    url: String,
    access_token: String,
    developer_token: Option<String>,
    client_customer_id: Option<String>,
}

impl HttpTargetingIdeaService {
    pub fn new(config: &Config) -> Result<HttpTargetingIdeaService, ServiceError> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ServiceError::Client)?;

        Ok(HttpTargetingIdeaService {
            http,
            url: format!(
                "{}/TargetingIdeaService/get",
                config.endpoint.trim_end_matches('/')
            ),
            access_token: config.access_token.clone(),
            developer_token: config.developer_token.clone(),
            client_customer_id: config.client_customer_id.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TargetingIdeaService for HttpTargetingIdeaService {
    async fn get(
        &self,
        selector: &TargetingIdeaSelector,
    ) -> Result<TargetingIdeaPage, ServiceError> {
        let transport = |source: reqwest::Error| ServiceError::Transport {
            url: self.url.clone(),
            source,
        };

        let mut req = self
            .http
            .post(&self.url)
            .bearer_auth(&self.access_token)
            .json(selector);
        if let Some(token) = &self.developer_token {
            req = req.header("developerToken", token);
        }
        if let Some(id) = &self.client_customer_id {
            req = req.header("clientCustomerId", id);
        }

        let res = req.send().await.map_err(transport)?;
        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ApiException>(&body) {
                Ok(exception) if !exception.errors.is_empty() => {
                    ServiceError::Api { status, exception }
                }
                _ => ServiceError::Status { status, body },
            });
        }

        serde_json::from_str(&body).map_err(ServiceError::Decode)
    }
}
