use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::{BackendError, QaBackend};
use crate::api::{AnswerResult, AskRequest, ErrorBody, HealthStatus, Question};
use crate::config::BackendConfig;

/// Join an endpoint path onto a base URL, treating the base as a directory.
///
/// `http://host/api/v1` + `ask` yields `http://host/api/v1/ask`, not
/// `http://host/api/ask`.
pub fn join_endpoint(base: &Url, path: &str) -> Result<Url, BackendError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path.trim_start_matches('/'))
        .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", path, e)))
}

/// Backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Build a backend from configuration.
    ///
    /// No request timeout is applied unless `timeout_secs` is set.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        info!("Using backend at {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl QaBackend for HttpBackend {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        let url = join_endpoint(&self.base_url, "health")?;
        debug!(%url, "Checking backend health");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let health: HealthStatus =
            serde_json::from_str(&body).map_err(|e| BackendError::InvalidBody(e.to_string()))?;

        debug!(
            http_status = status.as_u16(),
            status = %health.status,
            vector_db_loaded = health.vector_db_loaded,
            "Health check answered"
        );

        Ok(health)
    }

    async fn ask(&self, question: &Question) -> Result<AnswerResult, BackendError> {
        let url = join_endpoint(&self.base_url, "ask")?;
        debug!(%url, question = %question, "Submitting question");

        let response = self
            .client
            .post(url)
            .json(&AskRequest::from(question))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if status.is_success() {
            let result: AnswerResult = serde_json::from_str(&body)
                .map_err(|e| BackendError::InvalidBody(e.to_string()))?;
            debug!(
                documents = result.retrieved_documents.len(),
                "Answer received"
            );
            Ok(result)
        } else {
            let error: ErrorBody = serde_json::from_str(&body)
                .map_err(|e| BackendError::InvalidBody(e.to_string()))?;
            warn!(status = status.as_u16(), error = ?error.error, "Backend rejected question");
            Err(BackendError::Application {
                status: status.as_u16(),
                message: error.error,
            })
        }
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}
