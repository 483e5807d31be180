//! Client to the document-validation API.
//!
//! The environment, base origin and endpoint set are resolved once at
//! construction and stay fixed for the page session. Document validation
//! failures propagate to the caller; the config fetch and the health
//! probe are best effort and degrade to defaults instead.

pub mod env;
pub mod request;

pub use crate::{
    env::{DEV_API_ORIGIN, Endpoints, Environment},
    request::{AcademicType, Document, Error, ValidationOutcome, ValidationRequest, ValidationType},
};
use url::Url;

pub struct Client {
    http: reqwest::Client,
    environment: Environment,
    base: Url,
    endpoints: Endpoints,
}

/// Snapshot returned by [`Client::initialize`]. Used for diagnostic
/// logging at page load, never to gate later calls.
#[derive(Clone, Debug)]
pub struct Status {
    pub healthy: bool,
    pub environment: Environment,
    pub base_url: Url,
    pub endpoints: Endpoints,
    pub server_config: Option<serde_json::Value>,
}

impl Client {
    /// Creates a client for the given host environment. `page_origin` is
    /// the origin the page itself was served from; it becomes the API
    /// base in production, where a reverse proxy is co-located with the
    /// API.
    pub fn new(http: reqwest::Client, hostname: &str, page_origin: &Url) -> Self {
        let environment = Environment::detect(hostname);
        let base = environment.base_origin(page_origin);
        let endpoints = Endpoints::new(&base);
        tracing::debug!(
            environment = environment.as_str(),
            base = %base,
            "resolved validation api"
        );
        Self {
            http,
            environment,
            base,
            endpoints,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Submits a document to the selected endpoint and decodes the
    /// verdict. The response body of a failed request is captured for the
    /// log before the error is raised.
    pub async fn validate_document(
        &self,
        request: &ValidationRequest,
        validation_type: ValidationType,
    ) -> Result<ValidationOutcome, Error> {
        let endpoint = self.endpoints.for_type(validation_type);
        tracing::debug!(?validation_type, endpoint = %endpoint, "validating document");
        let response = self
            .http
            .post(endpoint.clone())
            .multipart(request.form(validation_type)?)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!(%status, body, "document validation failed");
            return Err(Error::Status { code: status, body });
        }
        let outcome: ValidationOutcome = serde_json::from_str(&body)?;
        tracing::debug!(valid = outcome.valid, "validation verdict");
        Ok(outcome)
    }

    /// Fetches the server's configuration document. Best effort: any
    /// failure is logged and degrades to `None`.
    pub async fn server_config(&self) -> Option<serde_json::Value> {
        match self.try_server_config().await {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(?err, "could not fetch server config");
                None
            }
        }
    }

    async fn try_server_config(&self) -> Result<serde_json::Value, Error> {
        let response = self.http.get(self.endpoints.config.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status { code: status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Probes the base origin. Transport failures count as unhealthy.
    pub async fn check_api_health(&self) -> bool {
        match self.http.get(self.base.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::warn!(?err, "api unreachable");
                false
            }
        }
    }

    /// Probes the API and fetches its configuration at page load.
    pub async fn initialize(&self) -> Status {
        let healthy = self.check_api_health().await;
        if !healthy {
            tracing::warn!("api not responding, continuing with fallback configuration");
        }
        let server_config = self.server_config().await;
        tracing::info!(
            healthy,
            environment = self.environment.as_str(),
            base_url = %self.base,
            "validation client initialized"
        );
        Status {
            healthy,
            environment: self.environment,
            base_url: self.base.clone(),
            endpoints: self.endpoints.clone(),
            server_config,
        }
    }
}
