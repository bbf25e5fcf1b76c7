use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    /// The store answered but the secret is absent or empty. Distinct from a
    /// transport failure so operators can tell a misconfigured secret from a
    /// store outage.
    #[error("secret '{id}' is missing or empty")]
    Missing { id: String },
    #[error("secret store request failed: {0}")]
    Transport(String),
}

/// Fetches the generation credential.
///
/// Implementations must not cache: the resolver is called once per
/// generation request and the extra round trip is the accepted price for
/// immediate credential rotation.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    async fn resolve(&self) -> Result<String, SecretError>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct SecretPayload {
    pub(crate) value: Option<String>,
}

/// Resolves the credential from an HTTP secret store.
pub struct HttpSecretResolver {
    http: reqwest::Client,
    base_url: String,
    secret_id: String,
}

impl HttpSecretResolver {
    pub fn new(base_url: &str, secret_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_id: secret_id.to_string(),
        }
    }
}

pub(crate) fn credential_from(payload: SecretPayload, id: &str) -> Result<String, SecretError> {
    match payload.value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SecretError::Missing { id: id.to_string() }),
    }
}

#[async_trait]
impl SecretResolver for HttpSecretResolver {
    async fn resolve(&self) -> Result<String, SecretError> {
        let url = format!("{}/v1/secret/{}", self.base_url, self.secret_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SecretError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SecretError::Transport(format!(
                "secret store returned {}",
                response.status()
            )));
        }

        let payload: SecretPayload = response
            .json()
            .await
            .map_err(|e| SecretError::Transport(e.to_string()))?;

        credential_from(payload, &self.secret_id)
    }
}
