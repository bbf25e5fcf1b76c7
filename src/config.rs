use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_GENERATION_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";

/// Service configuration, read from the environment at startup.
///
/// The secret store location and secret identifier are required because the
/// generation endpoint cannot run without them; everything else has a
/// sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub secret_store_url: String,
    pub secret_id: String,
    pub generation_url: String,
    pub generation_model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let secret_store_url =
            std::env::var("SECRET_STORE_URL").context("SECRET_STORE_URL is required")?;
        let secret_id = std::env::var("SECRET_ID").context("SECRET_ID is required")?;

        let generation_url = std::env::var("GENERATION_URL")
            .unwrap_or_else(|_| DEFAULT_GENERATION_URL.to_string());
        let generation_model = std::env::var("GENERATION_MODEL")
            .unwrap_or_else(|_| DEFAULT_GENERATION_MODEL.to_string());

        Ok(Self {
            bind_addr,
            secret_store_url,
            secret_id,
            generation_url,
            generation_model,
        })
    }
}
