use anyhow::Result;
use serde::Deserialize;
use std::fmt;

fn default_token_ttl_secs() -> u64 {
    3600
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub livekit: LiveKitConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "pitwall-voice".to_string(),
            http: HttpConfig {
                bind: "127.0.0.1".to_string(),
                port: 8080,
            },
        }
    }
}

/// LiveKit connection settings.
///
/// `url` is the client-visible server endpoint; `api_key`/`api_secret` are the
/// server-side signing key pair and must never reach a client.
#[derive(Clone, Deserialize)]
pub struct LiveKitConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub api_secret: String,

    /// JWT TTL in seconds for join tokens. Default: 3600 (1 hour).
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl Default for LiveKitConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

impl fmt::Debug for LiveKitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveKitConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl LiveKitConfig {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }

    /// Whether the signing key pair is present.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl Config {
    /// Load configuration from an optional file, then layer overrides from the
    /// environment. The config file is not required: credential-only
    /// deployments can run from `LIVEKIT_*` variables alone.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("PITWALL").separator("__"))
            .set_override_option("livekit.url", std::env::var("LIVEKIT_URL").ok())?
            .set_override_option("livekit.api_key", std::env::var("LIVEKIT_API_KEY").ok())?
            .set_override_option(
                "livekit.api_secret",
                std::env::var("LIVEKIT_API_SECRET").ok(),
            )?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
