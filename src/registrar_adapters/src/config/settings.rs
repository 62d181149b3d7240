use std::time::Duration;

use config::{
    Config, ConfigError, Environment, File, FileFormat,
    builder::{ConfigBuilder, DefaultState},
};
use http::HeaderValue;
use registrar_core::BaseHost;
use secrecy::Secret;
use serde::Deserialize;

use crate::authentication::JwtConfig;
use crate::config::constants::{CONFIG_FILE, ENV_PREFIX, env, prod};

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub base_host: BaseHost,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Clone, Deserialize)]
pub struct RegistrarSettings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub jwt: JwtConfig,
    pub email_client: EmailClientSettings,
}

impl RegistrarSettings {
    /// Load settings from, in increasing priority: built-in defaults, the optional
    /// `config/registrar.*` file, `REGISTRAR_*` environment variables (nested keys
    /// separated by `__`), and the conventional `DATABASE_URL`, `JWT_SECRET` and
    /// `POSTMARK_AUTH_TOKEN` variables. A `.env` file is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Self::environment())
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .set_override_option("jwt.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option(
                "email_client.auth_token",
                std::env::var(env::POSTMARK_AUTH_TOKEN_ENV_VAR).ok(),
            )?
            .build()?
            .try_deserialize()
    }

    /// Parse settings from a JSON document layered over the built-in defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("application.allowed_origins")
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.base_host", prod::BASE_HOST)?
            .set_default("application.allowed_origins", Vec::<String>::new())?
            .set_default("postgres.max_connections", prod::MAX_DB_CONNECTIONS)?
            .set_default("jwt.token_ttl_in_seconds", prod::TOKEN_TTL_IN_SECONDS)?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT_IN_MILLIS,
            )
    }
}
