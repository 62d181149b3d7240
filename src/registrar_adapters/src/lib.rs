pub mod authentication;
pub mod config;
pub mod credentials;
pub mod email;
pub mod notification;
pub mod persistence;

pub use authentication::{Claims, JwtConfig, JwtTokenIssuer, TokenValidationError};
pub use config::{AllowedOrigins, EmailClientSettings, RegistrarSettings};
pub use credentials::Argon2CredentialEncoder;
pub use email::{MockEmailClient, PostmarkEmailClient, SentEmail};
pub use notification::{EmailWelcomeNotifier, WELCOME_SUBJECT};
pub use persistence::{HashMapUserStore, MIGRATOR, PostgresUserStore};
