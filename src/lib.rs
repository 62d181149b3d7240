//! # Registrar - User Registration Service
//!
//! Facade crate that re-exports the public API of the registrar components, so an
//! application can depend on one crate to embed or run the signup flow.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `UserName`, `User`, etc.
//! - **Ports**: `UserStore`, `CredentialEncoder`, `TokenIssuer`, `Notifier`, `EmailClient`
//! - **Use case**: `RegisterUserUseCase`
//! - **Adapters**: `PostgresUserStore`, `Argon2CredentialEncoder`, `JwtTokenIssuer`, etc.
//! - **Service**: `RegistrarService`, the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use registrar_core::*;
}

pub use registrar_core::{
    AuthToken, BaseHost, Credential, Email, NewUser, Password, PendingUser, User, UserError,
    UserId, UserName,
};

// ============================================================================
// Ports
// ============================================================================

pub use registrar_core::{
    CredentialEncoder, CredentialError, EmailClient, EmailClientError, Notifier, NotifierError,
    TokenIssuer, TokenIssuerError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

pub use registrar_application::{RegisterUserError, RegisterUserUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    pub use registrar_adapters::{
        authentication, config, credentials, email, notification, persistence,
    };
}

pub use registrar_adapters::{
    AllowedOrigins, Argon2CredentialEncoder, EmailWelcomeNotifier, HashMapUserStore, JwtConfig,
    JwtTokenIssuer, MIGRATOR, MockEmailClient, PostgresUserStore, PostmarkEmailClient,
    RegistrarSettings,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use registrar_service::{ApiError, RegistrarService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
