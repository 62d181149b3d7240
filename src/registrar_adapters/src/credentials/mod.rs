pub mod argon2_credential_encoder;

pub use argon2_credential_encoder::{
    Argon2CredentialEncoder, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
