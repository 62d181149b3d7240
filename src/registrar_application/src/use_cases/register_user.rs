use registrar_core::{
    AuthToken, BaseHost, CredentialEncoder, CredentialError, Email, NewUser, Notifier, Password,
    TokenIssuer, TokenIssuerError, UserError, UserId, UserName, UserStore, UserStoreError,
};
use secrecy::Secret;

/// Error types specific to the registration use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UserError),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    Storage(UserStoreError),
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
    /// The account was persisted but no token could be issued for it. The caller should
    /// send the user through the regular login path instead of retrying the registration.
    #[error("User {user_id} was created but no token could be issued: {source}")]
    TokenIssuance {
        user_id: UserId,
        source: TokenIssuerError,
    },
}

impl From<UserStoreError> for RegisterUserError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
            other => RegisterUserError::Storage(other),
        }
    }
}

/// Registration use case - creates an account and returns a bearer token for it.
///
/// The steps always run in the same order: lookup, credential derivation, save, token
/// issuance, welcome notification. A failing step stops the flow, except for the
/// notification, whose failure is logged and otherwise ignored.
pub struct RegisterUserUseCase<U, C, T, N>
where
    U: UserStore,
    C: CredentialEncoder,
    T: TokenIssuer,
    N: Notifier,
{
    user_store: U,
    credential_encoder: C,
    token_issuer: T,
    notifier: N,
    base_host: BaseHost,
}

impl<U, C, T, N> RegisterUserUseCase<U, C, T, N>
where
    U: UserStore,
    C: CredentialEncoder,
    T: TokenIssuer,
    N: Notifier,
{
    pub fn new(
        user_store: U,
        credential_encoder: C,
        token_issuer: T,
        notifier: N,
        base_host: BaseHost,
    ) -> Self {
        Self {
            user_store,
            credential_encoder,
            token_issuer,
            notifier,
            base_host,
        }
    }

    /// Parse raw request fields and register the account.
    ///
    /// # Returns
    /// The issued token, or `InvalidInput` before any collaborator is called when a field
    /// does not parse
    #[tracing::instrument(name = "RegisterUserUseCase::create", skip_all)]
    pub async fn create(
        &self,
        name: String,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<AuthToken, RegisterUserError> {
        let name = UserName::try_from(name)?;
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;

        self.execute(name, email, password).await
    }

    /// Execute the registration use case
    ///
    /// # Arguments
    /// * `name` - Display name of the new account
    /// * `email` - Normalized email address, unique per account
    /// * `password` - Plaintext password, handed to the credential encoder only
    #[tracing::instrument(name = "RegisterUserUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        name: UserName,
        email: Email,
        password: Password,
    ) -> Result<AuthToken, RegisterUserError> {
        if self.user_store.find_by_email(&email).await?.is_some() {
            return Err(RegisterUserError::UserAlreadyExists);
        }

        let new_user = NewUser::new(name, email);
        let credential = self.credential_encoder.encode(&new_user, &password).await?;

        let user = self
            .user_store
            .save(new_user.with_credential(credential))
            .await?;
        tracing::info!(user_id = %user.id(), "User account created");

        let token = self
            .token_issuer
            .issue(&user)
            .await
            .map_err(|source| RegisterUserError::TokenIssuance {
                user_id: user.id(),
                source,
            })?;

        if let Err(e) = self.notifier.send_welcome(&user, &self.base_host).await {
            tracing::warn!(user_id = %user.id(), error = %e, "Failed to send welcome message");
        }

        Ok(token)
    }
}
