use color_eyre::eyre::Result;
use registrar_adapters::{
    Argon2CredentialEncoder, EmailWelcomeNotifier, JwtTokenIssuer, MIGRATOR, PostgresUserStore,
    PostmarkEmailClient, RegistrarSettings,
};
use registrar_application::RegisterUserUseCase;
use registrar_core::Email;
use registrar_service::{RegistrarService, init_tracing};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = RegistrarSettings::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.postgres.max_connections)
        .connect(settings.postgres.url.expose_secret())
        .await?;
    MIGRATOR.run(&pg_pool).await?;

    let http_client = HttpClient::builder()
        .timeout(settings.email_client.timeout())
        .build()?;
    let email_client = PostmarkEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::try_from(Secret::new(settings.email_client.sender.clone()))?,
        settings.email_client.auth_token.clone(),
        http_client,
    );

    let use_case = RegisterUserUseCase::new(
        PostgresUserStore::new(pg_pool),
        Argon2CredentialEncoder::new(),
        JwtTokenIssuer::new(settings.jwt.clone()),
        EmailWelcomeNotifier::new(email_client),
        settings.application.base_host.clone(),
    );

    let allowed_origins = settings.application.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    RegistrarService::new(use_case)
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}
