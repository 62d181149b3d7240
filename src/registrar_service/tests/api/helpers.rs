use registrar_adapters::{
    AllowedOrigins, Argon2CredentialEncoder, Claims, EmailWelcomeNotifier, HashMapUserStore,
    JwtConfig, JwtTokenIssuer, MockEmailClient, config::test,
};
use registrar_application::RegisterUserUseCase;
use registrar_core::{BaseHost, EmailClient};
use registrar_service::RegistrarService;
use secrecy::Secret;
use tokio::net::TcpListener;

pub const ALLOWED_ORIGIN: &str = "https://app.myapp.com";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
    pub email_client: MockEmailClient,
    token_issuer: JwtTokenIssuer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let email_client = MockEmailClient::new();
        let (address, user_store, token_issuer) = spawn_service(email_client.clone()).await;

        Self {
            address,
            http_client: reqwest::Client::new(),
            user_store,
            email_client,
            token_issuer,
        }
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn validate_token(&self, token: &str) -> Claims {
        self.token_issuer
            .validate(token)
            .expect("Token should be valid")
    }
}

/// Start a server on a random port with in-memory storage and the given email client.
pub async fn spawn_service<E>(email_client: E) -> (String, HashMapUserStore, JwtTokenIssuer)
where
    E: EmailClient + 'static,
{
    let user_store = HashMapUserStore::new();
    let token_issuer = JwtTokenIssuer::new(JwtConfig {
        secret: Secret::new("test-jwt-secret".to_string()),
        token_ttl_in_seconds: 600,
    });

    let use_case = RegisterUserUseCase::new(
        user_store.clone(),
        Argon2CredentialEncoder::new(),
        token_issuer.clone(),
        EmailWelcomeNotifier::new(email_client),
        BaseHost::new(test::BASE_HOST),
    );

    let listener = TcpListener::bind(test::APP_ADDRESS)
        .await
        .expect("Failed to bind test listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    let allowed_origins = AllowedOrigins::new(vec![ALLOWED_ORIGIN.to_string()]);
    tokio::spawn(RegistrarService::new(use_case).run_standalone(listener, Some(allowed_origins)));

    (address, user_store, token_issuer)
}
