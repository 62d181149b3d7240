use askama::Template;
use registrar_core::{BaseHost, EmailClient, Notifier, NotifierError, User};

pub const WELCOME_SUBJECT: &str = "Welcome to Registrar";

#[derive(Template)]
#[template(path = "welcome_email.html")]
struct WelcomeEmail<'a> {
    name: &'a str,
    login_url: &'a str,
}

/// Sends the welcome message through an [`EmailClient`].
#[derive(Clone)]
pub struct EmailWelcomeNotifier<E> {
    email_client: E,
}

impl<E: EmailClient> EmailWelcomeNotifier<E> {
    pub fn new(email_client: E) -> Self {
        Self { email_client }
    }

    pub fn email_client(&self) -> &E {
        &self.email_client
    }
}

fn login_url(base_host: &BaseHost) -> String {
    format!("{}/login", base_host.as_str().trim_end_matches('/'))
}

#[async_trait::async_trait]
impl<E: EmailClient> Notifier for EmailWelcomeNotifier<E> {
    #[tracing::instrument(name = "Sending welcome email", skip_all, fields(user_id = %subject.id()))]
    async fn send_welcome(
        &self,
        subject: &User,
        base_host: &BaseHost,
    ) -> Result<(), NotifierError> {
        let login_url = login_url(base_host);
        let content = WelcomeEmail {
            name: subject.name().as_str(),
            login_url: &login_url,
        }
        .render()
        .map_err(|e| NotifierError::RenderFailed(e.to_string()))?;

        self.email_client
            .send_email(subject.email(), WELCOME_SUBJECT, &content)
            .await
            .map_err(|e| NotifierError::DeliveryFailed(e.to_string()))
    }
}
