use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use registrar_adapters::config::AllowedOrigins;
use registrar_application::RegisterUserUseCase;
use registrar_core::{CredentialEncoder, Notifier, TokenIssuer, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::signup;
use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the registration use case.
pub struct RegistrarService {
    router: Router,
}

impl RegistrarService {
    /// Create a RegistrarService serving `POST /signup` with the given use case.
    ///
    /// The use case is shared between requests behind an `Arc`, so the collaborators do
    /// not need to be `Clone`.
    pub fn new<U, C, T, N>(use_case: RegisterUserUseCase<U, C, T, N>) -> Self
    where
        U: UserStore + 'static,
        C: CredentialEncoder + 'static,
        T: TokenIssuer + 'static,
        N: Notifier + 'static,
    {
        let router = Router::new()
            .route("/signup", post(signup::<U, C, T, N>))
            .with_state(Arc::new(use_case));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application.
    ///
    /// # Arguments
    /// * `allowed_origins` - Browser origins allowed through CORS. `None` disables the layer
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve the router on `listener` until the process is stopped.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Registrar listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
