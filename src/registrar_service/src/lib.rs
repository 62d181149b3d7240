pub mod error;
pub mod routes;
pub mod service;
pub mod telemetry;

pub use error::{ApiError, ErrorResponse};
pub use routes::{SignupRequest, SignupResponse};
pub use service::RegistrarService;
pub use telemetry::init_tracing;
