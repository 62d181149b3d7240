pub mod use_cases;

pub use use_cases::register_user::{RegisterUserError, RegisterUserUseCase};
