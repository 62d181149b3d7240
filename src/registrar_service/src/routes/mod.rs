pub mod signup;

pub use signup::{SignupRequest, SignupResponse, signup};
