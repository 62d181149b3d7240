pub mod auth_token;
pub mod base_host;
pub mod credential;
pub mod email;
pub mod password;
pub mod user;
pub mod user_id;
pub mod user_name;
