pub mod welcome_notifier;

pub use welcome_notifier::{EmailWelcomeNotifier, WELCOME_SUBJECT};
