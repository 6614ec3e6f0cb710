mod app;
mod config;
mod input;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use input::InputError;
pub use validation::ValidationError;
