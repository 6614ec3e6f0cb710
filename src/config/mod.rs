//! Configuration loading and application.
pub(crate) mod apply;
mod loader;
pub mod types;


pub use apply::{apply_config, tolerance_table};
pub use loader::load_config;

#[cfg(test)]
pub(crate) use loader::load_config_file;
