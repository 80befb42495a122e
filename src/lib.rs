// Module declarations
pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod pages;
pub mod router;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::{Config, load_config, save_config};
pub use error::{DevCircleError, DevCircleResult, ErrorContext};
pub use models::*;
pub use router::Route;
