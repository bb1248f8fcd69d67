//! langid Server
//!
//! HTTP front end for a pre-trained language identification model.
//!
//! The classifier is loaded once at startup and injected into the router
//! state. When loading fails the service still starts and reports
//! `model_loaded: false`, answering every detection with a server error.

pub mod cli;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use cli::Cli;
pub use config::{CorsConfig, ServerConfig};
pub use error::ApiError;
pub use routes::build_app;
pub use state::AppState;
