//! Core module - infrastructure components of the application:
//! authentication and JWT handling, configuration, error handling and
//! shared application state.

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

pub use auth::{Claims, authentication_middleware, decode_jwt, encode_jwt, require_admin};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
