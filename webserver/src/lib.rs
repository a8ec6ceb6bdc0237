//! Webserver library for the performer arena
//!
//! REST API over the performer engine: listing, ranking and running
//! performers, plus user registration.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod validation;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use types::*;
pub use webserver_impl::{WebServer, build_router};

// Re-export trait definitions
pub use traits::{PasswordHasher, UserStore};

// Re-export service implementations
pub use services::{BcryptHasher, InMemoryUserStore};
