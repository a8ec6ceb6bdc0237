//! Service implementations
//!
//! Real implementations of the webserver service traits

pub mod password;
pub mod user_store;

// Re-export service implementations
pub use password::{BcryptHasher, DEFAULT_BCRYPT_COST};
pub use user_store::InMemoryUserStore;
