//! Core domain logic for Roster.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod idgen;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{ConfigValidationError, StoreConfig};
pub use idgen::{IdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{normalize_email, normalize_name, Role, User, UserId, UserValidationError};
pub use store::{StoreError, StoreResult, UserStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
