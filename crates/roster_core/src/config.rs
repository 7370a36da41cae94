//! Store configuration record.
//!
//! # Responsibility
//! - Carry the store's tunable settings as named, statically typed fields.
//! - Validate configuration before a store accepts it.
//!
//! # Invariants
//! - `max_users` is a hard insert cap and must be non-zero.
//! - `default_role` is the role applied when callers do not pick one.

use crate::model::user::Role;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_MAX_USERS: u32 = 1000;

/// Tunable settings for one user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of records the store accepts.
    pub max_users: u32,
    /// Whether successful inserts emit an informational log line.
    pub enable_logging: bool,
    /// Role applied by the default-role insert path.
    pub default_role: Role,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_users: DEFAULT_MAX_USERS,
            enable_logging: true,
            default_role: Role::Standard,
        }
    }
}

impl StoreConfig {
    /// Validates declaration-level configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_users == 0 {
            return Err(ConfigValidationError::ZeroMaxUsers);
        }
        Ok(())
    }
}

/// Configuration validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// `max_users` of zero would reject every insert.
    ZeroMaxUsers,
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroMaxUsers => write!(f, "max_users must be greater than zero"),
        }
    }
}

impl Error for ConfigValidationError {}
