//! In-memory user record store.
//!
//! # Responsibility
//! - Own the ordered user record sequence and its configuration.
//! - Gate every insert behind input validation and the capacity cap.
//! - Serve role-filtered reads and the structured-text dump.
//!
//! # Invariants
//! - Every stored record passed validation at insertion time.
//! - Records are never mutated or removed after insertion.
//! - Insertion order is preserved and is the only ordering.
//! - The sequence never exceeds `config.max_users` records.

use crate::config::{ConfigValidationError, StoreConfig};
use crate::idgen::{IdGenerator, UuidIdGenerator};
use crate::model::user::{
    normalize_email, normalize_name, Role, User, UserId, UserValidationError,
};
use chrono::Utc;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for configuration, insert and serialization paths.
#[derive(Debug)]
pub enum StoreError {
    /// Raw insert input failed name/email validation.
    Validation(UserValidationError),
    /// Supplied configuration failed declaration-level validation.
    Config(ConfigValidationError),
    /// Store already holds the configured maximum number of records.
    CapacityExceeded { max_users: u32 },
    /// Structured-text encoder failure while dumping records.
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "invalid store configuration: {err}"),
            Self::CapacityExceeded { max_users } => {
                write!(f, "user capacity of {max_users} reached")
            }
            Self::Serialization(err) => write!(f, "serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::CapacityExceeded { .. } => None,
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<UserValidationError> for StoreError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ConfigValidationError> for StoreError {
    fn from(value: ConfigValidationError) -> Self {
        Self::Config(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// In-memory store holding an ordered sequence of validated user records.
#[derive(Debug)]
pub struct UserStore<G: IdGenerator = UuidIdGenerator> {
    users: Vec<User>,
    config: StoreConfig,
    id_gen: G,
}

impl UserStore<UuidIdGenerator> {
    /// Creates an empty store with default configuration.
    ///
    /// No side effects beyond allocation.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            config: StoreConfig::default(),
            id_gen: UuidIdGenerator::new(),
        }
    }

    /// Creates an empty store after validating the supplied configuration.
    pub fn try_with_config(config: StoreConfig) -> StoreResult<Self> {
        Self::try_with_parts(config, UuidIdGenerator::new())
    }
}

impl Default for UserStore<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> UserStore<G> {
    /// Creates an empty store with a caller-provided identifier generator.
    ///
    /// Used by tests that need deterministic, repeatable ids.
    pub fn try_with_parts(config: StoreConfig, id_gen: G) -> StoreResult<Self> {
        config.validate()?;
        Ok(Self {
            users: Vec::new(),
            config,
            id_gen,
        })
    }

    /// Validates raw input and appends one record.
    ///
    /// # Contract
    /// - Name is checked first (trimmed, non-empty), then email (`@` and `.`
    ///   substrings). A failed check leaves the sequence unchanged.
    /// - Stored records carry the trimmed name and lower-cased email.
    /// - Returns the generated record id as the success confirmation.
    ///
    /// # Side effects
    /// - Emits one `user_add` info line with name and email when
    ///   `config.enable_logging` is set.
    ///
    /// # Errors
    /// - `StoreError::Validation` for rejected input.
    /// - `StoreError::CapacityExceeded` once the store holds
    ///   `config.max_users` records.
    pub fn add_user(&mut self, name: &str, email: &str, role: Role) -> StoreResult<UserId> {
        let name = normalize_name(name)?;
        let email = normalize_email(email)?;

        if self.users.len() >= self.config.max_users as usize {
            return Err(StoreError::CapacityExceeded {
                max_users: self.config.max_users,
            });
        }

        let user = User::new(self.id_gen.next_id(), name, email, role, Utc::now());
        let user_id = user.id;

        if self.config.enable_logging {
            info!(
                "event=user_add module=store status=ok user_id={} name={} email={} role={}",
                user.id, user.name, user.email, user.role
            );
        }

        self.users.push(user);
        Ok(user_id)
    }

    /// Appends one record using the configured default role.
    pub fn add_user_with_default_role(&mut self, name: &str, email: &str) -> StoreResult<UserId> {
        self.add_user(name, email, self.config.default_role)
    }

    /// Lists all active records with the given role, in insertion order.
    ///
    /// Returns an empty list when nothing matches. Pure read.
    pub fn list_by_role(&self, role: Role) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| user.role == role && user.is_active())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Looks one record up by email, case-insensitively on the probe.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let probe = email.to_lowercase();
        self.users.iter().find(|user| user.email == probe)
    }

    /// Returns the full record sequence in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Dumps the full record sequence as pretty-printed JSON.
    ///
    /// Two-space indentation; wire fields are `id`, `name`, `email`,
    /// `role`, `created_at` (RFC 3339) and `is_active`.
    ///
    /// # Errors
    /// - `StoreError::Serialization` when the encoder fails; not expected
    ///   for this fixed field set.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.users)?)
    }
}
