//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record held by the store.
//! - Normalize and validate raw name/email input before a record exists.
//!
//! # Invariants
//! - `id` is stable and never reused for another user.
//! - `name` carries no surrounding whitespace and is non-empty.
//! - `email` is lower-cased and contains both `@` and `.`.
//! - `is_active` starts as `true`; no operation ever clears it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every user record in a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Closed set of permission levels attached to a user record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular account without elevated permissions.
    #[default]
    Standard,
    /// Full administrative permissions.
    Administrator,
    /// Content moderation permissions.
    Moderator,
}

impl Role {
    /// Returns the wire spelling of this role.
    ///
    /// Matches the serde representation, so log lines and serialized
    /// records agree on naming.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Administrator => "administrator",
            Self::Moderator => "moderator",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical user record held by the store.
///
/// Records are immutable after insertion: the store appends them once and
/// never updates or removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable opaque ID, unique within one store lifetime.
    pub id: UserId,
    /// Display name, trimmed of surrounding whitespace.
    pub name: String,
    /// Lower-cased email address.
    pub email: String,
    /// Permission level attached to this record.
    pub role: Role,
    /// Insertion time, serialized as an RFC 3339 string.
    pub created_at: DateTime<Utc>,
    /// Visibility flag for role-based queries. Never cleared.
    pub is_active: bool,
}

impl User {
    /// Creates a record from already-normalized parts.
    ///
    /// # Invariants
    /// - Callers pass `name`/`email` through [`normalize_name`] and
    ///   [`normalize_email`] first; this constructor does not re-validate.
    /// - `is_active` starts as `true`.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            created_at,
            is_active: true,
        }
    }

    /// Returns whether this record is visible to role-based queries.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Validation failure for raw insert input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name is empty after trimming surrounding whitespace.
    EmptyName,
    /// Email lacks `@` or `.`; carries the rejected input.
    InvalidEmail(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email format: {value}"),
        }
    }
}

impl Error for UserValidationError {}

/// Normalizes one display name according to the insert contract.
///
/// Trims surrounding whitespace; rejects names that are empty afterwards.
pub fn normalize_name(name: &str) -> Result<String, UserValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Normalizes one email address according to the insert contract.
///
/// The acceptance rule is deliberately shallow: the input must contain both
/// `@` and `.` as substrings, nothing more. Accepted values are lower-cased.
pub fn normalize_email(email: &str) -> Result<String, UserValidationError> {
    if !(email.contains('@') && email.contains('.')) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_lowercase())
}
