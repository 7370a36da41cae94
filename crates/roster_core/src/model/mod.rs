//! Domain model for the user record store.
//!
//! # Responsibility
//! - Define the canonical user record and its role enumeration.
//! - Provide input normalization used by every validated insert.
//!
//! # Invariants
//! - Every record is identified by a stable `UserId`.
//! - Stored names are trimmed and stored emails are lower-cased.

pub mod user;
