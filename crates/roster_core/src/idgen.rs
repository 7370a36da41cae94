//! Identifier generation capability.
//!
//! Generation sits behind a trait so tests can supply deterministic,
//! repeatable identifiers while production code keeps random UUIDs.

use crate::model::user::UserId;
use uuid::Uuid;

/// Generates store-unique user identifiers.
///
/// # Contract
/// - Every call within one process run returns a distinct id.
pub trait IdGenerator {
    fn next_id(&mut self) -> UserId;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> UserId {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, UuidIdGenerator};

    #[test]
    fn generated_ids_are_distinct_and_non_nil() {
        let mut id_gen = UuidIdGenerator::new();

        let first = id_gen.next_id();
        let second = id_gen.next_id();

        assert!(!first.is_nil());
        assert!(!second.is_nil());
        assert_ne!(first, second);
    }
}
