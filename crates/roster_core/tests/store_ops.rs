use roster_core::{
    ConfigValidationError, IdGenerator, Role, StoreConfig, StoreError, UserId, UserStore,
    UserValidationError,
};
use uuid::Uuid;

#[test]
fn add_user_appends_normalized_record() {
    let mut store = UserStore::new();

    let user_id = store
        .add_user("  John Doe  ", "John@Example.COM", Role::Administrator)
        .unwrap();

    assert_eq!(store.len(), 1);
    let user = store.get_user(user_id).unwrap();
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john@example.com");
    assert_eq!(user.role, Role::Administrator);
    assert!(user.is_active());
}

#[test]
fn insert_failures_leave_store_unchanged() {
    let mut store = UserStore::new();
    store
        .add_user("Jane Smith", "jane@example.com", Role::Standard)
        .unwrap();

    let empty_name = store.add_user(" ", "a@b.com", Role::Standard).unwrap_err();
    assert!(matches!(
        empty_name,
        StoreError::Validation(UserValidationError::EmptyName)
    ));

    let bad_email = store
        .add_user("Ann", "not-an-email", Role::Standard)
        .unwrap_err();
    assert!(matches!(
        bad_email,
        StoreError::Validation(UserValidationError::InvalidEmail(value)) if value == "not-an-email"
    ));

    assert_eq!(store.len(), 1);
}

#[test]
fn validation_checks_name_before_email() {
    let mut store = UserStore::new();

    let err = store.add_user("   ", "not-an-email", Role::Standard).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(UserValidationError::EmptyName)
    ));
    assert!(store.is_empty());
}

#[test]
fn list_by_role_filters_and_preserves_insertion_order() {
    let mut store = UserStore::new();
    store
        .add_user("John Doe", "john@example.com", Role::Administrator)
        .unwrap();
    store
        .add_user("Jane Smith", "jane@example.com", Role::Standard)
        .unwrap();
    store
        .add_user("Ada Root", "ada@example.com", Role::Administrator)
        .unwrap();

    let admins = store.list_by_role(Role::Administrator);
    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].name, "John Doe");
    assert_eq!(admins[1].name, "Ada Root");

    assert!(store.list_by_role(Role::Moderator).is_empty());
}

#[test]
fn list_by_role_on_empty_store_is_empty() {
    let store = UserStore::new();
    assert!(store.list_by_role(Role::Standard).is_empty());
}

#[test]
fn capacity_cap_is_enforced() {
    let config = StoreConfig {
        max_users: 2,
        ..StoreConfig::default()
    };
    let mut store = UserStore::try_with_config(config).unwrap();

    store
        .add_user("John Doe", "john@example.com", Role::Standard)
        .unwrap();
    store
        .add_user("Jane Smith", "jane@example.com", Role::Standard)
        .unwrap();

    let err = store
        .add_user("Bob Wilson", "bob@example.com", Role::Standard)
        .unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { max_users: 2 }));
    assert_eq!(store.len(), 2);
}

#[test]
fn default_role_insert_uses_configured_role() {
    let config = StoreConfig {
        default_role: Role::Moderator,
        ..StoreConfig::default()
    };
    let mut store = UserStore::try_with_config(config).unwrap();

    let user_id = store
        .add_user_with_default_role("Bob Wilson", "bob@example.com")
        .unwrap();

    assert_eq!(store.get_user(user_id).unwrap().role, Role::Moderator);
}

#[test]
fn get_user_hits_and_misses() {
    let mut store = UserStore::new();
    let user_id = store
        .add_user("John Doe", "john@example.com", Role::Standard)
        .unwrap();

    assert_eq!(store.get_user(user_id).unwrap().name, "John Doe");
    assert!(store.get_user(Uuid::new_v4()).is_none());
}

#[test]
fn find_by_email_is_case_insensitive_on_the_probe() {
    let mut store = UserStore::new();
    store
        .add_user("John Doe", "John@Example.com", Role::Standard)
        .unwrap();

    let found = store.find_by_email("JOHN@EXAMPLE.COM").unwrap();
    assert_eq!(found.name, "John Doe");
    assert!(store.find_by_email("jane@example.com").is_none());
}

#[test]
fn try_with_config_rejects_zero_cap() {
    let config = StoreConfig {
        max_users: 0,
        ..StoreConfig::default()
    };

    let err = UserStore::try_with_config(config).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Config(ConfigValidationError::ZeroMaxUsers)
    ));
}

#[test]
fn injected_generator_yields_deterministic_ids() {
    let mut store =
        UserStore::try_with_parts(StoreConfig::default(), SequencedIdGenerator::default())
            .unwrap();

    let first = store
        .add_user("John Doe", "john@example.com", Role::Standard)
        .unwrap();
    let second = store
        .add_user("Jane Smith", "jane@example.com", Role::Standard)
        .unwrap();

    assert_eq!(first, Uuid::from_u128(1));
    assert_eq!(second, Uuid::from_u128(2));
}

#[derive(Default)]
struct SequencedIdGenerator {
    issued: u128,
}

impl IdGenerator for SequencedIdGenerator {
    fn next_id(&mut self) -> UserId {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}
