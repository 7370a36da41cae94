//! Demo driver entry point.
//!
//! # Responsibility
//! - Exercise the core store with a fixed demonstration sequence.
//! - Keep stdout limited to the count line and the labelled JSON dump;
//!   diagnostics go to the stderr log channel.
//!
//! # Invariants
//! - Runs with no arguments, flags, or environment variables.
//! - Insertion failures are logged, never fatal; exit status is always 0.

use log::error;
use roster_core::{default_log_level, init_logging, Role, UserStore};

fn main() {
    if let Err(err) = init_logging(default_log_level()) {
        eprintln!("logging unavailable: {err}");
    }

    let mut store = UserStore::new();

    let samples = [
        ("John Doe", "john@example.com", Role::Administrator),
        ("Jane Smith", "jane@example.com", Role::Standard),
        ("Bob Wilson", "bob@example.com", Role::Moderator),
    ];

    for (name, email, role) in samples {
        if let Err(err) = store.add_user(name, email, role) {
            error!(
                "event=user_add module=cli status=error name={} error={}",
                name, err
            );
        }
    }

    let admin_users = store.list_by_role(Role::Administrator);
    println!("Found {} admin users", admin_users.len());

    match store.to_json() {
        Ok(json) => {
            println!("Users JSON:");
            println!("{json}");
        }
        Err(err) => error!("event=store_dump module=cli status=error error={}", err),
    }
}
