//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod dispatcher;
pub mod notifier;
pub mod postgres;

// Re-exports
pub use dispatcher::ActivityDispatcher;
pub use notifier::HttpNotifier;
pub use postgres::{
    PgActivityLog, PgFormRepository, PgPermissionChecker, PgProjectRepository, PgTokenRepository,
    PgUserRepository,
};
