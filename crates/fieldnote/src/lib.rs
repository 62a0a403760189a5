//! Fieldnote Domain Library
//!
//! Core domain types and interfaces for the Fieldnote messaging service:
//! users attach short messages to the entities of a survey data-collection
//! platform (forms, projects, users), and every message becomes an
//! immutable activity record.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Activity, Target, Actor)
//!   - `value_objects/`: Immutable value types (TargetType, Capability)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Authorization and activity-store interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use fieldnote::domain::{Activity, Actor, Target, TargetType};
//! use fieldnote::ports::{ActivityStore, PermissionChecker, TargetRegistry};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Activity, Actor, Capability, MessagingError, Target, TargetType, MESSAGE_VERB,
};
pub use ports::{
    ActivityLog, ActivityObserver, ActivityStore, PermissionChecker, TargetRegistry,
    TargetRepository, TokenRepository,
};
