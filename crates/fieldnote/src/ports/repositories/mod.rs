//! Repository Ports
//!
//! Abstract interfaces for data access operations.

mod activity_log;
mod target_repository;
mod token_repository;

pub use activity_log::*;
pub use target_repository::*;
pub use token_repository::*;
