//! Service Ports
//!
//! Interfaces for authorization and the activity store.

mod activity_store;
mod permission_checker;

pub use activity_store::*;
pub use permission_checker::*;
