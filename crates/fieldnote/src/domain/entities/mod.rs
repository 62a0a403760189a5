//! Domain Entities
//!
//! - Activity: an append-only record of actor/verb/target/description
//! - Target: the resolved entity a message is attached to
//! - Actor: the authenticated caller

mod activity;
mod actor;
mod target;

pub use activity::*;
pub use actor::*;
pub use target::*;
