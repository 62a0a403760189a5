//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod capability;
mod target_type;

pub use capability::*;
pub use target_type::*;
