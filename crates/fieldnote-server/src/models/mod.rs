//! Fieldnote Data Models
//!
//! Request and response shapes for the HTTP API. The domain types live
//! in the fieldnote crate; these are their wire projections.

mod message;

pub use message::*;
