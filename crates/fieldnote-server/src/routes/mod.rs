//! Fieldnote API Routes
//!
//! - /fieldnote/messaging - create and list messages on targets
//! - /fieldnote/messaging/:id - fetch a single message
//! - /health - liveness check

pub mod messaging;
pub mod swagger;
