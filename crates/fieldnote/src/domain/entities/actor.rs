//! Actor Entity
//!
//! The authenticated caller of a messaging operation. Resolved by the
//! auth layer from request credentials, never taken from a request body.

use serde::{Deserialize, Serialize};

/// An authenticated platform user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub username: String,
}

impl Actor {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
