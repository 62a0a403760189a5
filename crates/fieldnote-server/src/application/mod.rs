//! Application Layer (Use Cases)
//!
//! Coordinates domain operations over the ports, independent of HTTP
//! and storage concerns.

mod message_service;

pub use message_service::MessageService;
