//! Ordered, immutable catalog of portfolio projects and a read-only HTTP
//! surface that serves it to a site renderer.

pub mod core;
pub mod error;
pub mod server;
