//! HTTP request handlers for the web server.
//!
//! Handlers are thin wrappers that delegate to the core resolver.

pub mod images;
