//! HTTP handlers that render HTML

pub mod handlers;
