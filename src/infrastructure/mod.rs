//! Adapters for the domain ports.

pub mod http;
pub mod in_memory;
pub mod sqlite;
pub mod tracing_events;
