pub mod expiry;
pub mod middleware;
pub mod tracing;
