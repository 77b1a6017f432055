pub mod compute;
pub mod service;
