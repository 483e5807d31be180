//! Initialization logic for logging, shared by binaries and tests.

pub mod tracing;
