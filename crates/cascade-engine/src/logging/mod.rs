//! Logging utilities.
//!
//! The engine itself only emits through the `log` facade. This module offers
//! a one-shot `env_logger` setup for drivers that want console output.

mod init;

pub use init::{init_logging, LoggingConfig};
