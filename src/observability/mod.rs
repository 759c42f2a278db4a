//! Observability: tracing setup and log file rotation.
//!
//! The crate emits `tracing` spans and events throughout the store and
//! application layers. This module wires them to an output:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | rotating log file
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file sink with size-based rotation

pub mod file_writer;
mod init;

pub use init::init_tracing;
