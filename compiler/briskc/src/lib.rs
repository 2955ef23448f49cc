//! Brisk compiler driver.
//!
//! Loads source files, runs the front end and renders its output. The
//! `brisk` binary is a thin argument-dispatch layer over this library.

pub mod commands;
mod config;
mod error;
mod tracing_setup;

pub use config::{parse_lex_args, LexOptions, OutputFormat};
pub use error::DriverError;
pub use tracing_setup::init_tracing;
