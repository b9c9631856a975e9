//! Logger setup for the command-line front end.
//!
//! Gradient output goes to stdout, so diagnostics stay on stderr and default
//! to warnings only.

mod init;

pub use init::{init_logging, LoggingConfig};
