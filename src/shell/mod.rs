//! Child process execution for version probes.

pub mod command;

pub use command::{describe, run_with_timeout, CommandResult};
