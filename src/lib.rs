//! has - checks presence of various command line tools.
//!
//! For each requested name, `has` decides whether it is a shell builtin or
//! an executable on the search path, asks executables for a version string,
//! and prints one pass/fail line per name.
//!
//! # Modules
//!
//! - [`checker`] - Resolve-then-probe for a single name
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Version probing heuristics
//! - [`report`] - Human and JSON output
//! - [`resolve`] - Builtin table and search path lookup
//! - [`shell`] - Child process execution with timeouts
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```
//! use has::checker::Checker;
//! use has::probe::VersionProbe;
//! use has::resolve::{Resolution, Resolver};
//!
//! let checker = Checker::new(Resolver::new(Vec::new()), VersionProbe::default());
//! let line = checker.check_one("cd");
//! assert_eq!(line.resolution, Resolution::Builtin);
//! assert!(line.version.is_none());
//! ```

pub mod checker;
pub mod cli;
pub mod error;
pub mod probe;
pub mod report;
pub mod resolve;
pub mod shell;
pub mod ui;

pub use error::{HasError, Result};
