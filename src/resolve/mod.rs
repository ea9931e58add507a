//! Name resolution.
//!
//! A query resolves to one of three outcomes:
//!
//! - [`Resolution::Builtin`] when the name is in the static shell builtin
//!   table ([`builtins::SHELL_BUILTINS`])
//! - [`Resolution::Executable`] when a matching executable file is on the
//!   search path (or at the given path, for names containing a separator)
//! - [`Resolution::NotFound`] otherwise
//!
//! # Example
//!
//! ```
//! use has::resolve::{Resolution, Resolver};
//!
//! let resolver = Resolver::new(Vec::new());
//! assert_eq!(resolver.resolve("cd"), Resolution::Builtin);
//! assert_eq!(resolver.resolve("nonexistentcmd123"), Resolution::NotFound);
//! ```

pub mod builtins;
pub mod path;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::HasError;

pub use builtins::{is_builtin, SHELL_BUILTINS};
pub use path::{is_executable, parse_system_path, resolve_tool_path};

/// Outcome of looking up a single name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Neither a builtin nor on the search path.
    NotFound,
    /// Implemented by the shell itself.
    Builtin,
    /// Executable file found at this path.
    Executable(PathBuf),
}

impl Resolution {
    /// Whether the name is available in any form.
    pub fn is_found(&self) -> bool {
        !matches!(self, Resolution::NotFound)
    }

    /// Resolved executable path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Executable(path) => Some(path),
            _ => None,
        }
    }

    /// Stable lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::NotFound => "not_found",
            Resolution::Builtin => "builtin",
            Resolution::Executable(_) => "executable",
        }
    }
}

/// Resolves names against the builtin table and a fixed search path.
#[derive(Debug, Clone)]
pub struct Resolver {
    path_entries: Vec<PathBuf>,
    extensions: Vec<String>,
    shell_check_timeout: Duration,
}

impl Resolver {
    /// Create a resolver over explicit search directories.
    pub fn new(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            extensions: Vec::new(),
            shell_check_timeout: Duration::from_secs(2),
        }
    }

    /// Create a resolver from the process's `PATH` (and `PATHEXT` on Windows).
    pub fn from_env() -> Self {
        let resolver = Self::new(parse_system_path());
        if cfg!(windows) {
            let raw = std::env::var("PATHEXT").unwrap_or_else(|_| path::DEFAULT_PATHEXT.into());
            resolver.with_extensions(path::split_pathext(&raw))
        } else {
            resolver
        }
    }

    /// Set the executable extensions tried for bare names.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the timeout for the debug-only bash builtin check.
    pub fn with_shell_check_timeout(mut self, timeout: Duration) -> Self {
        self.shell_check_timeout = timeout;
        self
    }

    /// Search directories, in lookup order.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }

    /// Resolve a single name.
    pub fn resolve(&self, name: &str) -> Resolution {
        let name = name.trim();
        if name.is_empty() {
            return Resolution::NotFound;
        }

        if is_builtin(name) {
            if tracing::enabled!(tracing::Level::DEBUG) {
                self.log_shell_verdict(name);
            }
            return Resolution::Builtin;
        }

        match resolve_tool_path(name, &self.path_entries, &self.extensions) {
            Some(path) => {
                tracing::debug!("Resolved '{}' to {}", name, path.display());
                Resolution::Executable(path)
            }
            None => {
                let err = HasError::NotFound { name: name.to_string() };
                tracing::debug!("{} ({} PATH entries searched)", err, self.path_entries.len());
                Resolution::NotFound
            }
        }
    }

    /// Cross-check a table hit against bash, for diagnostics only.
    fn log_shell_verdict(&self, name: &str) {
        let Some(bash) = resolve_tool_path("bash", &self.path_entries, &self.extensions) else {
            tracing::debug!("'{}' is a known builtin (bash not on PATH to confirm)", name);
            return;
        };
        match builtins::verify_with_shell(&bash, name, self.shell_check_timeout) {
            Some(true) => tracing::debug!("bash confirms '{}' is a shell builtin", name),
            Some(false) => tracing::debug!("bash does not report '{}' as a builtin", name),
            None => {}
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::from_env()
    }
}
