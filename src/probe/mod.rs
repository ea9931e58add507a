//! Version probing for resolved executables.
//!
//! [`VersionProbe`] runs the executable with each candidate from
//! [`candidates::candidates_for`] in order, and keeps the first attempt that
//! exits 0 with non-empty output. Every failure (spawn error, timeout,
//! non-zero exit, empty output) just moves on to the next candidate; when
//! all of them fail the command still counts as found, with no version.

pub mod candidates;
pub mod clean;

use std::path::Path;
use std::time::Duration;

use crate::error::{HasError, Result};
use crate::shell::{describe, run_with_timeout};

pub use candidates::{candidates_for, ProbeCandidate, VERSION_FLAGS};
pub use clean::{clean_version, MAX_VERSION_LEN};

/// Default ceiling for a single probe attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Asks executables for their version.
#[derive(Debug, Clone)]
pub struct VersionProbe {
    timeout: Duration,
}

impl Default for VersionProbe {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl VersionProbe {
    /// Create a probe with the given per-attempt timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Find a version string for `name`, resolved to `executable`.
    pub fn probe(&self, name: &str, executable: &Path) -> Option<String> {
        for candidate in candidates_for(name) {
            match self.attempt(name, executable, candidate) {
                Ok(version) => {
                    tracing::debug!("'{}' version via {:?}: {}", name, candidate.args, version);
                    return Some(version);
                }
                Err(e) => tracing::debug!("Probe candidate failed: {}", e),
            }
        }
        tracing::debug!("No version found for '{}'", name);
        None
    }

    /// Run one candidate and turn its output into a version string.
    pub fn attempt(
        &self,
        name: &str,
        executable: &Path,
        candidate: ProbeCandidate,
    ) -> Result<String> {
        let args = candidate.to_args();
        let result = run_with_timeout(executable, &args, self.timeout)?;

        if !result.success {
            return Err(HasError::ProbeNonZeroExit {
                command: describe(executable, &args),
                code: result.exit_code,
            });
        }

        tracing::debug!(
            "'{}' exited 0 in {:?}",
            describe(executable, &args),
            result.duration
        );

        let prefix = prefix_name(name);
        clean_version(prefix, &result.stdout)
            .or_else(|| clean_version(prefix, &result.stderr))
            .ok_or_else(|| HasError::ProbeEmptyOutput {
                command: describe(executable, &args),
            })
    }
}

/// Name a program is likely to echo back at the start of its version line.
fn prefix_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}
