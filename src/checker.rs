//! Per-name availability check.
//!
//! The `Checker` combines resolution and version probing: builtins are never
//! probed, missing names are never probed, and executables are probed once.

use crate::probe::VersionProbe;
use crate::report::ReportLine;
use crate::resolve::{Resolution, Resolver};

/// Resolves and probes names one at a time.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    resolver: Resolver,
    probe: VersionProbe,
}

impl Checker {
    /// Create a checker from its parts.
    pub fn new(resolver: Resolver, probe: VersionProbe) -> Self {
        Self { resolver, probe }
    }

    /// Check a single name.
    pub fn check_one(&self, query: &str) -> ReportLine {
        let resolution = self.resolver.resolve(query);
        let version = match &resolution {
            Resolution::Executable(path) => self.probe.probe(query.trim(), path),
            Resolution::Builtin | Resolution::NotFound => None,
        };
        ReportLine::new(query, resolution, version)
    }

    /// Check every name in order.
    pub fn check_all<S: AsRef<str>>(&self, queries: &[S]) -> Vec<ReportLine> {
        queries.iter().map(|q| self.check_one(q.as_ref())).collect()
    }
}
