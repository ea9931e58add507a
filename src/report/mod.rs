//! Result reporting.
//!
//! One [`ReportLine`] per query, written in query order by a
//! [`ReportFormatter`], plus a [`ReportSummary`] that decides the exit code.

pub mod human;
pub mod json;

use std::io::Write;

use crate::resolve::Resolution;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One colored line per name.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// Everything known about one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// The name exactly as given on the command line.
    pub query: String,
    /// How the name resolved.
    pub resolution: Resolution,
    /// Cleaned version text, if a probe succeeded.
    pub version: Option<String>,
}

impl ReportLine {
    /// Create a report line.
    pub fn new(query: impl Into<String>, resolution: Resolution, version: Option<String>) -> Self {
        Self {
            query: query.into(),
            resolution,
            version,
        }
    }

    /// Whether the query resolved to a builtin or an executable.
    pub fn is_found(&self) -> bool {
        self.resolution.is_found()
    }
}

/// Aggregate counts over all report lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub found: usize,
    pub missing: usize,
}

impl ReportSummary {
    /// Summarize a sequence of lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a ReportLine>) -> Self {
        let mut summary = Self::default();
        for line in lines {
            summary.record(line);
        }
        summary
    }

    /// Count one more line.
    pub fn record(&mut self, line: &ReportLine) {
        self.total += 1;
        if line.is_found() {
            self.found += 1;
        } else {
            self.missing += 1;
        }
    }

    /// True only if every query resolved.
    pub fn is_success(&self) -> bool {
        self.missing == 0
    }

    /// Process exit code: the number of missing names, capped at 255.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.missing).unwrap_or(u8::MAX)
    }
}

/// Writes report lines in some output format.
///
/// `line` is called once per query in order; `finish` once at the end.
pub trait ReportFormatter {
    /// Handle one result.
    fn line<W: Write>(&mut self, line: &ReportLine, writer: &mut W) -> std::io::Result<()>;

    /// Flush anything buffered.
    fn finish<W: Write>(&mut self, summary: &ReportSummary, writer: &mut W) -> std::io::Result<()>;
}
