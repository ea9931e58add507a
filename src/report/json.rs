//! JSON output formatter.
//!
//! Buffers every result and writes a single document on `finish`, for
//! scripts that want structured output.

use super::{ReportFormatter, ReportLine, ReportSummary};
use serde::Serialize;
use std::io::Write;

/// Formats results as one JSON object.
#[derive(Default)]
pub struct JsonFormatter {
    results: Vec<JsonResult>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: &'a [JsonResult],
    summary: JsonSummary,
}

#[derive(Debug, Serialize)]
struct JsonResult {
    name: String,
    status: &'static str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    found: usize,
    missing: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportFormatter for JsonFormatter {
    fn line<W: Write>(&mut self, line: &ReportLine, _writer: &mut W) -> std::io::Result<()> {
        self.results.push(JsonResult {
            name: line.query.clone(),
            status: if line.is_found() { "found" } else { "missing" },
            kind: line.resolution.kind(),
            path: line.resolution.path().map(|p| p.display().to_string()),
            version: line.version.clone(),
        });
        Ok(())
    }

    fn finish<W: Write>(&mut self, summary: &ReportSummary, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            results: &self.results,
            summary: JsonSummary {
                total: summary.total,
                found: summary.found,
                missing: summary.missing,
            },
        };
        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        writer.flush()
    }
}
