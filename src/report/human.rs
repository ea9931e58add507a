//! Human-readable output formatter.

use super::{ReportFormatter, ReportLine, ReportSummary};
use crate::resolve::Resolution;
use crate::ui::{HasTheme, StatusKind};
use std::io::Write;

/// Placeholder shown for builtins, which are never probed.
pub const BUILTIN_PLACEHOLDER: &str = "shell builtin";

/// Placeholder shown when an executable gave no usable version.
pub const UNKNOWN_VERSION_PLACEHOLDER: &str = "version unknown";

/// Message shown for names that did not resolve.
pub const NOT_FOUND_MESSAGE: &str = "command not found";

/// Formats each result as a single glyph-prefixed line.
pub struct HumanFormatter {
    theme: HasTheme,
}

impl HumanFormatter {
    /// Create a formatter with the given theme.
    pub fn new(theme: HasTheme) -> Self {
        Self { theme }
    }

    /// Render one result without a trailing newline.
    pub fn render(&self, line: &ReportLine) -> String {
        let name = self.theme.name.apply_to(&line.query);
        match (&line.resolution, &line.version) {
            (Resolution::NotFound, _) => StatusKind::Missing.format(
                &self.theme,
                &format!("{} {}", name, NOT_FOUND_MESSAGE),
            ),
            (Resolution::Builtin, _) => StatusKind::Found.format(
                &self.theme,
                &format!("{} {}", name, self.theme.dim.apply_to(BUILTIN_PLACEHOLDER)),
            ),
            (Resolution::Executable(_), Some(version)) => StatusKind::Found.format(
                &self.theme,
                &format!("{} {}", name, self.theme.version.apply_to(version)),
            ),
            (Resolution::Executable(_), None) => StatusKind::Found.format(
                &self.theme,
                &format!(
                    "{} {}",
                    name,
                    self.theme.dim.apply_to(UNKNOWN_VERSION_PLACEHOLDER)
                ),
            ),
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(HasTheme::plain())
    }
}

impl ReportFormatter for HumanFormatter {
    fn line<W: Write>(&mut self, line: &ReportLine, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.render(line))?;
        writer.flush()
    }

    fn finish<W: Write>(&mut self, _summary: &ReportSummary, writer: &mut W) -> std::io::Result<()> {
        writer.flush()
    }
}
