//! Status glyphs for report lines.

use super::theme::HasTheme;

/// Outcome of a single query as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Command or builtin is available.
    Found,
    /// Command could not be located.
    Missing,
}

impl StatusKind {
    /// Unicode glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Found => "✓",
            Self::Missing => "✗",
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(self, theme: &HasTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Found => theme.success.apply_to(icon).to_string(),
            Self::Missing => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled glyph + message.
    pub fn format(self, theme: &HasTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}
