//! Visual theme and styling.

use console::Style;

/// Styles applied to report lines.
#[derive(Debug, Clone)]
pub struct HasTheme {
    /// Style for the success glyph (green bold).
    pub success: Style,
    /// Style for the failure glyph (red bold).
    pub error: Style,
    /// Style for the queried name.
    pub name: Style,
    /// Style for detected version text.
    pub version: Style,
    /// Style for placeholders and secondary text (dim).
    pub dim: Style,
}

impl Default for HasTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HasTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().bold().force_styling(true),
            error: Style::new().red().bold().force_styling(true),
            name: Style::new(),
            version: Style::new(),
            dim: Style::new().dim().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            name: Style::new(),
            version: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick [`HasTheme::new`] or [`HasTheme::plain`] based on the terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
