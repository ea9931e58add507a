//! Version text cleanup.

use regex::Regex;

/// Longest version text shown, in characters.
pub const MAX_VERSION_LEN: usize = 50;

const ELLIPSIS: &str = "...";

/// Reduce raw probe output to a short version string.
///
/// Keeps the first non-empty line, drops a leading copy of the command
/// name (optionally followed by a parenthesised detail), and truncates to
/// [`MAX_VERSION_LEN`] characters. Returns `None` if nothing is left.
pub fn clean_version(command: &str, raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty())?;
    let stripped = strip_command_prefix(command, line).trim();
    if stripped.is_empty() {
        return None;
    }
    Some(truncate(stripped, MAX_VERSION_LEN))
}

/// Remove `command`, `command (details)` and the whitespace after it from
/// the start of `line`. The name must be followed by whitespace, a
/// parenthesis or end of line, so `gitk 1.0` keeps its prefix for `git`.
pub fn strip_command_prefix<'a>(command: &str, line: &'a str) -> &'a str {
    if command.is_empty() {
        return line;
    }
    let pattern = format!(r"^{}(?:\s*\([^)]*\))?(?:\s+|$)", regex::escape(command));
    match Regex::new(&pattern) {
        Ok(re) => match re.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        },
        Err(e) => {
            tracing::debug!("Skipping prefix strip for '{}': {}", command, e);
            line
        }
    }
}

/// Shorten to at most `max` characters, ending in `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
