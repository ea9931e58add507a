//! Search path lookup.
//!
//! Resolves a bare command name by walking the directories of `PATH` in
//! order. Does NOT shell out to `which`: its behavior varies across systems
//! and it is sometimes a builtin with inconsistent exit codes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extensions tried on Windows when `PATHEXT` is unset.
pub const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Split a raw `PATH` value into directories, dropping empty entries.
pub fn split_search_path(raw: Option<&OsStr>) -> Vec<PathBuf> {
    raw.map(|path| {
        std::env::split_paths(path)
            .filter(|p| !p.as_os_str().is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    split_search_path(std::env::var_os("PATH").as_deref())
}

/// Split a `PATHEXT`-style value into lowercase-comparable extensions.
pub fn split_pathext(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}

/// File names to look for in each search directory.
///
/// With no extensions (Unix) this is just `tool`. With extensions, a name
/// that already carries one of them is tried as-is; otherwise each
/// extension is appended in order.
pub fn candidate_file_names(tool: &str, extensions: &[String]) -> Vec<String> {
    if extensions.is_empty() {
        return vec![tool.to_string()];
    }
    let lower = tool.to_ascii_lowercase();
    if extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_ascii_lowercase()))
    {
        return vec![tool.to_string()];
    }
    extensions
        .iter()
        .map(|ext| format!("{}{}", tool, ext))
        .collect()
}

/// Whether the name should be treated as a path rather than looked up.
pub fn has_path_separator(tool: &str) -> bool {
    tool.contains('/') || (cfg!(windows) && tool.contains('\\'))
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(
    tool: &str,
    path_entries: &[PathBuf],
    extensions: &[String],
) -> Option<PathBuf> {
    let names = candidate_file_names(tool, extensions);

    if has_path_separator(tool) {
        return names
            .iter()
            .map(PathBuf::from)
            .find(|candidate| is_executable(candidate));
    }

    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
