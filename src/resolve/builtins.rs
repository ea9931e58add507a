//! Shell builtin recognition.

use crate::shell::run_with_timeout;
use std::path::Path;
use std::time::Duration;

/// Bash builtins that have no meaningful standalone executable.
///
/// Sorted so lookups can binary search.
pub const SHELL_BUILTINS: &[&str] = &[
    "alias", "bg", "bind", "break", "builtin", "caller", "cd", "command", "compgen", "complete",
    "continue", "declare", "dirs", "disown", "echo", "enable", "eval", "exec", "exit", "export",
    "fc", "fg", "getopts", "hash", "help", "history", "jobs", "kill", "let", "local", "logout",
    "mapfile", "popd", "printf", "pushd", "pwd", "read", "readarray", "readonly", "return", "set",
    "shift", "shopt", "source", "suspend", "test", "times", "trap", "type", "typeset", "ulimit",
    "umask", "unalias", "unset", "wait",
];

/// Whether `name` is a known shell builtin.
pub fn is_builtin(name: &str) -> bool {
    SHELL_BUILTINS.binary_search(&name).is_ok()
}

/// Ask bash whether it considers `name` a builtin.
///
/// Returns `None` when bash could not be run or gave no answer in time.
pub fn verify_with_shell(bash: &Path, name: &str, timeout: Duration) -> Option<bool> {
    let args = vec!["-c".to_string(), format!("type {}", name)];
    match run_with_timeout(bash, &args, timeout) {
        Ok(result) => Some(result.success && result.stdout.contains("shell builtin")),
        Err(e) => {
            tracing::debug!("Builtin check for '{}' failed: {}", name, e);
            None
        }
    }
}
