//! Candidate invocations for version probing.

use std::path::Path;

/// One way of asking a program for its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeCandidate {
    /// Arguments passed to the resolved executable.
    pub args: &'static [&'static str],
}

impl ProbeCandidate {
    /// Arguments as owned strings, ready for spawning.
    pub fn to_args(self) -> Vec<String> {
        self.args.iter().map(|a| a.to_string()).collect()
    }
}

/// Generic version flags, in the order they are tried.
pub const VERSION_FLAGS: &[ProbeCandidate] = &[
    ProbeCandidate { args: &["--version"] },
    ProbeCandidate { args: &["-v"] },
    ProbeCandidate { args: &["-V"] },
    ProbeCandidate { args: &["version"] },
    ProbeCandidate { args: &["-version"] },
];

/// Runtime whose version is read by evaluating code instead of a flag.
struct InterpreterProbe {
    command: &'static str,
    candidate: ProbeCandidate,
}

/// Interpreter exceptions, keyed by exact command name.
const INTERPRETER_PROBES: &[InterpreterProbe] = &[InterpreterProbe {
    command: "node",
    candidate: ProbeCandidate {
        args: &["-e", "console.log(process.version)"],
    },
}];

/// Command name used for table lookups: the last path component without
/// a trailing extension (`/usr/bin/node` and `node.exe` both key as `node`).
pub fn command_key(name: &str) -> &str {
    let path = Path::new(name);
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

/// Ordered candidates for `name`: interpreter exception first, then the
/// generic flags.
pub fn candidates_for(name: &str) -> Vec<ProbeCandidate> {
    let key = command_key(name);
    INTERPRETER_PROBES
        .iter()
        .filter(|p| p.command == key)
        .map(|p| p.candidate)
        .chain(VERSION_FLAGS.iter().copied())
        .collect()
}
