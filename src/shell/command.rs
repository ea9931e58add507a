//! Probe process execution.
//!
//! Runs a program directly (no shell) with captured output and a hard
//! timeout. The child is always reaped before [`run_with_timeout`] returns,
//! including when it had to be killed.

use crate::error::{HasError, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

const READ_CHUNK: usize = 4096;

/// Result of a probe process that exited on its own.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_status(status: ExitStatus, output: Captured, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration,
            success: status.success(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

type Chunk = (Stream, Vec<u8>);

/// Bytes read from the child's pipes so far.
#[derive(Debug, Default)]
struct Captured {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Captured {
    fn push(&mut self, (stream, bytes): Chunk) {
        match stream {
            Stream::Stdout => self.stdout.extend_from_slice(&bytes),
            Stream::Stderr => self.stderr.extend_from_slice(&bytes),
        }
    }
}

/// Render a program and its arguments as a single display string.
pub fn describe(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// stdin is closed so interactive programs see EOF instead of waiting for
/// input. If the process is still running after `timeout` it is killed
/// (its whole process group on Unix), reaped, and
/// [`HasError::ProbeTimedOut`] is returned.
///
/// The same deadline bounds reading the pipes. A process that exits but
/// leaves a background descendant holding them open gets its group killed
/// at the deadline, and the output read up to then is returned.
pub fn run_with_timeout(program: &Path, args: &[String], timeout: Duration) -> Result<CommandResult> {
    let command_line = describe(program, args);
    let start = Instant::now();
    let deadline = start.checked_add(timeout);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own group, so a timeout can take down anything the probe forked.
        cmd.process_group(0);
    }

    let mut child = cmd.spawn().map_err(|e| HasError::ProbeSpawn {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        spawn_reader(stdout, Stream::Stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_reader(stderr, Stream::Stderr, tx.clone());
    }
    drop(tx);

    let status = match wait_with_deadline(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            tracing::debug!("Killing '{}' after {:?}", command_line, timeout);
            terminate(&mut child);
            // Readers are left detached: a grandchild outside our reach may
            // still hold the pipes open.
            return Err(HasError::ProbeTimedOut {
                command: command_line,
                timeout,
            });
        }
        Err(e) => {
            terminate(&mut child);
            return Err(e.into());
        }
    };

    let mut output = Captured::default();
    if !drain_until(&rx, deadline, &mut output) {
        tracing::debug!(
            "'{}' exited but its pipes stayed open past {:?}; killing its group",
            command_line,
            timeout
        );
        kill_group(child.id());
    }

    Ok(CommandResult::from_status(status, output, start.elapsed()))
}

/// Poll the child until it exits or the deadline passes.
///
/// Returns `Ok(None)` when the deadline passed first. A `None` deadline
/// (timeout too large to represent) waits indefinitely.
fn wait_with_deadline(
    child: &mut Child,
    deadline: Option<Instant>,
) -> std::io::Result<Option<ExitStatus>> {
    let Some(deadline) = deadline else {
        return child.wait().map(Some);
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

/// Collect chunks until both readers hang up or the deadline passes.
///
/// Returns `false` when the deadline passed with a pipe still open.
fn drain_until(rx: &Receiver<Chunk>, deadline: Option<Instant>, output: &mut Captured) -> bool {
    loop {
        let chunk = match deadline {
            None => match rx.recv() {
                Ok(chunk) => chunk,
                Err(_) => return true,
            },
            Some(deadline) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(chunk) => chunk,
                    Err(RecvTimeoutError::Disconnected) => return true,
                    Err(RecvTimeoutError::Timeout) => return false,
                }
            }
        };
        output.push(chunk);
    }
}

/// Kill the child (and its process group on Unix) and collect its status.
fn terminate(child: &mut Child) {
    kill_group(child.id());
    let _ = child.kill();
    let _ = child.wait();
}

/// SIGKILL the process group led by `pid`.
///
/// The group outlives its leader while any member is alive, so this also
/// reaches descendants of a child that was already reaped.
#[cfg(unix)]
fn kill_group(pid: u32) {
    if let Ok(pid) = libc::pid_t::try_from(pid) {
        // SAFETY: kill() with a negative pid signals the process group we
        // created for this child; it has no memory-safety preconditions.
        unsafe {
            libc::kill(-pid, libc::SIGKILL);
        }
    }
}

#[cfg(not(unix))]
fn kill_group(_pid: u32) {}

/// Forward everything read from `stream` to `tx`, tagged with its origin.
fn spawn_reader<R: Read + Send + 'static>(mut stream: R, tag: Stream, tx: Sender<Chunk>) {
    thread::spawn(move || {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send((tag, buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
    });
}
