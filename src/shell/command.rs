//! External process execution.

use crate::error::{Result, SetupError};
use anyhow::anyhow;
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A single external command: program, arguments, and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path.
    pub program: String,

    /// Arguments passed verbatim (no shell involved).
    pub args: Vec<String>,

    /// Working directory (None = inherit).
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the invocation from `cwd`.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Result of running an external command to completion.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl ProcessOutput {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Captured stdout and stderr joined, for diagnostics.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.trim_end().to_string();
        let err = self.stderr.trim_end();
        if !err.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(err);
        }
        out
    }
}

/// Narrow capability for running external tools.
///
/// The bootstrapper only ever talks to the outside world through this
/// trait, so tests substitute [`MockRunner`](super::MockRunner) and assert
/// on the exact invocations.
pub trait ProcessRunner {
    /// Run `invocation` to completion.
    ///
    /// A non-zero exit is reported through [`ProcessOutput::success`], not as
    /// an error. A program that cannot be found is
    /// [`SetupError::ToolNotFound`].
    fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput>;
}

/// Output line from a running process.
#[derive(Debug, Clone)]
enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Runs commands on the host, streaming their output as it arrives.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    echo: bool,
}

impl SystemRunner {
    /// Create a runner. With `echo`, child output is forwarded to the
    /// console line by line; it is always captured.
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput> {
        let start = Instant::now();
        tracing::debug!("Running: {}", invocation);

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SetupError::ToolNotFound {
                    program: invocation.program.clone(),
                }
            } else {
                tracing::debug!("Failed to spawn {}: {}", invocation.program, e);
                SetupError::CommandFailed {
                    command: invocation.to_string(),
                    code: None,
                }
            }
        })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow!("stdout of {} was not captured", invocation.program))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| anyhow!("stderr of {} was not captured", invocation.program))?;

        let (tx, rx) = mpsc::channel();
        let stdout_handle = spawn_reader(stdout, tx.clone(), OutputLine::Stdout);
        let stderr_handle = spawn_reader(stderr, tx, OutputLine::Stderr);

        for line in rx {
            if self.echo {
                match line {
                    OutputLine::Stdout(l) => println!("{}", l),
                    OutputLine::Stderr(l) => eprintln!("{}", l),
                }
            }
        }

        let stdout_output = stdout_handle.join().unwrap_or_default();
        let stderr_output = stderr_handle.join().unwrap_or_default();

        let status = child.wait()?;
        let duration = start.elapsed();
        tracing::debug!(
            "{} exited with {:?} after {:?}",
            invocation.program,
            status.code(),
            duration
        );

        if status.success() {
            Ok(ProcessOutput::success(
                stdout_output,
                stderr_output,
                duration,
            ))
        } else {
            Ok(ProcessOutput::failure(
                status.code(),
                stdout_output,
                stderr_output,
                duration,
            ))
        }
    }
}

/// Drain a child pipe on its own thread, forwarding each line and
/// returning everything read.
fn spawn_reader<R>(
    pipe: R,
    tx: Sender<OutputLine>,
    wrap: fn(String) -> OutputLine,
) -> JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(pipe);
        let mut output = String::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = String::from_utf8_lossy(&buf)
                .trim_end_matches(['\r', '\n'])
                .to_string();
            output.push_str(&line);
            output.push('\n');
            let _ = tx.send(wrap(line));
        }
        output
    })
}
