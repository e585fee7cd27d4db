//! External process execution
//!
//! All package-manager, python, and gcloud invocations go through the
//! [`CommandRunner`] trait so provisioning logic can be exercised in tests
//! without touching the host. [`SystemRunner`] is the real implementation;
//! network-dependent steps wrap their commands with explicit timeouts and
//! bounded retry/backoff instead of hanging indefinitely.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Result, SetupError};

/// Poll interval while waiting on a child with a deadline
const WAIT_POLL: Duration = Duration::from_millis(50);

/// A single external command invocation
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Deadline for the whole invocation; `None` means wait forever
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == 0
    }
}

/// Seam for external process execution
pub trait CommandRunner {
    /// Run a command with captured output
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;

    /// Run a command with inherited stdio (interactive prompts, sudo)
    fn run_interactive(&self, spec: &CommandSpec) -> Result<i32>;

    /// Resolve a program on the current PATH
    fn which(&self, program: &str) -> Option<PathBuf>;
}

/// Real process runner
pub struct SystemRunner;

impl SystemRunner {
    /// Poll a spawned child for exit, killing it at the spec's deadline
    fn poll_until_deadline(spec: &CommandSpec, child: &mut Child) -> Result<std::process::ExitStatus> {
        let deadline = spec.timeout.map(|t| Instant::now() + t);
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {
                    if let Some(deadline) = deadline {
                        if Instant::now() >= deadline {
                            let _ = child.kill();
                            let _ = child.wait();
                            return Err(SetupError::CommandTimeout {
                                program: spec.program.clone(),
                                seconds: spec.timeout.unwrap_or_default().as_secs(),
                            });
                        }
                    }
                    std::thread::sleep(WAIT_POLL);
                }
                Err(e) => {
                    return Err(SetupError::CommandFailed {
                        program: spec.program.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    fn wait_with_deadline(spec: &CommandSpec, mut child: Child) -> Result<CommandOutput> {
        // Drain pipes on threads so a chatty child cannot deadlock on a full
        // pipe buffer while we poll for exit.
        let mut stdout_pipe = child.stdout.take();
        let mut stderr_pipe = child.stderr.take();
        let stdout_thread = std::thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(ref mut pipe) = stdout_pipe {
                let _ = pipe.read_to_end(&mut buf);
            }
            buf
        });
        let stderr_thread = std::thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(ref mut pipe) = stderr_pipe {
                let _ = pipe.read_to_end(&mut buf);
            }
            buf
        });

        let status = Self::poll_until_deadline(spec, &mut child)?;

        let stdout = stdout_thread.join().unwrap_or_default();
        let stderr = stderr_thread.join().unwrap_or_default();

        Ok(CommandOutput {
            status_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SetupError::CommandFailed {
                program: spec.program.clone(),
                reason: e.to_string(),
            })?;

        Self::wait_with_deadline(spec, child)
    }

    fn run_interactive(&self, spec: &CommandSpec) -> Result<i32> {
        // Inherited stdio, but the same deadline contract as captured runs
        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .spawn()
            .map_err(|e| SetupError::CommandFailed {
                program: spec.program.clone(),
                reason: e.to_string(),
            })?;
        let status = Self::poll_until_deadline(spec, &mut child)?;
        Ok(status.code().unwrap_or(-1))
    }

    fn which(&self, program: &str) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        std::env::split_paths(&path_var)
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
    }
}

/// Retry a fallible step with doubling backoff between attempts.
///
/// Returns the first success, or the last error after `attempts` tries.
pub fn retry_with_backoff<T>(
    attempts: u32,
    initial_delay: Duration,
    mut step: impl FnMut() -> Result<T>,
) -> Result<T> {
    let mut delay = initial_delay;
    let mut last_err = None;
    for attempt in 1..=attempts {
        match step() {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt < attempts {
                    crate::ui::warning(&format!(
                        "Attempt {attempt}/{attempts} failed ({e}); retrying in {}s",
                        delay.as_secs()
                    ));
                    std::thread::sleep(delay);
                    delay *= 2;
                }
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or(SetupError::IoError {
        message: "retry_with_backoff called with zero attempts".to_string(),
    }))
}

#[cfg(test)]
pub mod testing {
    //! Scripted runner for provisioning tests

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{CommandOutput, CommandRunner, CommandSpec};
    use crate::error::Result;

    /// Records every invocation and replies from a script keyed by program name
    #[derive(Default)]
    pub struct RecordingRunner {
        pub invocations: RefCell<Vec<CommandSpec>>,
        /// Programs that resolve via `which`
        pub on_path: Vec<String>,
        /// Scripted replies; programs without an entry succeed with empty output
        pub replies: HashMap<String, CommandOutput>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_on_path(mut self, programs: &[&str]) -> Self {
            self.on_path = programs.iter().map(|s| (*s).to_string()).collect();
            self
        }

        pub fn with_reply(mut self, program: &str, status_code: i32, stdout: &str) -> Self {
            self.replies.insert(
                program.to_string(),
                CommandOutput {
                    status_code,
                    stdout: stdout.to_string(),
                    stderr: String::new(),
                },
            );
            self
        }

        pub fn invoked_programs(&self) -> Vec<String> {
            self.invocations
                .borrow()
                .iter()
                .map(|spec| spec.program.clone())
                .collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
            self.invocations.borrow_mut().push(spec.clone());
            Ok(self.replies.get(&spec.program).cloned().unwrap_or(CommandOutput {
                status_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            }))
        }

        fn run_interactive(&self, spec: &CommandSpec) -> Result<i32> {
            self.invocations.borrow_mut().push(spec.clone());
            Ok(self
                .replies
                .get(&spec.program)
                .map(|r| r.status_code)
                .unwrap_or(0))
        }

        fn which(&self, program: &str) -> Option<PathBuf> {
            if self.on_path.iter().any(|p| p == program) {
                Some(PathBuf::from("/usr/bin").join(program))
            } else {
                None
            }
        }
    }
}
