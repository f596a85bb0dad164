//! Subprocess execution for the wrapped command-line tools.
//!
//! Commands are described as argument vectors and executed directly, never
//! through a shell, so parameter values can't be reinterpreted as shell
//! syntax. Child processes run with piped stdout/stderr and a null stdin;
//! stdin belongs to the MCP transport.

use std::process::Stdio;
use thiserror::Error;

/// A command described as a program plus an argument vector.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command for the given program.
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument vector.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Render the command line for logs and reports.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured output of a successfully exited command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be launched at all.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited with a non-zero status.
    #[error("command '{command}' exited with status {code}: {stderr}")]
    ExitStatus {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// The command was terminated by a signal before exiting.
    #[error("command '{command}' was terminated by a signal: {stderr}")]
    Signal {
        command: String,
        stdout: String,
        stderr: String,
    },
}

/// Run a command to completion, capturing stdout and stderr as text.
///
/// There is no timeout and no retry; the caller awaits until the child
/// exits. Non-zero exits and signal terminations are surfaced as typed
/// errors carrying both captured streams.
pub async fn run(spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
    let child = tokio::process::Command::new(spec.program())
        .args(spec.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CommandError::Spawn {
            program: spec.program().to_string(),
            source,
        })?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|source| CommandError::Spawn {
            program: spec.program().to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        return Ok(CommandOutput { stdout, stderr });
    }

    match output.status.code() {
        Some(code) => Err(CommandError::ExitStatus {
            command: spec.display(),
            code,
            stdout,
            stderr,
        }),
        None => Err(CommandError::Signal {
            command: spec.display(),
            stdout,
            stderr,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_program_and_args() {
        let spec = CommandSpec::new("heim").arg("deploy").arg("/apps/foo");
        assert_eq!(spec.display(), "heim deploy /apps/foo");
    }

    #[test]
    fn test_display_program_only() {
        let spec = CommandSpec::new("heim");
        assert_eq!(spec.display(), "heim");
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let spec = CommandSpec::new("echo").arg("hello");
        let output = run(&spec).await.unwrap();
        assert_eq!(output.stdout, "hello\n");
        assert_eq!(output.stderr, "");
    }

    #[tokio::test]
    async fn test_run_arguments_are_not_shell_interpreted() {
        // A value that would expand or chain under a shell arrives verbatim.
        let spec = CommandSpec::new("echo").arg("$HOME; rm -rf /");
        let output = run(&spec).await.unwrap();
        assert_eq!(output.stdout, "$HOME; rm -rf /\n");
    }

    #[tokio::test]
    async fn test_run_nonzero_exit() {
        let spec = CommandSpec::new("sh").arg("-c").arg("echo out; echo err >&2; exit 3");
        let err = run(&spec).await.unwrap_err();
        match err {
            CommandError::ExitStatus {
                code,
                stdout,
                stderr,
                ..
            } => {
                assert_eq!(code, 3);
                assert_eq!(stdout, "out\n");
                assert_eq!(stderr, "err\n");
            }
            other => panic!("expected ExitStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let spec = CommandSpec::new("definitely-not-a-real-binary-1b2c3");
        let err = run(&spec).await.unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-binary-1b2c3"));
    }
}
