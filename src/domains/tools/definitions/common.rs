//! Shared result shaping for command-backed tools.
//!
//! Every tool in this server runs an external command and reports the
//! captured streams the same way: one labeled text block, plus a structured
//! report for clients that prefer machine-readable output. Failures carry
//! the `"Error: "` prefix and the error flag.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Serialize;

use crate::core::process::{CommandError, CommandOutput, CommandSpec};

/// Structured report for a single executed command.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CommandReport {
    /// The rendered command line that was executed.
    pub command: String,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

impl CommandReport {
    /// Build a report from a command and its captured output.
    pub fn new(spec: &CommandSpec, output: &CommandOutput) -> Self {
        Self {
            command: spec.display(),
            stdout: output.stdout.clone(),
            stderr: output.stderr.clone(),
        }
    }
}

/// Format the labeled output text for a single command.
pub fn labeled_output(output: &CommandOutput) -> String {
    format!("stdout:\n{}\nstderr:\n{}", output.stdout, output.stderr)
}

/// Build the success result for a single-command tool.
pub fn command_result(spec: &CommandSpec, output: &CommandOutput) -> CallToolResult {
    let report = CommandReport::new(spec, output);

    CallToolResult {
        content: vec![Content::text(labeled_output(output))],
        structured_content: Some(serde_json::to_value(&report).unwrap()),
        is_error: Some(false),
        meta: None,
    }
}

/// Build the error-flagged result for a failed command.
pub fn failure_result(err: &CommandError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
}

/// Extract the text of the first content block, for assertions in tests.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

/// Stub-executable fixtures for tool tests.
#[cfg(test)]
pub mod test_support {
    use crate::core::config::Config;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Write an executable shell script into `dir` and return its path.
    pub fn write_stub(dir: &TempDir, name: &str, script: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, script).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().to_string()
    }

    /// Build a config whose heim binary is a stub running `script`.
    pub fn stub_heim(script: &str) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.heim.heim_bin = write_stub(&dir, "heim", script);
        (dir, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_output_template() {
        let output = CommandOutput {
            stdout: "OK".to_string(),
            stderr: "".to_string(),
        };
        assert_eq!(labeled_output(&output), "stdout:\nOK\nstderr:\n");
    }

    #[test]
    fn test_command_result_shape() {
        let spec = CommandSpec::new("heim").arg("start");
        let output = CommandOutput {
            stdout: "runtime up\n".to_string(),
            stderr: "".to_string(),
        };

        let result = command_result(&spec, &output);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(result_text(&result), "stdout:\nruntime up\n\nstderr:\n");

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["command"], "heim start");
        assert_eq!(structured["stdout"], "runtime up\n");
    }

    #[test]
    fn test_failure_result_prefix_and_flag() {
        let err = CommandError::ExitStatus {
            command: "heim deploy".to_string(),
            code: 1,
            stdout: String::new(),
            stderr: "no runtime\n".to_string(),
        };

        let result = failure_result(&err);
        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("heim deploy"));
        assert!(text.contains("no runtime"));
    }
}
