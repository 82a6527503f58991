//! Process runner for generated commands.

use thiserror::Error;
use tracing::{debug, info};

/// Longest command prefix shown in error messages.
const COMMAND_PREVIEW_LEN: usize = 120;

/// Errors raised while running an external command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to run command `{}`: {source}", preview(.command))]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{}` exited with {status}: {stderr}", preview(.command))]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

fn preview(command: &str) -> String {
    match command.char_indices().nth(COMMAND_PREVIEW_LEN) {
        Some((idx, _)) => format!("{}...", &command[..idx]),
        None => command.to_string(),
    }
}

/// Executes a command string and returns its captured standard output.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<String, CommandError>;
}

/// Runs commands through a POSIX shell (`sh -c <command>`).
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }
}

impl ShellRunner {
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

#[async_trait::async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<String, CommandError> {
        debug!("Running: {}", preview(command));

        let output = tokio::process::Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

/// Logs commands instead of running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

#[async_trait::async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, command: &str) -> Result<String, CommandError> {
        info!("[dry-run] {}", command);
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shell_runner_captures_stdout() {
        let output = ShellRunner::default().run("echo hello").await.unwrap();
        assert_eq!(output, "hello");
    }

    #[tokio::test]
    async fn test_shell_runner_non_zero_exit() {
        let err = ShellRunner::default()
            .run("echo boom >&2; exit 3")
            .await
            .unwrap_err();

        match err {
            CommandError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_shell_runner_missing_shell() {
        let err = ShellRunner::with_shell("/nonexistent/shell")
            .run("true")
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_dry_run_does_not_execute() {
        let output = DryRunRunner.run("exit 1").await.unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_preview_truncates_long_commands() {
        let long = "x".repeat(COMMAND_PREVIEW_LEN + 50);
        let shown = preview(&long);

        assert_eq!(shown.len(), COMMAND_PREVIEW_LEN + 3);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }
}
