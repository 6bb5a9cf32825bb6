//! # Tool Layer
//!
//! The external configuration tool is abstracted behind the [`ConfigTool`]
//! trait so the push loop never cares what actually persists a setting.
//!
//! ## Implementations
//!
//! - [`FirebaseTool`]: Production. Spawns `<bin> functions:config:set
//!   path=value` synchronously, inheriting stdin/stdout/stderr so the tool's
//!   prompts and output reach the user directly.
//! - [`RecordingTool`]: Records every `set` call without running anything.
//!   Backs `--dry-run` and the unit tests.

use crate::error::{ConfpushError, Result};
use std::process::Command;

/// The subcommand the Firebase CLI uses to set a functions config value.
pub const SET_SUBCOMMAND: &str = "functions:config:set";

/// Default binary name for the external tool.
pub const DEFAULT_BIN: &str = "firebase";

/// Abstract interface to the remote configuration tool.
///
/// Implementations persist one dotted-path setting per call and report
/// failure through the normal error channel; the caller decides whether a
/// failure aborts the run.
pub trait ConfigTool {
    /// Apply a single setting. Blocks until the tool is done.
    fn set(&mut self, path: &str, value: &str) -> Result<()>;
}

/// Renders the human-readable form of a set command, quoted the way a user
/// would type it in a shell. Used for dry-run output and error messages.
pub fn render_command(bin: &str, path: &str, value: &str) -> String {
    format!("{} {} {}=\"{}\"", bin, SET_SUBCOMMAND, path, value)
}

/// Production tool: shells out to the Firebase CLI (or a configured
/// replacement binary with the same calling convention).
pub struct FirebaseTool {
    bin: String,
}

impl FirebaseTool {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl ConfigTool for FirebaseTool {
    fn set(&mut self, path: &str, value: &str) -> Result<()> {
        // The tool receives `path=value` as one argv element; quoting is a
        // display concern only.
        let status = Command::new(&self.bin)
            .arg(SET_SUBCOMMAND)
            .arg(format!("{}={}", path, value))
            .status()
            .map_err(|e| ConfpushError::ToolSpawn {
                bin: self.bin.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(ConfpushError::ToolFailed {
                command: render_command(&self.bin, path, value),
                code: status.code(),
            });
        }
        Ok(())
    }
}

/// Records calls instead of executing them. No persistence, no side effects.
#[derive(Debug, Default)]
pub struct RecordingTool {
    /// Every `(path, value)` handed to `set`, in call order.
    pub applied: Vec<(String, String)>,
    /// When set, `set` fails for this path after recording it.
    pub fail_on: Option<String>,
}

impl ConfigTool for RecordingTool {
    fn set(&mut self, path: &str, value: &str) -> Result<()> {
        self.applied.push((path.to_string(), value.to_string()));
        if self.fail_on.as_deref() == Some(path) {
            return Err(ConfpushError::ToolFailed {
                command: render_command(DEFAULT_BIN, path, value),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_quotes_value() {
        assert_eq!(
            render_command("firebase", "db.password", "secret123"),
            "firebase functions:config:set db.password=\"secret123\""
        );
    }

    #[test]
    fn test_recording_tool_keeps_call_order() {
        let mut tool = RecordingTool::default();
        tool.set("a.one", "1").unwrap();
        tool.set("b.two", "2").unwrap();
        assert_eq!(
            tool.applied,
            vec![
                ("a.one".to_string(), "1".to_string()),
                ("b.two".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_recording_tool_fail_on() {
        let mut tool = RecordingTool {
            fail_on: Some("bad.path".to_string()),
            ..Default::default()
        };
        assert!(tool.set("ok.path", "v").is_ok());
        let err = tool.set("bad.path", "v").unwrap_err();
        assert!(matches!(err, ConfpushError::ToolFailed { .. }));
    }
}
