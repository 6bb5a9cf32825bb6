use clap::Parser;
use colored::*;
use confpush::config::{ConfpushConfig, CONFIG_DIR};
use confpush::error::{ConfpushError, Result};
use confpush::push::{self, PushOutcome};
use confpush::tool::{render_command, FirebaseTool, RecordingTool};
use std::fs;
use std::path::{Path, PathBuf};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(exit_code(&e));
    }
}

/// On a tool failure the process exits with the tool's own status, per the
/// contract that our exit mirrors the failed external command.
fn exit_code(err: &ConfpushError) -> i32 {
    match err {
        ConfpushError::ToolFailed { code: Some(code), .. } => *code,
        _ => 1,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfpushConfig::load(Path::new(CONFIG_DIR))?;

    let file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.env_file));
    let contents = fs::read_to_string(&file).map_err(|e| ConfpushError::EnvFile {
        path: file.clone(),
        source: e,
    })?;

    if cli.dry_run {
        let mut tool = RecordingTool::default();
        let outcome = push::run(&contents, &mut tool)?;
        for (path, value) in &tool.applied {
            println!("{}", render_command(&config.tool_bin, path, value));
        }
        report(&outcome, cli.verbose, true);
    } else {
        let mut tool = FirebaseTool::new(&config.tool_bin);
        let outcome = push::run(&contents, &mut tool)?;
        report(&outcome, cli.verbose, false);
    }

    Ok(())
}

/// Default mode stays quiet: the external tool's own output is the report,
/// and malformed lines are skipped silently. Verbose surfaces both.
fn report(outcome: &PushOutcome, verbose: bool, dry_run: bool) {
    if !verbose {
        return;
    }

    for skipped in &outcome.skipped {
        println!(
            "{}",
            format!("Skipped line {}: {}", skipped.line, skipped.raw).yellow()
        );
    }

    if outcome.applied.is_empty() {
        println!("{}", "No settings found.".dimmed());
    } else if dry_run {
        println!(
            "{}",
            format!("Would apply {} setting(s).", outcome.applied.len()).dimmed()
        );
    } else {
        println!(
            "{}",
            format!("Applied {} setting(s).", outcome.applied.len()).green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_uses_tool_status() {
        let err = ConfpushError::ToolFailed {
            command: "firebase functions:config:set a.b=\"c\"".to_string(),
            code: Some(3),
        };
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_exit_code_defaults_to_one_when_tool_was_killed() {
        // A signal-killed child has no exit status to mirror.
        let err = ConfpushError::ToolFailed {
            command: "firebase functions:config:set a.b=\"c\"".to_string(),
            code: None,
        };
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_defaults_to_one_for_other_errors() {
        let err = ConfpushError::EnvFile {
            path: std::path::PathBuf::from(".env"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(exit_code(&err), 1);
    }
}
