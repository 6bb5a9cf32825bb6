//! The push loop: parse the env file contents line by line and apply each
//! usable entry through a [`ConfigTool`], in order, stopping at the first
//! failure.
//!
//! This module is pure logic in the sense that it never touches stdout or
//! stderr itself; the tool implementation may (FirebaseTool inherits the
//! parent's streams), but reporting what happened is the CLI's job, driven
//! by the returned [`PushOutcome`].

use crate::error::Result;
use crate::model::{parse_line, Entry};
use crate::tool::ConfigTool;

/// A non-blank line that did not yield a usable key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input file.
    pub line: usize,
    pub raw: String,
}

/// What a completed run did. Only produced when every entry succeeded;
/// a tool failure propagates as an error before the outcome exists.
#[derive(Debug, Default)]
pub struct PushOutcome {
    /// Entries applied, in file order.
    pub applied: Vec<Entry>,
    /// Non-blank lines skipped for want of a key or value.
    pub skipped: Vec<SkippedLine>,
}

/// Processes `contents` in order. Each usable line costs one synchronous
/// `tool.set` call; the first failure aborts via `?` and leaves any
/// already-applied settings in place (no rollback).
///
/// Blank lines are ignored outright; other unusable lines are recorded in
/// the outcome so a verbose caller can report them.
pub fn run<T: ConfigTool>(contents: &str, tool: &mut T) -> Result<PushOutcome> {
    let mut outcome = PushOutcome::default();

    for (idx, line) in contents.lines().enumerate() {
        match parse_line(line) {
            Some(entry) => {
                tool.set(&entry.path(), &entry.value)?;
                outcome.applied.push(entry);
            }
            None => {
                if !line.trim().is_empty() {
                    outcome.skipped.push(SkippedLine {
                        line: idx + 1,
                        raw: line.to_string(),
                    });
                }
            }
        }
    }

    Ok(outcome)
}
