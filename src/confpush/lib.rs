//! # Confpush Architecture
//!
//! Confpush reads a local `.env` file and pushes each `KEY=VALUE` assignment
//! to a remote configuration tool (Firebase by default), turning every key
//! into the dotted path the tool expects (`DB_PASSWORD` → `db.password`).
//!
//! The crate is a library with a thin CLI binary on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints output, maps errors to exit     │
//! │    codes. The ONLY place that touches stdout/stderr/exit.   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Push Layer (push.rs, model.rs)                             │
//! │  - Pure logic: parse lines, derive paths, drive the tool    │
//! │  - Returns structured results, no I/O assumptions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tool Layer (tool.rs)                                       │
//! │  - Abstract ConfigTool trait                                │
//! │  - FirebaseTool (production), RecordingTool (dry-run/tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//!
//! Processing is strictly sequential: one external command per usable line,
//! each waited on before the next line is considered. The first non-zero
//! exit aborts the whole run; there is no retry and no rollback of settings
//! already applied.
//!
//! ## Module Overview
//!
//! - [`push`]: The push loop — entry point for the one operation this crate has
//! - [`model`]: `Entry` and the line/path parsing rules
//! - [`tool`]: The external-tool seam and its implementations
//! - [`config`]: Optional `.confpush/config.json` (tool binary, env file name)
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod push;
pub mod tool;
