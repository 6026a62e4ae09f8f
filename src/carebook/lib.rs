//! # Carebook Architecture
//!
//! Carebook keeps contact records for clinical patients together with
//! timestamped free-text notes, and lets every change be undone and redone.
//! It is a library with a thin interactive CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive shell, one-shot mode, rendering, exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses input, runs commands, persists after changes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser/) and Command Layer (commands/*.rs)         │
//! │  - Text → typed Command → logic over the PatientBook        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book (book/) over Model (model/)                           │
//! │  - Patients, notes, snapshot history, display filter        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`store`] layer sits beside the API: it loads the book at startup
//! and saves it after each change. Undo history lives only in memory.
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes
//! to stdout/stderr or exits the process. Failures are [`error::CarebookError`]
//! values whose `Display` text is the message shown to the user.
//!
//! ## Indexes
//!
//! Users name patients by their 1-based position in the currently displayed
//! list, which `find` narrows. See [`index`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): most of the behaviour, tested against
//!    the typical patients in `fixtures`.
//! 2. **Parser** (`parser/`): argument shapes and their error messages.
//! 3. **API** (`api.rs`): persistence happens exactly when it should.
//! 4. **CLI** (`tests/`): the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point for all operations
//! - [`commands`]: one module per command
//! - [`parser`]: command-line text to [`commands::Command`]
//! - [`book`]: the versioned patient book
//! - [`model`]: `Patient`, `Note` and their field types
//! - [`store`]: persistence
//! - [`index`]: display indexes
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;
