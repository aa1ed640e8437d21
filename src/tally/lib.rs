//! # Tally Architecture
//!
//! Tally is a **UI-agnostic inventory library**: the interactive shell and
//! the clap subcommands are both thin clients over the same core.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args/shell/print, wired by main.rs)             │
//! │  - Parses arguments, runs the menu loop, formats output     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands; owns the loaded Catalog       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure validate-then-apply business logic                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr and never calls
//! `std::process::exit`. A failed validation leaves the catalog exactly
//! as it was; the one compound mutation (recording a sale) applies all of
//! its field updates together or not at all.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: The in-memory product catalog and its invariants
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Product` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`/`shell`/`print`: CLI plumbing for the binary (not part of the
//!   lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
