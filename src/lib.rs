//! # taskcard
//!
//! Renders task-list items as HTML cards for a browser-based task manager.
//!
//! ## Features
//!
//! - **Task Cards**: completion state, favorite flag and due-date/overdue annotations
//! - **Safe Markup**: every interpolated value is HTML-escaped
//! - **Pluggable Dates**: due dates are formatted by an injected [`DateFormatter`](libs::formatter::DateFormatter)
//! - **List Views**: filter, search and sort task lists before rendering
//! - **CLI**: render task JSON from a file or stdin
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskcard::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
