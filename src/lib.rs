//! # Introduction
//!
//! folioterm is the "hacker mode" of a developer portfolio: a simulated shell
//! that walks a read-only virtual filesystem of profile, project, skill and
//! work-experience content, presented through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Keys → Session input → Command parser → Dispatcher → Resolver/VFS → Display lines → TUI
//! ```
//!
//! 1. [`portfolio`]: the compiled-in content every other module projects.
//! 2. [`vfs`]: the static node table built from that content, and path
//!    resolution (`..`, `.`, `~`, named segments).
//! 3. [`shell`]: command parsing, the pure [`shell::dispatch`] function over a
//!    [`shell::Session`] value, history recall and tab completion.
//! 4. [`render`]: typed [`render::DisplayLine`]s and text layout helpers.
//! 5. [`ui`]: professional view, boot transition, terminal view; not part of
//!    the stable library API.
//! 6. [`config`], [`logging`], [`error`]: runtime settings, file logging and
//!    application errors.
//!
//! ## Commands
//!
//! `help`, `ls [dir]`, `cd <dir>`, `cat <file>`, `whois`, `skills [category]`,
//! `projects`, `experience`, `contact`, `clear`, `exit`.

pub mod config;
pub mod error;
pub mod logging;
pub mod portfolio;
pub mod render;
pub mod shell;
pub mod ui;
pub mod vfs;
