//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, view switching and the
//!   deferred `exit`
//! - **[`transition`]** — timing and rain state of the boot/shutdown sequence
//! - **[`panes`]** — stateless render functions for each visible region (terminal,
//!   profile panel, professional view, transition, status bar)
//! - **[`theme`]** — the matrix and professional color palettes
//!
//! The entry point for consumers is [`App`]: construct it with a [`VirtualFs`] and a
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`VirtualFs`]: crate::vfs::VirtualFs
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod transition;

pub use app::App;
