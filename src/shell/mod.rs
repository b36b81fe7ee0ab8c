//! The simulated terminal interpreter
//!
//! - [`command`]: raw line → [`Command`] variant, plus tab completion
//! - [`dispatch`](mod@dispatch): executes a command against a [`Session`]
//! - [`session`]: session state, history recall, host [`Signal`]s
//! - [`reports`]: fixed output of the informational commands
//! - [`errors`]: user-visible [`ShellError`]s
//!
//! # Execution Model
//!
//! The interpreter is a pure function over an owned [`Session`] value:
//!
//! ```text
//! (Session, raw line) → parse → execute → (Session', emitted lines)
//! ```
//!
//! The host keeps the only mutable slot, feeds it key input and re-renders
//! from [`Session::log`]. Side effects that leave the interpreter (such as
//! `exit` switching views) are raised as a [`Signal`] the host takes with
//! [`Session::take_signal`].

pub mod command;
pub mod dispatch;
pub mod errors;
pub mod reports;
pub mod session;

pub use command::Command;
pub use dispatch::dispatch;
pub use errors::ShellError;
pub use session::{Session, Signal};
