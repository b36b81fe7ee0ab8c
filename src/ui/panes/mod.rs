//! TUI pane rendering modules
//!
//! Each module renders one region of the screen from borrowed state; none of
//! them owns data.
//!
//! # Pane Modules
//!
//! - [`terminal`]: session log and the live prompt line
//! - [`profile`]: user card and session stats beside the terminal
//! - [`professional`]: the plain résumé view shown outside hacker mode
//! - [`transition`]: matrix rain and boot/shutdown messages
//! - [`status`]: status bar with keybindings and mode badge

pub mod professional;
pub mod profile;
pub mod status;
pub mod terminal;
pub mod transition;

// Re-export render functions for convenience
pub use professional::render_professional_view;
pub use profile::{render_profile_pane, ProfileRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;
pub use transition::render_transition;
