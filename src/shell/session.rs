//! Terminal session state
//!
//! A [`Session`] is one running terminal: where it stands in the virtual
//! filesystem, the log of rendered lines, the submitted command history and
//! the line currently being typed. It is created when the terminal view is
//! entered and dropped when the view is left; nothing outlives it.
//!
//! # History recall
//!
//! The recall cursor walks the history most-recent-first. `None` means the
//! user is typing a fresh line; `Some(0)` is the newest entry and
//! `Some(len - 1)` the oldest. Submitting a command always resets it.

use super::command;
use super::dispatch::dispatch;
use super::reports;
use crate::render::DisplayLine;
use crate::vfs::{VfsPath, VirtualFs};
use std::sync::Arc;

/// Requests from the interpreter to whatever hosts it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Leave terminal mode (raised by `exit`)
    Exit,
}

#[derive(Debug, Clone)]
pub struct Session {
    fs: Arc<VirtualFs>,
    current_path: VfsPath,
    log: Vec<DisplayLine>,
    command_history: Vec<String>,
    history_cursor: Option<usize>,
    input: String,
    signal: Option<Signal>,
}

impl Session {
    /// New session at `~`, log primed with the welcome banner
    pub fn new(fs: Arc<VirtualFs>) -> Self {
        let mut session = Self::empty(fs);
        session.log = reports::welcome().into_output();
        session
    }

    /// New session at `~` with an empty log
    pub fn empty(fs: Arc<VirtualFs>) -> Self {
        Session {
            fs,
            current_path: VfsPath::root(),
            log: Vec::new(),
            command_history: Vec::new(),
            history_cursor: None,
            input: String::new(),
            signal: None,
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn current_path(&self) -> &VfsPath {
        &self.current_path
    }

    pub fn log(&self) -> &[DisplayLine] {
        &self.log
    }

    /// Submitted commands, oldest first
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Pending input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Prompt shown before the input buffer
    pub fn prompt(&self) -> String {
        format!("{} $", self.current_path)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Run the pending input buffer as a command line
    pub fn submit(self) -> (Session, Vec<DisplayLine>) {
        let line = self.input.clone();
        dispatch(self, &line)
    }

    /// Take a pending host signal, leaving none behind
    pub fn take_signal(&mut self) -> Option<Signal> {
        self.signal.take()
    }

    /// Step one entry further back in history. No-op at the oldest entry.
    pub fn recall_older(&mut self) {
        let next = self.history_cursor.map_or(0, |c| c + 1);
        if next < self.command_history.len() {
            self.history_cursor = Some(next);
            self.input = self.recalled(next);
        }
    }

    /// Step one entry forward; stepping past the newest entry clears the
    /// input and returns to live typing.
    pub fn recall_newer(&mut self) {
        match self.history_cursor {
            None => {}
            Some(0) => {
                self.history_cursor = None;
                self.input.clear();
            }
            Some(c) => {
                self.history_cursor = Some(c - 1);
                self.input = self.recalled(c - 1);
            }
        }
    }

    /// Replace the input with the first command name it prefixes
    pub fn complete(&mut self) {
        if let Some(name) = command::complete(&self.input) {
            self.input = name.to_string();
        }
    }

    fn recalled(&self, cursor: usize) -> String {
        self.command_history[self.command_history.len() - 1 - cursor].clone()
    }

    pub(super) fn append(&mut self, lines: impl IntoIterator<Item = DisplayLine>) {
        self.log.extend(lines);
    }

    pub(super) fn record_command(&mut self, line: &str) {
        self.command_history.push(line.to_string());
        self.history_cursor = None;
    }

    pub(super) fn set_current_path(&mut self, path: VfsPath) {
        self.current_path = path;
    }

    pub(super) fn clear_log(&mut self) {
        self.log.clear();
    }

    pub(super) fn finish_command(&mut self) {
        self.input.clear();
        self.history_cursor = None;
    }

    pub(super) fn raise(&mut self, signal: Signal) {
        self.signal = Some(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_history(commands: &[&str]) -> Session {
        let mut session = Session::empty(Arc::new(VirtualFs::new()));
        for cmd in commands {
            session.record_command(cmd);
        }
        session
    }

    #[test]
    fn test_new_session_has_banner() {
        let session = Session::new(Arc::new(VirtualFs::new()));
        assert_eq!(session.log().len(), 3);
        assert!(session.log()[0].text().starts_with("Welcome"));
        assert!(session.current_path().is_root());
        assert_eq!(session.prompt(), "~ $");
    }

    #[test]
    fn test_recall_older_stops_at_oldest() {
        let mut s = session_with_history(&["ls", "whois"]);
        s.recall_older();
        assert_eq!(s.input(), "whois");
        assert_eq!(s.history_cursor(), Some(0));
        s.recall_older();
        assert_eq!(s.input(), "ls");
        s.recall_older();
        assert_eq!(s.input(), "ls");
        assert_eq!(s.history_cursor(), Some(1));
    }

    #[test]
    fn test_recall_newer_returns_to_live_typing() {
        let mut s = session_with_history(&["ls", "whois"]);
        s.recall_older();
        s.recall_older();
        s.recall_newer();
        assert_eq!(s.input(), "whois");
        s.recall_newer();
        assert_eq!(s.input(), "");
        assert_eq!(s.history_cursor(), None);
        s.set_input("typed");
        s.recall_newer();
        assert_eq!(s.input(), "typed");
    }

    #[test]
    fn test_recall_with_empty_history() {
        let mut s = session_with_history(&[]);
        s.set_input("abc");
        s.recall_older();
        assert_eq!(s.input(), "abc");
        assert_eq!(s.history_cursor(), None);
    }

    #[test]
    fn test_complete() {
        let mut s = session_with_history(&[]);
        s.set_input("pro");
        s.complete();
        assert_eq!(s.input(), "projects");
        s.set_input("xyz");
        s.complete();
        assert_eq!(s.input(), "xyz");
    }

    #[test]
    fn test_editing() {
        let mut s = session_with_history(&[]);
        s.push_char('l');
        s.push_char('s');
        s.push_char('x');
        s.backspace();
        assert_eq!(s.input(), "ls");
    }
}
