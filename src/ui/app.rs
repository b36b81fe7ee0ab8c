//! Main TUI application state and logic

use crate::config::Config;
use crate::error::AppError;
use crate::shell::{Session, Signal};
use crate::ui::panes::{self, ProfileRenderData, StatusRenderData};
use crate::ui::theme::{MATRIX_THEME, PROFESSIONAL_THEME};
use crate::ui::transition::{Direction as TransitionDirection, Transition};
use crate::vfs::VirtualFs;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Width of the profile panel beside the terminal
const PROFILE_WIDTH: u16 = 42;

/// Lines moved per PageUp/PageDown
const PAGE_SCROLL: usize = 5;

/// Cursor blink half-period
const BLINK: Duration = Duration::from_millis(700);

const PROFESSIONAL_KEYS: [(&str, &str); 2] = [("h", "hacker mode"), ("q", "quit")];

const TERMINAL_KEYS: [(&str, &str); 4] = [
    ("↵", "run"),
    ("↑/↓", "history"),
    ("⇥", "complete"),
    ("PgUp/PgDn", "scroll"),
];

const TRANSITION_KEYS: [(&str, &str); 1] = [("esc", "skip")];

/// Sections the terminal can ask the host to navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Leave terminal mode for the professional view
    Exit,
}

/// What is on screen
#[derive(Debug)]
pub enum View {
    Professional,
    Transition(Transition),
    Terminal,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Professional => "professional",
            View::Transition(_) => "transition",
            View::Terminal => "terminal",
        }
    }
}

/// The main application state
pub struct App {
    /// Shared filesystem every new session is built on
    fs: Arc<VirtualFs>,

    config: Config,

    pub view: View,

    /// Live only while the terminal view is up
    pub session: Option<Session>,

    /// When set, `exit` has run and the view switches at this instant
    pub exit_at: Option<Instant>,

    /// Terminal log scroll, in lines up from the bottom
    pub terminal_scroll: usize,

    /// When the current session started
    pub session_started: Instant,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(fs: Arc<VirtualFs>, config: Config) -> Self {
        let mut app = App {
            fs,
            config,
            view: View::Professional,
            session: None,
            exit_at: None,
            terminal_scroll: 0,
            session_started: Instant::now(),
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        if app.config.start_in_hacker_mode {
            app.open_terminal(Instant::now());
        }
        app
    }

    /// Run the TUI application. Terminal I/O failures end the loop as
    /// [`AppError::Io`].
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Poll with a timeout so deadlines and animations keep moving
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance time-driven state: the deferred `exit` and transitions
    pub fn tick(&mut self, now: Instant) {
        if self.exit_at.is_some_and(|at| now >= at) {
            self.exit_at = None;
            self.on_navigate(Section::Exit, now);
        }

        let finished = match &self.view {
            View::Transition(t) if t.is_done(now) => Some(t.direction()),
            _ => None,
        };
        match finished {
            Some(TransitionDirection::Entering) => self.open_terminal(now),
            Some(TransitionDirection::Exiting) => self.show_professional(),
            None => {}
        }
    }

    /// Host side of the terminal's navigation requests
    pub fn on_navigate(&mut self, section: Section, now: Instant) {
        match section {
            Section::Exit => {
                if let Some(session) = self.session.take() {
                    info!(
                        commands = session.command_history().len(),
                        "leaving hacker mode"
                    );
                }
                self.start_transition(TransitionDirection::Exiting, now);
            }
        }
    }

    fn enter_hacker_mode(&mut self, now: Instant) {
        info!("entering hacker mode");
        self.start_transition(TransitionDirection::Entering, now);
    }

    fn start_transition(&mut self, direction: TransitionDirection, now: Instant) {
        if !self.config.show_transition {
            match direction {
                TransitionDirection::Entering => self.open_terminal(now),
                TransitionDirection::Exiting => self.show_professional(),
            }
            return;
        }
        debug!(from = self.view.name(), ?direction, "transition started");
        self.view = View::Transition(Transition::new(
            direction,
            now,
            self.config.transition_step(),
        ));
        self.status_message = match direction {
            TransitionDirection::Entering => "Booting...".to_string(),
            TransitionDirection::Exiting => "Shutting down...".to_string(),
        };
    }

    fn open_terminal(&mut self, now: Instant) {
        self.session = Some(Session::new(Arc::clone(&self.fs)));
        self.session_started = now;
        self.terminal_scroll = 0;
        self.exit_at = None;
        self.view = View::Terminal;
        self.status_message = "SECURE CONNECTION".to_string();
    }

    fn show_professional(&mut self) {
        self.session = None;
        self.view = View::Professional;
        self.status_message = "Ready!".to_string();
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.view {
            View::Professional => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('`') => {
                    self.enter_hacker_mode(now);
                }
                _ => {}
            },
            View::Transition(ref transition) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    match transition.direction() {
                        TransitionDirection::Entering => self.open_terminal(now),
                        TransitionDirection::Exiting => self.show_professional(),
                    }
                }
            }
            View::Terminal => self.handle_terminal_key(key, now),
        }
    }

    fn handle_terminal_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Enter => {
                let Some(session) = self.session.take() else {
                    return;
                };
                let (mut session, emitted) = session.submit();
                debug!(lines = emitted.len(), "command emitted output");
                if session.take_signal() == Some(Signal::Exit) {
                    self.exit_at = Some(now + self.config.exit_delay());
                    self.status_message = "Disconnecting...".to_string();
                }
                self.session = Some(session);
                // Snap back to the newest output
                self.terminal_scroll = 0;
            }
            KeyCode::Up => session.recall_older(),
            KeyCode::Down => session.recall_newer(),
            KeyCode::Tab => session.complete(),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Esc => session.set_input(""),
            KeyCode::PageUp => {
                self.terminal_scroll = self.terminal_scroll.saturating_add(PAGE_SCROLL);
            }
            KeyCode::PageDown => {
                self.terminal_scroll = self.terminal_scroll.saturating_sub(PAGE_SCROLL);
            }
            KeyCode::Char(c) => session.push_char(c),
            _ => {}
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let now = Instant::now();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let main_area = main_chunks[0];
        let status_area = main_chunks[1];

        match &self.view {
            View::Professional => {
                panes::render_professional_view(frame, main_area, self.fs.portfolio());
                panes::render_status_bar(
                    frame,
                    status_area,
                    &StatusRenderData {
                        theme: &PROFESSIONAL_THEME,
                        mode: "PROFESSIONAL",
                        message: &self.status_message,
                        keys: &PROFESSIONAL_KEYS,
                        indicator: None,
                    },
                );
            }
            View::Transition(transition) => {
                panes::render_transition(frame, main_area, transition, now);
                panes::render_status_bar(
                    frame,
                    status_area,
                    &StatusRenderData {
                        theme: &MATRIX_THEME,
                        mode: "MATRIX v1.0.0",
                        message: &self.status_message,
                        keys: &TRANSITION_KEYS,
                        indicator: None,
                    },
                );
            }
            View::Terminal => {
                let Some(session) = self.session.as_ref() else {
                    return;
                };

                // Terminal (left) | Profile (right)
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(0), Constraint::Length(PROFILE_WIDTH)])
                    .split(main_area);

                let blink_on = (now.duration_since(self.session_started).as_millis()
                    / BLINK.as_millis())
                    % 2
                    == 0;

                panes::render_terminal_pane(
                    frame,
                    columns[0],
                    session,
                    blink_on,
                    &mut self.terminal_scroll,
                );

                panes::render_profile_pane(
                    frame,
                    columns[1],
                    &ProfileRenderData {
                        portfolio: self.fs.portfolio(),
                        commands_run: session.command_history().len(),
                        current_path: session.current_path().to_string(),
                        uptime: now.duration_since(self.session_started),
                    },
                );

                panes::render_status_bar(
                    frame,
                    status_area,
                    &StatusRenderData {
                        theme: &MATRIX_THEME,
                        mode: "SYSTEM ACTIVE",
                        message: &self.status_message,
                        keys: &TERMINAL_KEYS,
                        indicator: self.exit_at.map(|_| "EXITING"),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, line: &str, now: Instant) {
        for c in line.chars() {
            app.handle_key_event(key(KeyCode::Char(c)), now);
        }
        app.handle_key_event(key(KeyCode::Enter), now);
    }

    fn no_transition() -> Config {
        Config {
            show_transition: false,
            ..Config::default()
        }
    }

    fn app(config: Config) -> App {
        App::new(Arc::new(VirtualFs::new()), config)
    }

    #[test]
    fn test_starts_professional_by_default() {
        let app = app(Config::default());
        assert!(matches!(app.view, View::Professional));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_enter_with_transition() {
        let mut app = app(Config::default());
        let now = Instant::now();
        app.handle_key_event(key(KeyCode::Char('h')), now);
        assert!(matches!(app.view, View::Transition(_)));

        app.tick(now + Duration::from_millis(100));
        assert!(matches!(app.view, View::Transition(_)));

        app.tick(now + Duration::from_secs(5));
        assert!(matches!(app.view, View::Terminal));
        assert!(app.session.is_some());
    }

    #[test]
    fn test_skip_transition_with_esc() {
        let mut app = app(Config::default());
        let now = Instant::now();
        app.handle_key_event(key(KeyCode::Char('`')), now);
        app.handle_key_event(key(KeyCode::Esc), now);
        assert!(matches!(app.view, View::Terminal));
    }

    #[test]
    fn test_typing_runs_commands() {
        let mut app = app(Config {
            start_in_hacker_mode: true,
            ..no_transition()
        });
        let now = Instant::now();
        type_line(&mut app, "cd skills", now);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.current_path().to_string(), "~/skills");
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_exit_is_deferred() {
        let mut app = app(Config {
            start_in_hacker_mode: true,
            ..no_transition()
        });
        let now = Instant::now();
        type_line(&mut app, "exit", now);
        assert!(matches!(app.view, View::Terminal));
        assert!(app.exit_at.is_some());

        app.tick(now + Duration::from_millis(500));
        assert!(matches!(app.view, View::Terminal));

        app.tick(now + Duration::from_millis(1000));
        assert!(matches!(app.view, View::Professional));
        assert!(app.session.is_none());
        assert!(app.exit_at.is_none());
    }

    #[test]
    fn test_reentering_starts_a_fresh_session() {
        let mut app = app(Config {
            start_in_hacker_mode: true,
            ..no_transition()
        });
        let now = Instant::now();
        type_line(&mut app, "whois", now);
        app.on_navigate(Section::Exit, now);
        app.handle_key_event(key(KeyCode::Char('h')), now);
        let session = app.session.as_ref().unwrap();
        assert!(session.command_history().is_empty());
    }

    #[test]
    fn test_history_keys() {
        let mut app = app(Config {
            start_in_hacker_mode: true,
            ..no_transition()
        });
        let now = Instant::now();
        type_line(&mut app, "ls", now);
        type_line(&mut app, "whois", now);
        app.handle_key_event(key(KeyCode::Up), now);
        assert_eq!(app.session.as_ref().unwrap().input(), "whois");
        app.handle_key_event(key(KeyCode::Down), now);
        assert_eq!(app.session.as_ref().unwrap().input(), "");
        app.handle_key_event(key(KeyCode::Char('p')), now);
        app.handle_key_event(key(KeyCode::Tab), now);
        assert_eq!(app.session.as_ref().unwrap().input(), "projects");
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app(Config {
            start_in_hacker_mode: true,
            ..no_transition()
        });
        app.handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_in_terminal_but_quits_professional() {
        let mut app = app(Config {
            start_in_hacker_mode: true,
            ..no_transition()
        });
        let now = Instant::now();
        app.handle_key_event(key(KeyCode::Char('q')), now);
        assert!(!app.should_quit);
        assert_eq!(app.session.as_ref().unwrap().input(), "q");

        let mut app = self::app(Config::default());
        app.handle_key_event(key(KeyCode::Char('q')), now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_every_view() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app(Config::default());
        let now = Instant::now();

        terminal.draw(|f| app.render(f)).unwrap();
        app.handle_key_event(key(KeyCode::Char('h')), now);
        terminal.draw(|f| app.render(f)).unwrap();
        app.handle_key_event(key(KeyCode::Esc), now);
        type_line(&mut app, "cat about.txt", now);
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("swayam@portfolio"));
        assert!(screen.contains("USER PROFILE"));
    }
}
