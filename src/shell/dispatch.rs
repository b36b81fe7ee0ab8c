//! Command execution
//!
//! [`dispatch`] is the whole interpreter: it takes a [`Session`] by value and
//! hands back the updated session together with the lines the command
//! emitted. The echo line (`~ $ ls`) goes into the session log but is not
//! part of the returned lines.

use super::command::Command;
use super::errors::ShellError;
use super::reports;
use super::session::{Session, Signal};
use crate::render::DisplayLine;
use tracing::{debug, warn};

/// Execute one raw input line against `session`.
///
/// Blank input is ignored entirely: no echo, no history entry, no output.
pub fn dispatch(mut session: Session, raw: &str) -> (Session, Vec<DisplayLine>) {
    let Some(command) = Command::parse(raw) else {
        return (session, Vec::new());
    };

    let line = raw.trim();
    let echo = DisplayLine::command(format!("{} $ {}", session.current_path(), line));
    session.append([echo]);
    session.record_command(line);

    debug!(path = %session.current_path(), command = command.name(), "dispatching command");

    let emitted = match execute(&mut session, command) {
        Ok(lines) => lines,
        Err(err) => {
            debug!(error = %err, "command failed");
            vec![err.into()]
        }
    };

    session.append(emitted.iter().cloned());
    session.finish_command();
    (session, emitted)
}

fn execute(session: &mut Session, command: Command) -> Result<Vec<DisplayLine>, ShellError> {
    let portfolio = session.fs().portfolio();

    let lines = match command {
        Command::Help => reports::help().into_output(),
        Command::Ls(target) => list(session, target)?,
        Command::Cd(target) => {
            let target = target.unwrap_or_default();
            let path = session
                .fs()
                .resolve(session.current_path(), &target)
                .map_err(|_| ShellError::PathNotFound { path: target })?;
            session.set_current_path(path);
            Vec::new()
        }
        Command::Cat(file) => {
            let node = session
                .fs()
                .resolve_file(session.current_path(), &file)
                .map_err(|_| ShellError::FileNotFound { file: file.clone() })?;
            node.content().iter().cloned().map(DisplayLine::output).collect()
        }
        Command::Whois => reports::whois(&portfolio.profile).into_output(),
        Command::Skills(None) => reports::skills_overview(portfolio.skills).into_output(),
        Command::Skills(Some(key)) => {
            let category = portfolio
                .skill_category(&key)
                .ok_or(ShellError::UnknownCategory { category: key })?;
            reports::skill_category(category).into_output()
        }
        Command::Projects => reports::projects(portfolio.projects).into_output(),
        Command::Experience => reports::experience(portfolio.internships).into_output(),
        Command::Contact => reports::contact(&portfolio.profile).into_output(),
        Command::Clear => {
            session.clear_log();
            Vec::new()
        }
        Command::Exit => {
            session.raise(Signal::Exit);
            reports::farewell().into_output()
        }
        Command::Unknown(token) => {
            return Err(ShellError::CommandNotFound { command: token });
        }
    };

    Ok(lines)
}

/// `ls` with an optional directory expression
fn list(session: &Session, target: Option<String>) -> Result<Vec<DisplayLine>, ShellError> {
    let fs = session.fs();
    let path = match target {
        None => session.current_path().clone(),
        Some(target) => fs
            .resolve(session.current_path(), &target)
            .map_err(|_| ShellError::ListNotFound { path: target })?,
    };

    match fs.listing(&path) {
        Some(entries) => Ok(vec![DisplayLine::output(entries.join("  "))]),
        None => {
            // Only reachable if a session path bypassed the resolver.
            warn!(path = %path, "no directory node for session path");
            Ok(Vec::new())
        }
    }
}
