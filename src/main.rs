// folioterm: hacker-mode portfolio terminal

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use folioterm::config::Config;
use folioterm::logging;
use folioterm::ui::App;
use folioterm::vfs::VirtualFs;

/// Portfolio terminal with a hacker-mode shell over projects, skills and experience
#[derive(Parser, Debug)]
#[command(name = "folioterm", version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for folioterm.log (overrides the config file)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Open the terminal directly instead of the professional view
    #[arg(long)]
    hacker: bool,

    /// Switch views without the boot/shutdown sequence
    #[arg(long)]
    no_transition: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        if self.hacker {
            config.start_in_hacker_mode = true;
        }
        if self.no_transition {
            config.show_transition = false;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);

    let _log_guard = logging::init(&config.log_dir());
    info!(?config, "starting folioterm");

    let fs = Arc::new(VirtualFs::new());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(fs, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}
