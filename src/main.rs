use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, PlayerKind};
use connect_four::ui::App;

/// Play Connect Four in the terminal against a minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the search depth (plies)
    #[arg(long)]
    depth: Option<usize>,

    /// Controller for Red: human, minimax, random or greedy
    #[arg(long)]
    red: Option<String>,

    /// Controller for Yellow: human, minimax, random or greedy
    #[arg(long)]
    yellow: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.ai.search_depth = depth;
    }
    if let Some(red) = &cli.red {
        config.players.red = match PlayerKind::parse(red) {
            Some(kind) => kind,
            None => bail!("unknown controller '{}' for --red", red),
        };
    }
    if let Some(yellow) = &cli.yellow {
        config.players.yellow = match PlayerKind::parse(yellow) {
            Some(kind) => kind,
            None => bail!("unknown controller '{}' for --yellow", yellow),
        };
    }
    config.validate().context("validating configuration")?;

    run_tui(&config)
}

fn run_tui(config: &AppConfig) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore the terminal even when the app errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running application")
}
