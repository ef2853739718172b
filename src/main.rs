use std::path::PathBuf;

use anyhow::{Context, Result};
use bean_math::config::AppConfig;
use bean_math::game::{GameSession, Level, Operator, ProblemGenerator};
use bean_math::ui::App;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Practice addition, subtraction and multiplication with bean counters.
#[derive(Parser)]
#[command(name = "bean-math", about = "Arithmetic practice with bean counters")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "bean_math.toml")]
    config: PathBuf,

    /// Starting level: simple, medium or hard
    #[arg(long)]
    level: Option<Level>,

    /// Starting operator: addition, subtraction or multiplication
    #[arg(long)]
    operator: Option<Operator>,

    /// Seed for reproducible problems
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(level) = cli.level {
        config.game.level = level;
    }
    if let Some(operator) = cli.operator {
        config.game.operator = operator;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }

    let generator = match config.game.seed {
        Some(seed) => ProblemGenerator::with_seed(seed),
        None => ProblemGenerator::new(),
    };
    let session = GameSession::with_generator(
        config.game.level,
        config.game.operator,
        config.messages,
        generator,
    );
    log::info!(
        "starting at {} {}",
        config.game.level,
        config.game.operator.name()
    );

    run(App::new(session))
}

fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal).context("running game");

    // Restore terminal, always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal.show_cursor();

    res
}
