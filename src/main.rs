use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use subsift::app::App;
use subsift::config::Config;

/// Interactive filter-expression builder for subdomain scan results
#[derive(Parser)]
#[command(name = "subsift", version)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only active in debug builds
    #[cfg(debug_assertions)]
    let _ = env_logger::try_init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(&mut terminal, App::new(config));

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
