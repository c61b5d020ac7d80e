use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use docpost::{
    Args, GlobalConfig,
    config::create_sample_config,
    logging::{init_logging, parse_early_log_config},
    store::DocStore,
    ui::{App, CrosstermEventSource, run_app},
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logging starts before clap so parse failures are still traced
    let raw_args: Vec<String> = std::env::args().collect();
    let _log_guard = init_logging(parse_early_log_config(&raw_args));

    let args = Args::parse();

    // Handle --create-config flag
    if args.create_config {
        create_sample_config()?;
        return Ok(ExitCode::SUCCESS);
    }

    // Resolve configuration from CLI args, environment variables, and the
    // global JSON document
    let config = args.resolve_config()?;

    // Non-interactive subcommands skip the terminal entirely
    if let Some(command) = &args.command {
        return docpost::commands::run(command, &config).await;
    }

    // The settings form edits the document as stored; the resolved
    // settings feed everything else
    let document = GlobalConfig::load()?;
    let settings = config.resolve_lenient();
    let mut app = App::new(settings, DocStore::new(), &document);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = CrosstermEventSource::new();
    let result = run_app(&mut terminal, &mut app, &events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| ExitCode::SUCCESS)
}
