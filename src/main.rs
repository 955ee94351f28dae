use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docket::api::HttpApi;
use docket::cli::commands::Cli;
use docket::cli::handlers;
use docket::config;
use docket::tui;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    let result = if cli.command.is_none() {
        run_tui(cli)
    } else {
        handlers::dispatch(cli)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// No subcommand → launch the TUI.
fn run_tui(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load(cli.config.as_deref())?;
    let server = cli.server.unwrap_or_else(|| config.server.url.clone());
    let session = cli
        .session
        .or(config.server.session_id)
        .ok_or("no session id: pass --session or set session_id under [server] in config")?;
    let api = Arc::new(HttpApi::new(&server)?);
    tui::run(api, session, &config)
}

/// CLI logs to stderr; the TUI owns the terminal, so its logs go to a file
/// under the state directory. Best effort, logging is never fatal.
fn init_tracing(tui_mode: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if tui_mode {
        let Some(dir) = dirs::state_dir().or_else(dirs::cache_dir) else {
            return;
        };
        let dir = dir.join("docket");
        if std::fs::create_dir_all(&dir).is_err() {
            return;
        }
        let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("docket.log"))
        else {
            return;
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
