use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Arc;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod models;
mod services;
mod ui;
mod utils;
mod views;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = config::Config::from_env();

    // Logs go to a file; the terminal belongs to the dashboard
    match File::create(&config.log_path) {
        Ok(log_file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env()
                        .add_directive("zenith_tui=debug".parse().unwrap()),
                )
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Could not open log file {}: {}", config.log_path.display(), e);
            return;
        }
    }

    info!("🏦 Starting {} terminal dashboard...", config.bank_name);

    let transactions = match &config.transactions_path {
        Some(path) => match models::transaction::load_transactions(path) {
            Ok(transactions) => {
                info!(count = transactions.len(), "transactions loaded");
                transactions
            }
            Err(e) => {
                error!("Failed to load transactions: {}", e);
                eprintln!("{}", e);
                return;
            }
        },
        None => {
            info!("no transaction file configured, using the demo ledger");
            models::transaction::demo_transactions(config.demo_seed)
        }
    };

    let (dashboard, auth_rx) = app::App::new(config, transactions);
    let input_rx = app::spawn_input_reader();

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            error!("Failed to set up terminal: {}", e);
            eprintln!("Failed to set up terminal: {}", e);
            return;
        }
    };

    let result = app::run(&mut terminal, dashboard, auth_rx, input_rx).await;
    restore_terminal();

    match result {
        Ok(()) => info!("dashboard closed"),
        Err(e) => error!("Dashboard error: {}", e),
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
