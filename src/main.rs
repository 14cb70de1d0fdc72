// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use domscan::{ScanClient, ScanError, ScanResult, config::Config, logging};
use ratatui::prelude::*;
use rust_i18n::t;
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

mod app;
mod ui;

use app::{App, AppState, NotificationKind};

rust_i18n::i18n!("locales", fallback = "en");

type ScanOutcome = Result<Vec<ScanResult>, ScanError>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;

    let config = Config::from_env()?;
    rust_i18n::set_locale(&config.locale);
    info!(api_url = %config.api_url, locale = %config.locale, log = %log_path.display(), "Starting domscan.");

    let client = ScanClient::new(config.api_url.clone())?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &client).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, client: &ScanClient) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<ScanOutcome>(1);
    let (health_tx, mut health_rx) = mpsc::channel::<bool>(1);

    // Probe the service once so an unreachable backend is reported up front.
    let probe = client.clone();
    tokio::spawn(async move {
        let healthy = match probe.health().await {
            Ok(health) => health.is_ok(),
            Err(e) => {
                warn!(error = %e, "Health check failed.");
                false
            }
        };
        let _ = health_tx.send(healthy).await;
    });

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, client, &tx)?;
        }

        if let Ok(outcome) = rx.try_recv() {
            app.finish_scan(outcome);
        }

        if let Ok(false) = health_rx.try_recv() {
            app.notify(NotificationKind::Warning, t!("notify.service_unreachable").to_string());
        }

        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, client: &ScanClient, tx: &mpsc::Sender<ScanOutcome>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, client, tx),
                AppState::Finished => handle_finished_input(app, key.code),
                AppState::Scanning => {
                    if key.code == KeyCode::Esc { app.quit(); }
                }
            }
        }
    }
    Ok(())
}

/// Editing the domain and picking the scan category.
fn handle_idle_input(app: &mut App, key_code: KeyCode, client: &ScanClient, tx: &mpsc::Sender<ScanOutcome>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.next_scan_type(),
        KeyCode::BackTab => app.previous_scan_type(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => { app.input.pop(); },
        KeyCode::Enter => {
            let Some(domain) = app.submit() else { return; };
            let scan_type = app.scan_type;
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = client.scan(&domain, scan_type).await;
                let _ = tx.send(outcome).await;
            });
        }
        _ => {}
    }
}

/// Browsing the results of a finished scan.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
