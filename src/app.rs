// src/app.rs

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use domscan::{ScanError, ScanResult, ScanType, ValidationError, validate_domain};
use ratatui::widgets::ScrollbarState;
use rust_i18n::t;
use tracing::{info, warn};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub scan_type: ScanType,
    pub scanned_domain: Option<String>,
    pub results: Vec<ScanResult>,
    pub finished_at: Option<DateTime<Local>>,
    pub notification: Option<Notification>,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub spinner_frame: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            scan_type: ScanType::default(),
            scanned_domain: None,
            results: Vec::new(),
            finished_at: None,
            notification: None,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            spinner_frame: 0,
        }
    }

    pub fn next_scan_type(&mut self) {
        self.scan_type = self.scan_type.next();
    }

    pub fn previous_scan_type(&mut self) {
        self.scan_type = self.scan_type.previous();
    }

    /// Validates the typed domain and, if it is acceptable, moves to
    /// `Scanning` and returns the domain to send.
    ///
    /// Blank input is ignored. A refused domain raises a warning and leaves
    /// the app where it was.
    pub fn submit(&mut self) -> Option<String> {
        let domain = self.input.trim().to_string();
        if domain.is_empty() {
            return None;
        }

        if let Err(e) = validate_domain(&domain) {
            warn!(domain = %domain, reason = %e, "Domain refused before scanning.");
            self.notify(NotificationKind::Warning, validation_message(e));
            return None;
        }

        info!(domain = %domain, scan_type = %self.scan_type, "Submitting scan.");
        self.state = AppState::Scanning;
        self.scanned_domain = Some(domain.clone());
        self.results.clear();
        self.notification = None;
        self.reset_scroll();
        Some(domain)
    }

    /// Stores the outcome of the scan started by [`App::submit`].
    pub fn finish_scan(&mut self, outcome: Result<Vec<ScanResult>, ScanError>) {
        match outcome {
            Ok(results) => {
                info!(count = results.len(), "Scan results received.");
                self.results = results;
            }
            Err(e) => {
                warn!(error = %e, "Scan failed.");
                self.results.clear();
                self.notify(NotificationKind::Error, t!("notify.server_error").to_string());
            }
        }
        self.state = AppState::Finished;
        self.finished_at = Some(Local::now());
        self.reset_scroll();
    }

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notification = Some(Notification {
            kind,
            message,
            expires_at: Instant::now() + NOTIFICATION_TTL,
        });
    }

    /// Drops the current notification once `now` is past its expiry.
    pub fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notification = None;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        let last = self.results.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(last);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn on_tick(&mut self) {
        if let AppState::Scanning = self.state {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
        self.expire_notification(Instant::now());
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    /// Back to editing, keeping the domain and category for a quick rescan.
    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.scanned_domain = None;
        self.results.clear();
        self.finished_at = None;
        self.reset_scroll();
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::new(self.results.len());
    }
}

/// User-facing text for a refused domain.
pub fn validation_message(err: ValidationError) -> String {
    match err {
        ValidationError::InvalidFormat => t!("notify.invalid_format").to_string(),
        ValidationError::UnrecognizedSuffix => t!("notify.unrecognized_suffix").to_string(),
    }
}
