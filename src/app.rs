//! Application state and event loop
//!
//! The app owns the two screens, the services behind them, and the view
//! registry the animated counters write into. Input is read on a
//! blocking thread and fed through a channel; the async loop multiplexes
//! it with auth events and the redraw tick.

use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::models::{ChartSeries, CreditScore, ScoreBand, ToastKind, Transaction};
use crate::services::{chart_service, counter_service, insight_service, score_service};
use crate::services::{AuthEvent, BiometricAuth, NoticeService, ToastService};
use crate::services::{CounterHandle, CounterTiming, FrameFormat, TerminationPolicy};
use crate::utils::DashboardError;
use crate::views::{self, DisplayPort, ViewRegistry};
use crate::ui;

const REDRAW_INTERVAL: Duration = Duration::from_millis(50);

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

pub struct App {
    pub screen: Screen,
    pub bank_name: String,
    pub transactions: Vec<Transaction>,
    pub registry: ViewRegistry,
    pub toasts: ToastService,
    pub notices: NoticeService,
    pub auth: BiometricAuth,
    pub score: CreditScore,
    pub insights: Vec<String>,
    pub chart: ChartSeries,
    counters: Vec<CounterHandle>,
    auth_tx: UnboundedSender<AuthEvent>,
    config: Config,
    should_quit: bool,
}

impl App {
    /// Build the app on the login screen. The returned receiver carries
    /// auth events into the run loop.
    pub fn new(config: Config, transactions: Vec<Transaction>) -> (App, UnboundedReceiver<AuthEvent>) {
        let (auth_tx, auth_rx) = unbounded_channel();
        let app = App {
            screen: Screen::Login,
            bank_name: config.bank_name.clone(),
            transactions,
            registry: ViewRegistry::with_dashboard_ports(),
            toasts: ToastService::new(),
            notices: NoticeService::new(),
            auth: BiometricAuth::new(),
            score: CreditScore {
                value: 0,
                band: ScoreBand::Poor,
            },
            insights: Vec::new(),
            chart: ChartSeries {
                labels: Vec::new(),
                points: Vec::new(),
            },
            counters: Vec::new(),
            auth_tx,
            config,
            should_quit: false,
        };

        // a login error handed over by the collaborator that rendered us
        if let Some(message) = app.config.login_error.clone() {
            app.show_toast(&message, ToastKind::Error);
        }

        (app, auth_rx)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Show a toast if the toast surface exists; silently skip otherwise
    pub fn show_toast(&self, text: &str, kind: ToastKind) {
        if self.registry.get(views::TOAST_CONTAINER).is_none() {
            debug!("toast surface missing, skipping: {}", text);
            return;
        }
        self.toasts.show(text, kind);
    }

    /// Post a plain notification if its surface exists
    pub fn post_notice(&self, text: &str) {
        if self.registry.get(views::NOTICE_CONTAINER).is_none() {
            debug!("notification surface missing, skipping: {}", text);
            return;
        }
        self.notices.post(text);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('f') if self.screen == Screen::Login => {
                self.auth.begin_scan(self.toasts.clone(), self.auth_tx.clone());
            }
            KeyCode::Char('a') if self.screen == Screen::Dashboard => {
                self.post_notice("Quick Actions Coming Soon 🚀");
            }
            KeyCode::Char('e') if self.screen == Screen::Dashboard => self.export_chart(),
            _ => {}
        }
    }

    pub fn on_auth_event(&mut self, event: AuthEvent) {
        match event {
            // the trigger re-enables itself; the next redraw shows it
            AuthEvent::Authenticated => {}
            AuthEvent::Navigate => {
                if let Err(e) = self.enter_dashboard() {
                    error!("Failed to initialize dashboard: {}", e);
                }
            }
        }
    }

    /// Switch to the dashboard and kick off its presentation sequence:
    /// balance counter, score counter, chart series, insights.
    fn enter_dashboard(&mut self) -> Result<(), DashboardError> {
        self.screen = Screen::Dashboard;
        info!("entering dashboard");

        let total: f64 = self.transactions.iter().map(|t| t.amount).sum();
        let balance_port = self.registry.require(views::LIVE_BALANCE)?;
        self.counters.push(counter_service::spawn_counter(
            Arc::new(balance_port),
            total,
            TerminationPolicy::EpsilonConvergence { epsilon: 5.0 },
            FrameFormat::Money,
            CounterTiming::default(),
        ));

        self.score = score_service::compute(&self.transactions);
        let score_port = self.registry.require(views::SCORE_VALUE)?;
        self.counters.push(counter_service::spawn_counter(
            Arc::new(score_port),
            self.score.value as f64,
            TerminationPolicy::ThresholdCrossing,
            FrameFormat::Integer,
            CounterTiming::default(),
        ));
        // the band label is set once, not animated
        self.registry
            .require(views::SCORE_LABEL)?
            .set_text(self.score.band.label());

        self.chart = chart_service::build_series(&self.transactions);
        self.insights = insight_service::generate(&self.transactions);
        Ok(())
    }

    fn export_chart(&self) {
        match chart_service::export_png(&self.chart, &self.config.chart_export_path, 900, 500) {
            Ok(()) => self.show_toast(
                &format!("Chart saved to {}", self.config.chart_export_path.display()),
                ToastKind::Success,
            ),
            Err(e) => self.show_toast(&format!("Export failed: {}", e), ToastKind::Error),
        }
    }

    /// Stop any still-running counters
    pub fn shutdown(&mut self) {
        for counter in &self.counters {
            counter.cancel();
        }
        self.counters.clear();
    }
}

/// Read terminal input on a dedicated thread, forwarding into the async
/// loop. The thread exits once the receiving side is dropped.
pub fn spawn_input_reader() -> UnboundedReceiver<Event> {
    let (tx, rx) = unbounded_channel();
    std::thread::spawn(move || loop {
        match crossterm::event::poll(Duration::from_millis(100)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Input read failed: {}", e);
                    break;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(e) => {
                error!("Input poll failed: {}", e);
                break;
            }
        }
    });
    rx
}

/// Drive the app until quit: input and auth events update state, the
/// redraw tick paints it
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut auth_rx: UnboundedReceiver<AuthEvent>,
    mut input_rx: UnboundedReceiver<Event>,
) -> Result<(), DashboardError> {
    let mut redraw = tokio::time::interval(REDRAW_INTERVAL);
    while !app.should_quit() {
        tokio::select! {
            Some(event) = input_rx.recv() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.on_key(key);
                    }
                }
            }
            Some(event) = auth_rx.recv() => app.on_auth_event(event),
            _ = redraw.tick() => {
                terminal.draw(|frame| ui::render(frame, &app))?;
            }
        }
    }
    app.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            bank_name: "ZENITH".to_string(),
            transactions_path: None,
            log_path: "/tmp/zenith-test.log".into(),
            login_error: None,
            demo_seed: 1,
            chart_export_path: "/tmp/zenith-test-chart.png".into(),
        }
    }

    fn tx(amount: f64) -> Transaction {
        Transaction {
            amount,
            transaction_type: "General".to_string(),
            description: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_enter_dashboard_runs_the_init_sequence() {
        let (mut app, _auth_rx) = App::new(test_config(), vec![tx(100.0), tx(-40.0)]);
        assert_eq!(app.screen, Screen::Login);

        app.on_auth_event(AuthEvent::Navigate);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.score.value, 600);
        assert_eq!(app.insights.len(), 3);
        assert_eq!(app.chart.points.len(), 2);
        // both counters are live
        assert_eq!(app.counters.len(), 2);

        // give the animations time to land on their exact targets
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let balance = app.registry.require(views::LIVE_BALANCE).unwrap().read();
        assert_eq!(balance, "$60");
        let label = app.registry.require(views::SCORE_LABEL).unwrap().read();
        assert_eq!(label, "Fair");
        app.shutdown();
    }

    #[tokio::test]
    async fn test_login_error_surfaces_as_error_toast() {
        let mut config = test_config();
        config.login_error = Some("Invalid credentials".to_string());
        let (app, _auth_rx) = App::new(config, Vec::new());

        let toasts = app.toasts.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].text, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_quick_action_posts_notice() {
        let (mut app, _auth_rx) = App::new(test_config(), Vec::new());
        app.on_auth_event(AuthEvent::Navigate);
        app.on_key(KeyEvent::from(KeyCode::Char('a')));
        let notices = app.notices.snapshot();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].text, "Quick Actions Coming Soon 🚀");
    }
}
