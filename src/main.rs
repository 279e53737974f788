use chainr_dash::api::{executor::HttpRunSource, fetcher};
use chainr_dash::app::{self, AppState};
use chainr_dash::cli::{self, Cli};
use chainr_dash::events::{AppEvent, EventHandler};
use chainr_dash::input::{self, Action, InputContext};
use chainr_dash::traits::RunSource;
use chainr_dash::tui;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

fn setup_verbose_logging() -> Result<()> {
    let state_dir = state_dir();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .init();
    tracing::info!("chainr-dash v{} starting with verbose logging", cli::VERSION);
    Ok(())
}

fn state_dir() -> std::path::PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        std::path::PathBuf::from(state).join("chainr-dash")
    } else if let Some(home) = std::env::var_os("HOME") {
        std::path::PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("chainr-dash")
    } else {
        std::path::PathBuf::from("/tmp/chainr-dash")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    if args.verbose {
        setup_verbose_logging()?;
    }

    // Validate the URL before taking over the terminal
    let source: Arc<dyn RunSource> = Arc::new(HttpRunSource::new(
        &args.url,
        args.retry_policy(),
        args.request_timeout(),
    )?);

    let mut state = AppState::new(args.url.clone(), args.theme, args.view);
    state.config.version_string = format!("chainr-dash v{}", cli::VERSION);
    state.config.refresh_interval = args.refresh_interval();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to disable raw mode during panic: {e}");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, SetTitle("")) {
            eprintln!("Failed to leave alternate screen during panic: {e}");
        }
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("chainr runs"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let events = EventHandler::new(Duration::from_millis(app::TICK_RATE_MS));
    let tx = events.sender();

    let result = run_app(&mut terminal, &mut state, events, &tx, &source).await;

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    result
}

fn start_fetch(state: &mut AppState, source: &Arc<dyn RunSource>, tx: &UnboundedSender<AppEvent>) {
    let generation = state.begin_fetch();
    tracing::debug!(generation, "starting fetch");
    fetcher::spawn_fetch(Arc::clone(source), generation, tx.clone());
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    mut events: EventHandler,
    tx: &UnboundedSender<AppEvent>,
    source: &Arc<dyn RunSource>,
) -> Result<()> {
    start_fetch(state, source, tx);
    let mut last_settled = Instant::now();

    loop {
        terminal.draw(|f| tui::render::render(f, state))?;
        state.prune_error();

        let Some(event) = events.next().await else {
            return Ok(());
        };

        match event {
            AppEvent::Key(key) => {
                let ctx = InputContext {
                    has_error: state.error.is_some(),
                    is_loading: state.is_loading(),
                };
                match input::map_key(key, &ctx) {
                    Action::Quit => state.should_quit = true,
                    Action::DismissError => state.clear_error(),
                    Action::ToggleTheme => state.toggle_theme(),
                    Action::Refresh => start_fetch(state, source, tx),
                    Action::SwitchView => state.switch_view(),
                    Action::ShowView(view) => state.show_view(view),
                    Action::MoveUp => state.move_cursor_up(),
                    Action::MoveDown => state.move_cursor_down(),
                    Action::None => {}
                }
            }
            AppEvent::Tick => {
                state.advance_spinner();
                if let Some(secs) = state.config.refresh_interval {
                    if !state.is_loading() && last_settled.elapsed().as_secs() >= secs {
                        start_fetch(state, source, tx);
                    }
                }
            }
            AppEvent::FetchResult { generation, state: result } => {
                if state.apply_fetch(generation, result) {
                    last_settled = Instant::now();
                }
            }
            AppEvent::Error(e) => state.set_error(e),
        }

        if state.should_quit {
            events.stop();
            return Ok(());
        }
    }
}
