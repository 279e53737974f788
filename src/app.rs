use crate::theme::{Theme, ThemeStore};
use chrono::{DateTime, Local};
use std::time::Instant;

// UI constants
pub const TICK_RATE_MS: u64 = 100;
pub const NARROW_WIDTH_THRESHOLD: u16 = 60;
pub const ERROR_TTL_SECS: u64 = 10;

/// Status of a run or a job, as served by `/api/runs`.
///
/// Matching is case-sensitive. Anything outside the four known values,
/// including a missing field, lands on `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Pending,
    Running,
    Successful,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
pub struct Job {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: RunStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
pub struct Run {
    #[serde(default)]
    pub status: RunStatus,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Outcome of the most recent fetch, as seen by the views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Success(Vec<Run>),
    Error(String),
}

impl FetchState {
    pub fn runs(&self) -> &[Run] {
        match self {
            Self::Success(runs) => runs,
            Self::Loading | Self::Error(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    #[default]
    Home,
    Runs,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Runs,
            Self::Runs => Self::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Runs => "Runs",
        }
    }
}

/// Immutable configuration set at startup.
pub struct AppConfig {
    pub base_url: String,
    pub version_string: String,
    pub refresh_interval: Option<u64>,
}

pub struct AppState {
    pub config: AppConfig,

    pub view: View,
    pub theme: ThemeStore,

    // Fetch tracking; only the latest generation may settle `fetch`
    pub fetch: FetchState,
    pub generation: u64,
    pub last_fetch: Option<DateTime<Local>>,

    // Runs view navigation
    pub cursor: usize,

    // Transient UI
    pub error: Option<(String, Instant)>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(base_url: String, theme: Theme, view: View) -> Self {
        Self {
            config: AppConfig {
                base_url,
                version_string: format!("chainr-dash v{}", env!("CARGO_PKG_VERSION")),
                refresh_interval: None,
            },
            view,
            theme: ThemeStore::new(theme),
            fetch: FetchState::Loading,
            generation: 0,
            last_fetch: None,
            cursor: 0,
            error: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Puts the state back into `Loading` and returns the generation the
    /// caller must tag its result with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.fetch = FetchState::Loading;
        self.generation
    }

    /// Settles a fetch. Results from superseded generations are dropped;
    /// returns whether the result was applied.
    pub fn apply_fetch(&mut self, generation: u64, result: FetchState) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return false;
        }
        match &result {
            FetchState::Error(msg) => self.set_error(msg.clone()),
            FetchState::Success(_) => {
                self.clear_error();
                self.last_fetch = Some(Local::now());
            }
            FetchState::Loading => {}
        }
        self.fetch = result;
        self.clamp_cursor();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn runs(&self) -> &[Run] {
        self.fetch.runs()
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
    }

    pub fn switch_view(&mut self) {
        self.view = self.view.next();
    }

    pub fn show_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.runs().len() {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.runs().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn set_error(&mut self, msg: String) {
        self.error = Some((msg, Instant::now()));
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn prune_error(&mut self) {
        if let Some((_, t)) = &self.error {
            if t.elapsed().as_secs() >= ERROR_TTL_SECS {
                self.error = None;
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|(msg, _)| msg.as_str())
    }
}
