use crate::api::executor::{
    RetryPolicy, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_SECS,
};
use crate::app::View;
use crate::theme::Theme;
use clap::Parser;
use std::time::Duration;

pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_NUMBER"));

#[derive(Parser, Debug)]
#[command(name = "chainr-dash", version = VERSION, about = "Terminal dashboard for chainr pipeline runs")]
pub struct Cli {
    /// Base URL of the chainr API
    #[arg(short, long, default_value = "http://localhost:8080")]
    pub url: String,

    /// Retries after a failed request (network errors and 5xx)
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Base delay in milliseconds for exponential backoff between retries
    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
    pub retry_delay: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Refetch runs every N seconds (manual refresh only when unset)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Initial theme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// View shown on startup
    #[arg(long, value_enum, default_value_t = View::Home)]
    pub view: View,

    /// Write debug logs to $XDG_STATE_HOME/chainr-dash/debug.log
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: self.retries,
            base_delay: Duration::from_millis(self.retry_delay),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// `--interval 0` behaves like no interval.
    pub fn refresh_interval(&self) -> Option<u64> {
        self.interval.filter(|secs| *secs > 0)
    }
}
