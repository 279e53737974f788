use crate::api::error::FetchError;
use crate::app::Run;
use async_trait::async_trait;

/// Anything that can produce the current list of runs.
#[async_trait]
pub trait RunSource: Send + Sync {
    async fn fetch_runs(&self) -> Result<Vec<Run>, FetchError>;
}
