use crate::app::FetchState;
use crate::events::AppEvent;
use crate::traits::RunSource;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Performs one fetch (retries included) and settles it into a display state.
pub async fn fetch_runs(source: &dyn RunSource) -> FetchState {
    match source.fetch_runs().await {
        Ok(runs) => {
            tracing::info!(count = runs.len(), "runs fetched");
            FetchState::Success(runs)
        }
        Err(e) => {
            tracing::error!("fetching runs failed: {e}");
            FetchState::Error(e.to_string())
        }
    }
}

/// Runs a fetch in the background and reports it tagged with `generation`.
pub fn spawn_fetch(
    source: Arc<dyn RunSource>,
    generation: u64,
    tx: mpsc::UnboundedSender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let state = fetch_runs(source.as_ref()).await;
        if tx.send(AppEvent::FetchResult { generation, state }).is_err() {
            tracing::warn!("fetch: channel closed");
        }
    })
}
