//! View models consumed by the TUI: summary lines and per-run items.

use crate::app::{FetchState, Run};
use crate::progress::{map_jobs, JobSegment};
use crate::status::{count_active, status_class};

pub const LOADING_INDICATOR: &str = "Loading runs...";
pub const ERROR_INDICATOR: &str = "An error occurred while fetching runs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunView {
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub jobs: Vec<JobSegment>,
}

impl RunView {
    pub fn from_run(run: &Run) -> Self {
        Self {
            status_label: run.status.label(),
            status_class: status_class(run.status),
            jobs: map_jobs(&run.jobs),
        }
    }
}

pub fn run_views(runs: &[Run]) -> Vec<RunView> {
    runs.iter().map(RunView::from_run).collect()
}

/// Home view summary: active-run count once loaded.
pub fn home_summary(state: &FetchState) -> String {
    match state {
        FetchState::Loading => LOADING_INDICATOR.to_string(),
        FetchState::Error(_) => ERROR_INDICATOR.to_string(),
        FetchState::Success(runs) => match count_active(runs) {
            1 => "1 run in progress".to_string(),
            n => format!("{n} runs in progress"),
        },
    }
}

/// Runs view info line above the list.
pub fn runs_info(state: &FetchState) -> String {
    match state {
        FetchState::Loading => LOADING_INDICATOR.to_string(),
        FetchState::Error(_) => ERROR_INDICATOR.to_string(),
        FetchState::Success(runs) if runs.is_empty() => "No runs yet".to_string(),
        FetchState::Success(runs) => {
            let active = count_active(runs);
            format!("{} runs, {active} active", runs.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Job, RunStatus};

    fn run(status: RunStatus) -> Run {
        Run {
            status,
            jobs: Vec::new(),
        }
    }

    #[test]
    fn summary_while_loading() {
        assert!(home_summary(&FetchState::Loading).contains("Loading"));
        assert!(runs_info(&FetchState::Loading).contains("Loading"));
    }

    #[test]
    fn summary_on_error() {
        let state = FetchState::Error("HTTP 500".to_string());
        assert!(home_summary(&state).contains("error"));
        assert!(runs_info(&state).contains("error"));
    }

    #[test]
    fn summary_counts_active_runs() {
        let state = FetchState::Success(vec![
            run(RunStatus::Running),
            run(RunStatus::Pending),
            run(RunStatus::Successful),
            run(RunStatus::Failed),
        ]);
        assert_eq!(home_summary(&state), "2 runs in progress");
        assert_eq!(runs_info(&state), "4 runs, 2 active");
    }

    #[test]
    fn summary_singular() {
        let state = FetchState::Success(vec![run(RunStatus::Running)]);
        assert_eq!(home_summary(&state), "1 run in progress");
    }

    #[test]
    fn empty_runs_info() {
        assert_eq!(runs_info(&FetchState::Success(Vec::new())), "No runs yet");
    }

    #[test]
    fn run_view_carries_status_and_jobs() {
        let run = Run {
            status: RunStatus::Running,
            jobs: vec![Job {
                name: "job1".to_string(),
                status: RunStatus::Pending,
            }],
        };
        let view = RunView::from_run(&run);
        assert_eq!(view.status_label, "RUNNING");
        assert_eq!(view.status_class, "running");
        assert_eq!(view.jobs.len(), 1);
        assert_eq!(view.jobs[0].class, "pending");
    }

    #[test]
    fn one_view_per_run() {
        let runs = vec![Run::default(), Run::default(), Run::default()];
        assert_eq!(run_views(&runs).len(), 3);
    }
}
