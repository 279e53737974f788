use crate::app::{Run, RunStatus};

/// Class name used for statuses outside the known set.
pub const UNKNOWN_CLASS: &str = "unknown";

/// Number of runs that are still `RUNNING` or `PENDING`.
pub fn count_active(runs: &[Run]) -> usize {
    runs.iter().filter(|r| r.status.is_active()).count()
}

/// Lower-case display class for a status, e.g. `RUNNING` -> `"running"`.
pub fn status_class(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Pending => "pending",
        RunStatus::Running => "running",
        RunStatus::Successful => "successful",
        RunStatus::Failed => "failed",
        RunStatus::Unknown => UNKNOWN_CLASS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(status: RunStatus) -> Run {
        Run {
            status,
            jobs: Vec::new(),
        }
    }

    #[test]
    fn counts_running_and_pending() {
        let runs = vec![
            run(RunStatus::Running),
            run(RunStatus::Pending),
            run(RunStatus::Successful),
            run(RunStatus::Failed),
        ];
        assert_eq!(count_active(&runs), 2);
    }

    #[test]
    fn empty_list_has_no_active_runs() {
        assert_eq!(count_active(&[]), 0);
    }

    #[test]
    fn unknown_runs_are_not_active() {
        assert_eq!(count_active(&[run(RunStatus::Unknown)]), 0);
    }

    #[test]
    fn class_matches_lowercased_status() {
        for status in [
            RunStatus::Pending,
            RunStatus::Running,
            RunStatus::Successful,
            RunStatus::Failed,
        ] {
            assert_eq!(status_class(status), status.label().to_lowercase());
        }
    }

    #[test]
    fn class_is_stable() {
        assert_eq!(status_class(RunStatus::Running), "running");
        assert_eq!(status_class(RunStatus::Running), status_class(RunStatus::Running));
    }

    #[test]
    fn unknown_maps_to_fallback() {
        assert_eq!(status_class(RunStatus::Unknown), UNKNOWN_CLASS);
    }
}
