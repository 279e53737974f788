use crate::app::Job;
use crate::status::status_class;

/// One segment of a run's progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSegment {
    pub label: String,
    pub class: &'static str,
}

/// Maps jobs to progress-bar segments, preserving order.
pub fn map_jobs(jobs: &[Job]) -> Vec<JobSegment> {
    jobs.iter()
        .map(|job| JobSegment {
            label: job.name.clone(),
            class: status_class(job.status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RunStatus;
    use pretty_assertions::assert_eq;

    fn job(name: &str, status: RunStatus) -> Job {
        Job {
            name: name.to_string(),
            status,
        }
    }

    #[test]
    fn empty_jobs_give_empty_bar() {
        assert!(map_jobs(&[]).is_empty());
    }

    #[test]
    fn one_segment_per_job_in_order() {
        let jobs = vec![
            job("job1", RunStatus::Pending),
            job("job2", RunStatus::Successful),
        ];
        assert_eq!(
            map_jobs(&jobs),
            vec![
                JobSegment {
                    label: "job1".to_string(),
                    class: "pending",
                },
                JobSegment {
                    label: "job2".to_string(),
                    class: "successful",
                },
            ]
        );
    }

    #[test]
    fn unknown_job_status_uses_fallback_class() {
        let segments = map_jobs(&[job("deploy", RunStatus::Unknown)]);
        assert_eq!(segments[0].class, "unknown");
        assert_eq!(segments[0].label, "deploy");
    }
}
