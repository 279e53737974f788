use crate::api::error::FetchError;
use crate::app::Run;

#[derive(serde::Deserialize)]
struct RunsResponse {
    items: Vec<Run>,
}

/// Parses a `/api/runs` body. A body without `items` is an error, not an
/// empty list.
pub fn parse_runs(json: &str) -> Result<Vec<Run>, FetchError> {
    let resp: RunsResponse = serde_json::from_str(json)?;
    Ok(resp.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Job, RunStatus};
    use pretty_assertions::assert_eq;

    const RUNS_JSON: &str = r#"{
        "items": [
            {
                "status": "RUNNING",
                "jobs": [
                    {"name": "job1", "status": "PENDING"},
                    {"name": "job2", "status": "SUCCESSFUL"}
                ]
            },
            {"status": "FAILED", "jobs": []}
        ]
    }"#;

    #[test]
    fn parse_runs_with_jobs() {
        let runs = parse_runs(RUNS_JSON).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].status, RunStatus::Running);
        assert_eq!(
            runs[0].jobs,
            vec![
                Job {
                    name: "job1".to_string(),
                    status: RunStatus::Pending,
                },
                Job {
                    name: "job2".to_string(),
                    status: RunStatus::Successful,
                },
            ]
        );
        assert_eq!(runs[1].status, RunStatus::Failed);
        assert!(runs[1].jobs.is_empty());
    }

    #[test]
    fn parse_all_status_strings() {
        let statuses = [
            ("PENDING", RunStatus::Pending),
            ("RUNNING", RunStatus::Running),
            ("SUCCESSFUL", RunStatus::Successful),
            ("FAILED", RunStatus::Failed),
        ];
        for (s, expected) in &statuses {
            let json = format!(r#"{{"items":[{{"status":"{s}","jobs":[]}}]}}"#);
            let runs = parse_runs(&json).unwrap();
            assert_eq!(runs[0].status, *expected, "status string: {s}");
        }
    }

    #[test]
    fn parse_unknown_status() {
        let runs = parse_runs(r#"{"items":[{"status":"CANCELLED","jobs":[]}]}"#).unwrap();
        assert_eq!(runs[0].status, RunStatus::Unknown);
    }

    #[test]
    fn status_matching_is_case_sensitive() {
        let runs = parse_runs(r#"{"items":[{"status":"running"}]}"#).unwrap();
        assert_eq!(runs[0].status, RunStatus::Unknown);
    }

    #[test]
    fn parse_empty_items() {
        let runs = parse_runs(r#"{"items":[{}, {}, {}]}"#).unwrap();
        assert_eq!(runs.len(), 3);
        assert!(runs.iter().all(|r| r.status == RunStatus::Unknown && r.jobs.is_empty()));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"kind":"RunList","items":[{"status":"PENDING","metadata":{"uid":"x"}}]}"#;
        let runs = parse_runs(json).unwrap();
        assert_eq!(runs[0].status, RunStatus::Pending);
    }

    #[test]
    fn missing_items_is_an_error() {
        assert!(matches!(
            parse_runs(r#"{"runs":[]}"#),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_runs("not json").is_err());
        assert!(parse_runs("").is_err());
    }
}
