#![allow(dead_code)]

use chainr_dash::api::executor::{HttpRunSource, RetryPolicy};
use chainr_dash::app::{AppState, FetchState, Job, Run, RunStatus, View};
use chainr_dash::theme::Theme;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

pub fn run(status: RunStatus) -> Run {
    Run {
        status,
        jobs: Vec::new(),
    }
}

pub fn job(name: &str, status: RunStatus) -> Job {
    Job {
        name: name.to_string(),
        status,
    }
}

pub fn run_with_jobs() -> Run {
    Run {
        status: RunStatus::Running,
        jobs: vec![
            job("job1", RunStatus::Pending),
            job("job2", RunStatus::Successful),
        ],
    }
}

pub fn state_in(view: View) -> AppState {
    AppState::new("http://localhost:8080".to_string(), Theme::Light, view)
}

pub fn settled_state(view: View, result: FetchState) -> AppState {
    let mut state = state_in(view);
    let generation = state.begin_fetch();
    state.apply_fetch(generation, result);
    state
}

/// Retry quickly so failure paths settle within a test.
pub fn fast_policy(retries: u32) -> RetryPolicy {
    RetryPolicy {
        retries,
        base_delay: Duration::from_millis(1),
    }
}

pub fn source_for(base_url: &str, retries: u32) -> HttpRunSource {
    HttpRunSource::new(base_url, fast_policy(retries), Duration::from_secs(5)).unwrap()
}

/// Renders the full UI and returns the screen, one line per row.
pub fn render_to_lines(state: &AppState) -> Vec<String> {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| chainr_dash::tui::render::render(f, state))
        .unwrap();

    let buffer = terminal.backend().buffer().clone();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
                .collect()
        })
        .collect()
}

pub fn render_to_string(state: &AppState) -> String {
    render_to_lines(state).join("\n")
}
