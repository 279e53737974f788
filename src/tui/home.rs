use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, FetchState};
use crate::view;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let summary_style = match state.fetch {
        FetchState::Loading => Style::default().fg(palette.muted),
        FetchState::Error(_) => Style::default().fg(palette.error),
        FetchState::Success(_) => Style::default()
            .fg(palette.running)
            .add_modifier(Modifier::BOLD),
    };

    let lines = vec![
        Line::from(Span::styled(
            "chainr",
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(view::home_summary(&state.fetch), summary_style)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("press ", Style::default().fg(palette.muted)),
            Span::styled("2", Style::default().fg(palette.accent)),
            Span::styled(" to see all runs", Style::default().fg(palette.muted)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{} · {}", state.config.version_string, state.config.base_url),
            Style::default().fg(palette.muted),
        )),
    ];

    let height = lines.len() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}
