use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, View};
use crate::tui::spinner;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let mut spans = vec![
        Span::styled(
            " chainr ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(palette.muted)),
    ];

    // Navigation
    for (i, view) in [View::Home, View::Runs].into_iter().enumerate() {
        let style = if view == state.view {
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, view.title()), style));
        spans.push(Span::raw("  "));
    }

    if state.is_loading() {
        spans.push(Span::styled(
            spinner::frame(state.spinner_frame).to_string(),
            Style::default().fg(palette.pending),
        ));
    } else if let Some(at) = state.last_fetch {
        spans.push(Span::styled(
            format!("updated {}", at.format("%H:%M:%S")),
            Style::default().fg(palette.muted),
        ));
    }

    if state.error_message().is_some() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "!",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Theme toggle, right-aligned
    let toggle = Line::from(vec![
        Span::styled("t ", Style::default().fg(palette.accent)),
        Span::styled(
            format!("theme: {} ", state.theme.theme().as_str()),
            Style::default().fg(palette.foreground),
        ),
    ]);
    let toggle_width = toggle.width() as u16;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(toggle_width)]).areas(inner);
    f.render_widget(Paragraph::new(Line::from(spans)), left);
    f.render_widget(Paragraph::new(toggle), right);
}
