use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, View};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();
    let narrow = area.width < crate::app::NARROW_WIDTH_THRESHOLD;

    let hints: &[(&str, &str)] = if narrow {
        &[("tab", "view"), ("t", "theme"), ("r", "refresh"), ("q", "quit")]
    } else if state.view == View::Runs {
        &[
            ("↑↓/jk", "navigate"),
            ("tab/1/2", "switch view"),
            ("t", "toggle theme"),
            ("r", "refresh"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("tab/1/2", "switch view"),
            ("t", "toggle theme"),
            ("r", "refresh"),
            ("q", "quit"),
        ]
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(*key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(palette.muted),
        ));
    }

    if let Some(secs) = state.config.refresh_interval {
        spans.push(Span::styled(
            format!("  every {secs}s"),
            Style::default().fg(palette.muted),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.muted)),
    );
    f.render_widget(footer, area);
}
