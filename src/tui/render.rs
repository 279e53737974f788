use crate::app::{AppState, View};
use crate::tui::{footer, header, home, runs};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, state: &AppState) {
    let palette = state.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(1),    // body
            Constraint::Length(2), // footer
        ])
        .split(f.area());

    header::render(f, chunks[0], state);
    match state.view {
        View::Home => home::render(f, chunks[1], state),
        View::Runs => runs::render(f, chunks[1], state),
    }
    footer::render(f, chunks[2], state);

    // Error toast
    if let Some(err) = state.error_message() {
        let area = f.area();
        if area.height > 6 && area.width >= 4 {
            let err_area = Rect {
                x: area.x + 1,
                y: area.y + area.height.saturating_sub(5),
                width: area.width.saturating_sub(2),
                height: 3,
            };
            let err_widget = Paragraph::new(err.to_owned())
                .style(Style::default().fg(palette.error).bg(palette.background))
                .block(
                    Block::default()
                        .title(" Error ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(palette.error)),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(err_widget, err_area);
        }
    }
}
