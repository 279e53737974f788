use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{AppState, FetchState};
use crate::progress::JobSegment;
use crate::theme::Palette;
use crate::view::{self, RunView};

pub const STATUS_INDICATOR: &str = "●";

/// Width of the status text column; fits the longest label.
const STATUS_WIDTH: usize = 10;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let [info_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let info_style = match state.fetch {
        FetchState::Error(_) => Style::default().fg(palette.error),
        FetchState::Loading | FetchState::Success(_) => Style::default().fg(palette.muted),
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", view::runs_info(&state.fetch)),
            info_style,
        )),
        info_area,
    );

    let runs = view::run_views(state.runs());
    if runs.is_empty() {
        return;
    }

    // Keep the cursor visible
    let visible_height = list_area.height as usize;
    let scroll_offset = if state.cursor >= visible_height {
        state.cursor - visible_height + 1
    } else {
        0
    };

    let lines: Vec<Line> = runs
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, run)| render_run_line(run, i == state.cursor, list_area.width as usize, palette))
        .collect();

    f.render_widget(Paragraph::new(lines), list_area);
}

fn render_run_line(
    run: &RunView,
    is_selected: bool,
    max_width: usize,
    palette: &Palette,
) -> Line<'static> {
    let color = palette.status_color(run.status_class);
    let select_style = if is_selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!(" {STATUS_INDICATOR} "), Style::default().fg(color)),
        Span::styled(
            format!("{:<STATUS_WIDTH$}", run.status_label),
            select_style.fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let prefix_width = 3 + STATUS_WIDTH + 1;
    let bar_width = max_width.saturating_sub(prefix_width + 1);
    if run.jobs.is_empty() {
        spans.push(Span::styled("no jobs", Style::default().fg(palette.muted)));
    } else {
        spans.extend(progress_bar(&run.jobs, bar_width, palette));
    }

    Line::from(spans)
}

/// Splits `width` columns evenly across the jobs; the remainder goes to the
/// leading segments. Each segment is filled with its status colour.
fn progress_bar(jobs: &[JobSegment], width: usize, palette: &Palette) -> Vec<Span<'static>> {
    let count = jobs.len();
    let base = width / count;
    let extra = width % count;

    jobs.iter()
        .enumerate()
        .map(|(i, job)| {
            let seg_width = base + usize::from(i < extra);
            let label = fit(&job.label, seg_width);
            Span::styled(
                label,
                Style::default()
                    .bg(palette.status_color(job.class))
                    .fg(palette.background),
            )
        })
        .collect()
}

/// Truncates or pads `s` to exactly `width` display columns.
fn fit(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    // Leave a one-column gap so adjacent segments stay distinguishable
    let text_width = width.saturating_sub(1);
    let mut out = String::new();
    if UnicodeWidthStr::width(s) <= text_width {
        out.push_str(s);
    } else if text_width > 0 {
        let mut used = 0;
        for c in s.chars() {
            let cw = c.width().unwrap_or(0);
            if used + cw + 1 > text_width {
                out.push('…');
                break;
            }
            out.push(c);
            used += cw;
        }
    }
    let pad = width.saturating_sub(UnicodeWidthStr::width(out.as_str()));
    out.push_str(&" ".repeat(pad));
    out
}
