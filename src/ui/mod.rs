pub mod theme;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::state::HELP_LINE;
use crate::app::{AppState, InputMode};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // ports table
            Constraint::Length(1), // cpu/mem gauges
            Constraint::Length(1), // filter input
            Constraint::Length(1), // status line
        ])
        .split(area);

    widgets::ports_table::render(frame, state, theme, chunks[0]);
    widgets::dashboard::render(frame, state, theme, chunks[1]);
    render_filter_line(frame, state, theme, chunks[2]);
    render_status_line(frame, state, theme, chunks[3]);
}

fn render_filter_line(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let line = match state.mode {
        InputMode::Filter => Line::from(vec![
            Span::styled("/ ", theme.filter_style().add_modifier(Modifier::BOLD)),
            Span::styled(state.filter_input.clone(), theme.filter_style()),
            Span::styled("_", theme.filter_style().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        InputMode::Normal if !state.filter_input.is_empty() => Line::from(vec![
            Span::styled("filter: ", theme.muted_style()),
            Span::styled(state.filter_input.clone(), theme.filter_style()),
            Span::styled(
                format!("  ({}/{})", state.filtered.len(), state.entries.len()),
                theme.muted_style(),
            ),
        ]),
        InputMode::Normal => Line::from(Span::styled(HELP_LINE, theme.muted_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_line(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let status = Paragraph::new(Line::from(Span::styled(
        state.status.clone(),
        theme.status_style(state.status_ok),
    )));
    frame.render_widget(status, area);
}
