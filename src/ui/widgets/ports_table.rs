use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::AppState;
use crate::output::fit_str;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(Span::styled(" ACTIVE PORTS ", theme.title_style()));

    if state.filtered.is_empty() {
        let msg = if state.entries.is_empty() {
            "No active ports detected."
        } else {
            "No entries match the filter."
        };
        let para = Paragraph::new(Span::styled(msg, theme.muted_style())).block(block);
        frame.render_widget(para, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("STATE"),
        Cell::from("PORT"),
        Cell::from("PROTO"),
        Cell::from("PROCESS"),
        Cell::from("PID"),
        Cell::from("USER"),
        Cell::from("TAG"),
    ])
    .style(theme.header_style());

    let rows: Vec<Row> = state
        .filtered
        .iter()
        .map(|&idx| {
            let e = &state.entries[idx];
            let check = if state.selected.contains(&idx) {
                "●"
            } else {
                "○"
            };
            let pid = if e.pid > 0 {
                e.pid.to_string()
            } else {
                "-".to_string()
            };
            Row::new(vec![
                Cell::from(Span::styled(check.to_string(), theme.normal_style())),
                Cell::from(Span::styled(e.state.to_string(), theme.muted_style())),
                Cell::from(Span::styled(
                    e.local_port.clone(),
                    theme.header_style(),
                )),
                Cell::from(Span::styled(
                    e.proto.to_string(),
                    theme.normal_style().fg(theme.blue),
                )),
                Cell::from(Span::styled(
                    fit_str(&e.process_name, 22),
                    theme.normal_style(),
                )),
                Cell::from(Span::styled(pid, theme.normal_style())),
                Cell::from(Span::styled(
                    fit_str(&e.user_name, 12),
                    theme.normal_style(),
                )),
                Cell::from(Span::styled(e.tag.to_string(), theme.tag_style(e.tag))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Min(22),
        Constraint::Length(7),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.cursor_style())
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(table, area, &mut state.table_state);
}
