use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Gauge;
use ratatui::Frame;

use crate::app::AppState;
use crate::ui::theme::Theme;

/// CPU and memory gauges, refreshed with every scan tick.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cpu = state.stats.cpu_percent.min(100);
    let cpu_gauge = Gauge::default()
        .gauge_style(theme.status_style(cpu < 85))
        .label(format!("CPU {}%", cpu))
        .percent(cpu);
    frame.render_widget(cpu_gauge, chunks[0]);

    let (used, total) = (state.stats.mem_used_mib, state.stats.mem_total_mib);
    let ratio = if total > 0 {
        (used as f64 / total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mem_gauge = Gauge::default()
        .gauge_style(theme.status_style(ratio < 0.85))
        .label(format!("MEM {}/{} MiB", used, total))
        .ratio(ratio);
    frame.render_widget(mem_gauge, chunks[1]);
}
