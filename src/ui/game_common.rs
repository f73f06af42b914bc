//! Shared screen furniture: the status bar and the too-small notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Render the status bar above the grid: the status line, then the controls.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[R]", "Restart")]`.
/// Lines that do not fit in `area` are clipped.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: Line, controls: &[(&str, &str)]) {
    let mut lines = vec![status];
    if !controls.is_empty() {
        lines.push(controls_line(controls));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// `[key] action` pairs, keys bright and actions dimmed, two spaces apart.
fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, &(key, action))| {
            let gap = (i > 0).then(|| Span::raw("  "));
            gap.into_iter().chain([
                Span::styled(key, key_style),
                Span::styled(format!(" {}", action), action_style),
            ])
        })
        .collect();
    Line::from(spans)
}

/// Shown instead of the board when the terminal cannot fit it.
pub fn render_too_small(frame: &mut Frame, need: (u16, u16)) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                need.0, need.1, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
