//! Help overlay showing the keybinding table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

/// Key and description pairs shown in the help overlay, in display order.
const BINDINGS: [(&str, &str); 13] = [
    ("j/k, ↑/↓", "Move selection"),
    ("h, ←", "Previous day"),
    ("l, →", "Next day (up to today)"),
    ("t", "Jump to today"),
    ("g", "Go to a date"),
    ("c / C", "Next / previous category"),
    ("b", "Toggle bookmark"),
    ("s", "Toggle saved view"),
    ("o, Enter", "Open link in browser"),
    ("r", "Refresh headlines"),
    ("?", "Toggle this help"),
    ("Esc", "Close overlay / leave saved view"),
    ("q, Ctrl+C", "Quit"),
];

/// Render the help overlay centered on top of the current view.
pub fn render(f: &mut Frame) {
    let area = f.area();

    let width = 56u16.min(area.width.saturating_sub(4));
    let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    // Clear the background behind the overlay
    f.render_widget(Clear, overlay);

    let rows: Vec<Row> = BINDINGS
        .iter()
        .map(|(key, action)| Row::new(vec![format!("  {}", key), action.to_string()]))
        .collect();

    let widths = [Constraint::Length(14), Constraint::Min(20)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (? to close) "),
        )
        .header(
            Row::new(vec!["Key", "Action"])
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::UNDERLINED),
                )
                .bottom_margin(1),
        );

    f.render_widget(table, overlay);
}
