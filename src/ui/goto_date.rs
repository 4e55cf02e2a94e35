//! Go-to-date overlay.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the go-to-date input overlay centered on screen.
pub fn render(f: &mut Frame, input: &str) {
    let area = f.area();

    let width = 40u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let text = format!(
        "Enter date (YYYY-MM-DD):\n\n> {}_\n\n(Enter) Go  (Esc) Cancel",
        input
    );

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Go to Date "),
    );

    f.render_widget(paragraph, overlay);
}
