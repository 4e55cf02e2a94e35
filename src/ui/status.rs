use crate::app::App;
use crate::feed::ViewMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against zero-width/height areas
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed status messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        // Borrow existing status message instead of cloning
        Cow::Borrowed(msg.as_ref())
    } else if app.feed.is_loading() && !app.feed.visible.is_empty() {
        // A refresh over existing rows is only visible here
        Cow::Borrowed("Loading headlines...")
    } else {
        // Static keybinding hints - zero allocation
        match app.feed.view {
            ViewMode::Normal => Cow::Borrowed(
                "[h/l]day [g]oto [c]ategory [b]ookmark [s]aved [o]pen [r]efresh [?]help [q]uit",
            ),
            ViewMode::BookmarksOnly => {
                Cow::Borrowed("[Esc/s]back [b]remove bookmark [o]pen [?]help [q]uit")
            }
        }
    };

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}
