use crate::app::App;
use crate::feed::{can_go_forward, FeedPhase, FeedState, ViewMode};
use crate::store::Headline;
use crate::util::{display_width, truncate_to_width};
use chrono::{DateTime, FixedOffset};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Format a publish timestamp in the configured offset.
///
/// Day rows show the wall clock; the saved view spans days, so its rows
/// carry the date as well.
fn format_published(timestamp: Option<i64>, tz: FixedOffset, with_date: bool) -> String {
    let Some(ts) = timestamp else {
        return String::new();
    };
    let Some(dt) = DateTime::from_timestamp(ts, 0) else {
        return String::new();
    };
    let local = dt.with_timezone(&tz);
    if with_date {
        local.format("%b %d %H:%M").to_string()
    } else {
        local.format("%H:%M").to_string()
    }
}

/// Render the one-line day and category header.
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let today = app.today();
    let day = app.feed.day;

    let mut spans = vec![Span::styled("◀ ", Style::default().fg(Color::DarkGray))];
    spans.push(Span::styled(
        day.label(today),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if can_go_forward(day, today) {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
    }
    if app.feed.view == ViewMode::BookmarksOnly {
        spans.push(Span::styled(
            "  ★ Saved",
            Style::default().fg(Color::Yellow),
        ));
    }

    let right = format!("Category: {}", app.feed.category.label());
    let right_width = display_width(&right) as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    f.render_widget(
        Paragraph::new(right).style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}

/// Placeholder text for an empty list, decided by load phase and view.
fn placeholder(feed: &FeedState) -> String {
    if feed.is_loading() {
        return "Loading headlines...".to_string();
    }
    if let FeedPhase::Failed(message) = &feed.phase {
        return message.clone();
    }
    match feed.view {
        ViewMode::Normal => "No news found for selected date and category".to_string(),
        ViewMode::BookmarksOnly => "No saved news found".to_string(),
    }
}

/// Build the two-line list entry for one headline.
fn headline_item(
    app: &App,
    headline: &Headline,
    selected: bool,
    width: usize,
) -> ListItem<'static> {
    // Star state is read live from the bookmark set, so a row that stays
    // visible in the saved view still shows its current state.
    let star = if app.bookmarks.contains(&headline.id) {
        Span::styled("★ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("☆ ", Style::default().fg(Color::DarkGray))
    };

    let (title_style, meta_style) = if selected {
        (
            Style::default().bg(Color::DarkGray).fg(Color::White),
            Style::default().bg(Color::DarkGray).fg(Color::Gray),
        )
    } else {
        (Style::default(), Style::default().fg(Color::DarkGray))
    };

    let text_width = width.saturating_sub(2);
    let title = truncate_to_width(&headline.title, text_width).into_owned();

    let with_date = app.feed.view == ViewMode::BookmarksOnly;
    let time = format_published(headline.published, app.tz, with_date);
    let meta = if time.is_empty() {
        format!("{} · {}", headline.category, headline.description)
    } else {
        format!("{}  {} · {}", time, headline.category, headline.description)
    };
    let meta = truncate_to_width(&meta, text_width).into_owned();

    ListItem::new(vec![
        Line::from(vec![star, Span::styled(title, title_style)]),
        Line::from(Span::styled(format!("  {}", meta), meta_style)),
    ])
}

/// Render the headline list panel.
pub fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if app.feed.visible.is_empty() {
        vec![ListItem::new(placeholder(&app.feed))]
    } else {
        app.feed
            .visible
            .iter()
            .enumerate()
            .map(|(i, headline)| headline_item(app, headline, i == app.selected, width))
            .collect()
    };

    let title = match app.feed.view {
        ViewMode::Normal => format!(" Headlines ({}) ", app.feed.visible.len()),
        ViewMode::BookmarksOnly => format!(" Saved ({}) ", app.feed.visible.len()),
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default());

    // Stateful render keeps the selected row scrolled into view
    let selected = (!app.feed.visible.is_empty()).then_some(app.selected);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DayKey;
    use chrono::{Offset, Utc};

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    // 2024-01-15 12:00:00 UTC
    const NOON: i64 = 1705320000;

    #[test]
    fn test_format_published_wall_clock() {
        assert_eq!(format_published(Some(NOON), utc(), false), "12:00");
        assert_eq!(format_published(Some(NOON), utc(), true), "Jan 15 12:00");
    }

    #[test]
    fn test_format_published_respects_offset() {
        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_published(Some(NOON), east, false), "21:00");
    }

    #[test]
    fn test_format_published_absent_or_out_of_range() {
        assert_eq!(format_published(None, utc(), false), "");
        assert_eq!(format_published(Some(i64::MAX), utc(), true), "");
    }

    #[test]
    fn test_placeholder_by_phase_and_view() {
        let mut feed = FeedState::new(DayKey::parse("2024-01-15").unwrap());
        assert_eq!(placeholder(&feed), "Loading headlines...");

        feed.phase = FeedPhase::Ready;
        assert_eq!(
            placeholder(&feed),
            "No news found for selected date and category"
        );

        feed.view = ViewMode::BookmarksOnly;
        assert_eq!(placeholder(&feed), "No saved news found");

        feed.phase = FeedPhase::Failed("Auth failed: HTTP error: status 401".to_string());
        assert_eq!(placeholder(&feed), "Auth failed: HTTP error: status 401");
    }
}
