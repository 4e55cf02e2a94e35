//! Input handling for the TUI.
//!
//! This module processes keyboard input, routed by which surface is on
//! top: the help overlay first, then the go-to-date overlay, then the
//! headline list.

use crate::app::{App, AppEvent};
use crate::feed::{can_go_forward, clamp_to_today, is_today, DayKey, ViewMode};
use crate::store::MISSING_FIELD;
use crate::util::validate_open_url;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::Action;

/// Shown when forward day navigation is refused at the current day.
const ERR_FUTURE_DATE: &str = "Cannot navigate to future dates";

/// Shown when the selected headline carries no usable link.
const ERR_NO_LINK: &str = "No link for this headline";

/// Maximum length of the go-to-date input (YYYY-MM-DD).
const GOTO_INPUT_MAX: usize = 10;

/// Main input dispatch function.
///
/// Routes input to the appropriate handler based on which overlay, if
/// any, currently captures the keyboard.
pub(super) async fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Ctrl+C quits no matter what is on screen
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Action::Quit);
    }

    // Help overlay captures all keys when visible
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    // Go-to-date overlay captures all keys when open
    if app.goto_input.is_some() {
        return Ok(handle_goto_input(app, code));
    }

    handle_feed_input(app, code, event_tx).await
}

/// Handle input while the help overlay is visible.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    if matches!(
        code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.show_help = false;
    }
    Action::Continue
}

/// Handle input while the go-to-date overlay is open.
///
/// Accepts digits and dashes up to `YYYY-MM-DD` length. Enter parses and
/// jumps; an unparseable date leaves the overlay open so the input can be
/// fixed. Dates past today land on today instead.
fn handle_goto_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc => {
            app.goto_input = None;
        }
        KeyCode::Enter => {
            let raw = app.goto_input.take().unwrap_or_default();
            match DayKey::parse(raw.trim()) {
                Some(day) => {
                    let target = clamp_to_today(day, app.today());
                    if target != day {
                        app.set_status("Future date, showing today");
                    }
                    app.select_day(target);
                }
                None => {
                    app.goto_input = Some(raw);
                    app.set_status("Invalid date (use YYYY-MM-DD)");
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.goto_input.as_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            if let Some(input) = app.goto_input.as_mut() {
                if input.len() < GOTO_INPUT_MAX {
                    input.push(c);
                }
            }
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input on the headline list.
async fn handle_feed_input(
    app: &mut App,
    code: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Esc => {
            // Esc backs out of the saved view; elsewhere it is a no-op
            if app.feed.view == ViewMode::BookmarksOnly {
                app.toggle_saved_view();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('h') | KeyCode::Left => {
            app.select_day(app.feed.day.pred());
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if can_go_forward(app.feed.day, app.today()) {
                app.select_day(app.feed.day.succ());
            } else {
                app.set_status(ERR_FUTURE_DATE);
            }
        }
        KeyCode::Char('t') => {
            let today = app.today();
            if !is_today(app.feed.day, today) {
                app.select_day(today);
            }
        }
        KeyCode::Char('g') => app.goto_input = Some(String::new()),
        KeyCode::Char('c') => app.cycle_category(1),
        KeyCode::Char('C') => app.cycle_category(-1),
        KeyCode::Char('b') => app.toggle_selected_bookmark().await,
        KeyCode::Char('s') => app.toggle_saved_view(),
        KeyCode::Char('r') => {
            app.spawn_feed_load(event_tx);
            app.set_status("Refreshing headlines...");
        }
        KeyCode::Char('o') | KeyCode::Enter => open_selected_link(app),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
    Ok(Action::Continue)
}

/// Open the selected headline's link in the system browser.
///
/// Links come from untrusted store documents, so they pass scheme
/// validation before reaching `open::that`.
fn open_selected_link(app: &mut App) {
    let Some(headline) = app.selected_headline() else {
        return;
    };
    if &*headline.link == MISSING_FIELD {
        app.set_status(ERR_NO_LINK);
        return;
    }
    let link = Arc::clone(&headline.link);
    match validate_open_url(&link) {
        Ok(_) => {
            if let Err(e) = open::that(&*link) {
                app.set_status(format!("Failed to open browser: {}", e));
            }
        }
        Err(e) => app.set_status(format!("Cannot open link: {}", e)),
    }
}
