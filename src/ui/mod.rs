//! Terminal User Interface module.
//!
//! This module provides the TUI for the headline browser, including:
//! - Main event loop (`run`)
//! - Input handling for the list and its overlays
//! - Rendering for the header, headline list, and status bar
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Top-level layout
//! - `headlines` - Day header and headline list widgets
//! - `status` - Status bar widget
//! - `help` - Help overlay
//! - `goto_date` - Go-to-date overlay

// Submodules for UI components
mod events;
mod goto_date;
mod headlines;
mod help;
mod input;
mod loop_runner;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
