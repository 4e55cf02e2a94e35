//! Utility functions for common operations.
//!
//! - **Link validation**: scheme checks before handing URLs to the browser
//! - **Text processing**: Unicode-aware width calculation, truncation, and
//!   control character stripping for untrusted store text

mod links;
mod text;

pub use links::{validate_open_url, LinkError};
pub use text::{display_width, strip_control_chars, truncate_to_width};
