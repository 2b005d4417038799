//! Static asset constants (CSS and JavaScript).

/// Stylesheet shared by both page variants.
pub const CSS: &str = include_str!("styles.css");

/// Smooth-scroll handlers for the perspective page's hero controls.
pub const SCROLL_JS: &str = include_str!("scroll.js");
