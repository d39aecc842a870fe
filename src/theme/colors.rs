//! Color constants for the two themes.

#![allow(dead_code)]

// === LIGHT ===
pub const LIGHT_BG: &str = "#f7f8fa";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_BORDER: &str = "#e3e6ea";
pub const LIGHT_TEXT: &str = "#1c2330";
pub const LIGHT_TEXT_MUTED: &str = "rgba(28, 35, 48, 0.65)";

// === DARK ===
pub const DARK_BG: &str = "#10141a";
pub const DARK_SURFACE: &str = "#171c24";
pub const DARK_BORDER: &str = "#262d38";
pub const DARK_TEXT: &str = "#eef1f5";
pub const DARK_TEXT_MUTED: &str = "rgba(238, 241, 245, 0.65)";

// === ACCENT ===
pub const ACCENT: &str = "#3b82f6";
pub const ACCENT_HOVER: &str = "#2563eb";
pub const ACCENT_SOFT: &str = "rgba(59, 130, 246, 0.12)";
