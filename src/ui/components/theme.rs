//! Color palette shared by every component.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_ERROR: Color = Color::Red;

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
