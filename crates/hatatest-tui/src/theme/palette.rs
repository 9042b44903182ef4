//! Color palette

use ratatui::style::Color;

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(0xd8, 0xde, 0xe9);
pub const TEXT_SECONDARY: Color = Color::Rgb(0xa3, 0xab, 0xb8);
pub const TEXT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TEXT_BRIGHT: Color = Color::Rgb(0xf4, 0xf6, 0xfa);

// Borders
pub const BORDER_DIM: Color = Color::Rgb(0x3b, 0x42, 0x52);
pub const BORDER_ACTIVE: Color = Color::Rgb(0x88, 0xc0, 0xd0);

// Accent
pub const ACCENT: Color = Color::Rgb(0x88, 0xc0, 0xd0);
pub const CONTRAST_FG: Color = Color::Rgb(0x1b, 0x1f, 0x27);

// Status
pub const STATUS_GREEN: Color = Color::Rgb(0xa3, 0xbe, 0x8c);
pub const STATUS_RED: Color = Color::Rgb(0xbf, 0x61, 0x6a);
pub const STATUS_YELLOW: Color = Color::Rgb(0xeb, 0xcb, 0x8b);

// Overlays
pub const POPUP_BG: Color = Color::Rgb(0x2a, 0x2f, 0x3a);
