use ratatui::style::Color;

pub const ACCENT_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const PRIMARY: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const PRIMARY_FOREGROUND: Color = Color::Rgb(0x17, 0x17, 0x17);
pub const SECONDARY: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const DESTRUCTIVE: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FOCUS_RING: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const RATING_STAR: Color = Color::Rgb(0xea, 0xb3, 0x08);
