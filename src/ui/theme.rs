use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TOGGLE_ON: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const TOGGLE_OFF: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
