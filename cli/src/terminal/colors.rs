use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::BrightBlack;
pub const WARNING: Color = Color::Yellow;
