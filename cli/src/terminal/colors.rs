use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 190, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const HOST: Color = Color::TrueColor { r: 140, g: 230, b: 140 };
pub const SWITCH: Color = Color::TrueColor { r: 200, g: 150, b: 255 };
pub const GUID: Color = Color::TrueColor { r: 170, g: 170, b: 170 };
pub const PORT: Color = Color::TrueColor { r: 255, g: 220, b: 120 };
