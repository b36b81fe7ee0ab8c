use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub bright: Color,  // Prompt and command echo
    pub dim: Color,     // Secondary text, separators
    pub accent: Color,  // Headings
    pub error: Color,   // Red
    pub success: Color, // Status dots
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color, // Status bar background
}

/// Green-on-black palette of hacker mode
pub const MATRIX_THEME: Theme = Theme {
    bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(34, 197, 94),        // green-500
    bright: Color::Rgb(134, 239, 172),  // green-300
    dim: Color::Rgb(21, 128, 61),       // green-700
    accent: Color::Rgb(74, 222, 128),   // green-400
    error: Color::Rgb(239, 68, 68),     // red-500
    success: Color::Rgb(34, 197, 94),
    border_focused: Color::Rgb(74, 222, 128),
    border_normal: Color::Rgb(20, 83, 45), // green-900
    bar_bg: Color::Rgb(5, 46, 22),         // green-950
};

/// Warm beige palette of the professional view
pub const PROFESSIONAL_THEME: Theme = Theme {
    bg: Color::Rgb(28, 25, 23),
    fg: Color::Rgb(231, 229, 228),
    bright: Color::Rgb(245, 222, 179), // wheat
    dim: Color::Rgb(120, 113, 108),
    accent: Color::Rgb(250, 179, 135),
    error: Color::Rgb(243, 139, 168),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(245, 222, 179),
    border_normal: Color::Rgb(87, 83, 78),
    bar_bg: Color::Rgb(41, 37, 36),
};
