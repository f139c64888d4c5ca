use crate::palette::HexColor;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Chrome {
    pub bg: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub border: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub success: Color,
    pub error: Color,
}

impl Chrome {
    pub const MONO: Self = Self {
        bg: Color::Rgb(0, 0, 0),
        fg_primary: Color::Rgb(255, 255, 255),
        fg_secondary: Color::Rgb(136, 136, 136),
        border: Color::Rgb(64, 64, 64),
        button_bg: Color::Rgb(37, 99, 235),   // #2563eb
        button_fg: Color::Rgb(255, 255, 255),
        success: Color::Rgb(255, 255, 255),
        error: Color::Rgb(248, 113, 113),     // #f87171
    };
}

/// Title gradient stops: red, amber, indigo.
const TITLE_STOPS: [HexColor; 3] = [
    HexColor::new(0xf8, 0x71, 0x71),
    HexColor::new(0xf5, 0x9e, 0x0b),
    HexColor::new(0x81, 0x8c, 0xf8),
];

/// Color at position `t` (0.0..=1.0) along the title gradient.
pub fn title_gradient(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0) * (TITLE_STOPS.len() - 1) as f32;
    let i = (t.floor() as usize).min(TITLE_STOPS.len() - 2);
    let f = t - i as f32;
    let (a, b) = (TITLE_STOPS[i], TITLE_STOPS[i + 1]);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
    Color::Rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}
