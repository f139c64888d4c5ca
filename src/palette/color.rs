//! RGB color value with a `#rrggbb` display form.

use super::PaletteError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw each channel independently and uniformly from `[0, 256)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0..=u8::MAX),
            g: rng.random_range(0..=u8::MAX),
            b: rng.random_range(0..=u8::MAX),
        }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceived brightness in `0.0..=1.0` (ITU-R BT.601 weights).
    pub fn luminance(self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    pub fn is_light(self) -> bool {
        self.luminance() > 0.55
    }

    /// Black on light colors, white on dark ones.
    pub fn contrast(self) -> HexColor {
        if self.is_light() {
            HexColor::new(0, 0, 0)
        } else {
            HexColor::new(255, 255, 255)
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.channels()))
    }
}

impl FromStr for HexColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 {
            return Err(PaletteError::InvalidColor(s.to_string()));
        }
        let mut buf = [0u8; 3];
        hex::decode_to_slice(digits, &mut buf)
            .map_err(|_| PaletteError::InvalidColor(s.to_string()))?;
        Ok(Self::new(buf[0], buf[1], buf[2]))
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = PaletteError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HexColor> for ratatui::style::Color {
    fn from(c: HexColor) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}
