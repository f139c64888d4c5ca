//! Palette state: a fixed-length row of swatches, each with its own lock.
//!
//! Every mutation returns a new [`Palette`]; the caller decides when to
//! commit it. Colors and locks live in one record per slot so they cannot
//! drift out of step.

mod color;

pub use color::HexColor;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_SIZE: usize = 5;
pub const MAX_SIZE: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("swatch index {index} out of bounds (palette has {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub color: HexColor,
    pub locked: bool,
}

impl Swatch {
    pub const fn unlocked(color: HexColor) -> Self {
        Self { color, locked: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

/// One random color from the thread-local generator. Not suitable for
/// anything security related.
pub fn generate_color() -> HexColor {
    HexColor::random(&mut rand::rng())
}

impl Palette {
    /// `size` random colors, none locked.
    pub fn random(size: usize) -> Self {
        Self {
            swatches: (0..size).map(|_| Swatch::unlocked(generate_color())).collect(),
        }
    }

    pub fn random_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let swatches = (0..size)
            .map(|_| Swatch::unlocked(HexColor::random(rng)))
            .collect();
        Self { swatches }
    }

    pub fn from_swatches(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }

    pub fn from_colors(colors: impl IntoIterator<Item = HexColor>) -> Self {
        Self::from_swatches(colors.into_iter().map(Swatch::unlocked).collect())
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn colors(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.swatches.iter().map(|s| s.color)
    }

    pub fn locks(&self) -> impl Iterator<Item = bool> + '_ {
        self.swatches.iter().map(|s| s.locked)
    }

    pub fn locked_count(&self) -> usize {
        self.locks().filter(|l| *l).count()
    }

    /// New palette where every unlocked slot gets a fresh color. Locked
    /// slots and all lock flags carry over unchanged.
    pub fn regenerate(&self) -> Palette {
        self.regenerate_with(&mut rand::rng())
    }

    pub fn regenerate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Palette {
        let swatches = self
            .swatches
            .iter()
            .map(|s| {
                if s.locked {
                    *s
                } else {
                    Swatch::unlocked(HexColor::random(rng))
                }
            })
            .collect();
        Palette { swatches }
    }

    /// Copy of this palette with the lock at `index` flipped.
    pub fn toggle_lock(&self, index: usize) -> Result<Palette, PaletteError> {
        if index >= self.swatches.len() {
            return Err(PaletteError::IndexOutOfBounds {
                index,
                len: self.swatches.len(),
            });
        }
        let mut swatches = self.swatches.clone();
        swatches[index].locked = !swatches[index].locked;
        Ok(Palette { swatches })
    }
}
