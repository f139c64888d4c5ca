//! PNG export of the palette.
//!
//! Each swatch becomes one full-height column with its hex value and a lock
//! glyph drawn in a contrasting color, mirroring what the plates show on
//! screen.

use crate::config::ExportConfig;
use crate::palette::{HexColor, Palette};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: palette is empty")]
    EmptyPalette,
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encode png: {0}")]
    Encode(#[from] image::ImageError),
}

const LOCKED: [&str; 9] = [
    "..###..", ".#...#.", ".#...#.", "#######", "#######", "###.###", "###.###", "#######",
    "#######",
];

const UNLOCKED: [&str; 9] = [
    "...###.", "..#...#", "..#....", "#######", "#######", "###.###", "###.###", "#######",
    "#######",
];

/// 3x5 glyphs for `#` and lowercase hex digits, one bitmask per row.
fn glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'b' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'd' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'f' => [0b111, 0b100, 0b110, 0b100, 0b100],
        '#' => [0b101, 0b111, 0b101, 0b111, 0b101],
        _ => [0; 5],
    }
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Pixel width of `text` in the 3x5 font at `scale`.
fn label_width(text: &str, scale: u32) -> u32 {
    (text.chars().count() as u32 * 4 * scale).saturating_sub(scale)
}

fn draw_label(
    img: &mut RgbImage,
    text: &str,
    center_x: u32,
    top: u32,
    scale: u32,
    color: Rgb<u8>,
) {
    let advance = 4 * scale;
    let width = label_width(text, scale);
    let mut x = center_x.saturating_sub(width / 2);
    for c in text.chars() {
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..3u32 {
                if bits & (0b100 >> col) != 0 {
                    fill_rect(img, x + col * scale, top + row as u32 * scale, scale, scale, color);
                }
            }
        }
        x += advance;
    }
}

fn draw_lock(
    img: &mut RgbImage,
    locked: bool,
    center_x: u32,
    top: u32,
    scale: u32,
    color: Rgb<u8>,
) {
    let bitmap = if locked { &LOCKED } else { &UNLOCKED };
    let left = center_x.saturating_sub(7 * scale / 2);
    for (row, line) in bitmap.iter().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            if cell == b'#' {
                fill_rect(
                    img,
                    left + col as u32 * scale,
                    top + row as u32 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

fn rgb(c: HexColor) -> Rgb<u8> {
    Rgb(c.channels())
}

/// Rasterize `palette` into `plate_width * len` by `plate_height` pixels.
/// Plates too narrow for their hex label are left unlabeled.
pub fn render(
    palette: &Palette,
    plate_width: u32,
    plate_height: u32,
) -> Result<RgbImage, ExportError> {
    if palette.is_empty() {
        return Err(ExportError::EmptyPalette);
    }
    let width = plate_width * palette.len() as u32;
    let mut img = RgbImage::new(width, plate_height);

    let text_scale = (plate_width / 40).max(1);
    let lock_scale = (plate_width / 48).max(1);
    let label_top = plate_height / 2 - (5 * text_scale).min(plate_height / 2);
    let lock_top = plate_height / 2 + 3 * text_scale;

    for (i, swatch) in palette.swatches().iter().enumerate() {
        let x = i as u32 * plate_width;
        let center = x + plate_width / 2;
        let ink = rgb(swatch.color.contrast());
        fill_rect(&mut img, x, 0, plate_width, plate_height, rgb(swatch.color));
        let label = swatch.color.to_string();
        if label_width(&label, text_scale) <= plate_width {
            draw_label(&mut img, &label, center, label_top, text_scale, ink);
        }
        draw_lock(&mut img, swatch.locked, center, lock_top, lock_scale, ink);
    }
    Ok(img)
}

/// `dir/file_name`, or the first free `stem (N).ext` next to it.
pub fn next_free_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let ext = name.extension().map(|e| e.to_string_lossy().into_owned());
    (1u32..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Render and write the palette into the configured export directory.
/// Returns the path actually written.
pub fn export_png(palette: &Palette, cfg: &ExportConfig) -> Result<PathBuf, ExportError> {
    let img = render(palette, cfg.plate_width, cfg.plate_height)?;
    std::fs::create_dir_all(&cfg.dir).map_err(|source| ExportError::Io {
        path: cfg.dir.clone(),
        source,
    })?;
    let path = next_free_path(&cfg.dir, &cfg.file_name);
    save_png(&img, &path)?;
    tracing::info!(path = %path.display(), swatches = palette.len(), "palette exported");
    Ok(path)
}
