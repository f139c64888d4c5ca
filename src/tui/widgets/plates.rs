//! The palette itself: one plate per swatch, side by side.

use super::centered_row;
use crate::app::state::{AppState, PlateHitbox};
use crate::palette::Swatch;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Narrowest plate that shows `#rrggbb` with padding and borders; below
/// this the plates stack vertically.
const MIN_PLATE_COLUMNS: u16 = 11;

/// Draws the plates and records their click targets in `state.hit`.
pub fn render(frame: &mut Frame, theme: &Theme, state: &mut AppState, area: Rect) {
    let n = state.palette.len();
    if n == 0 || area.is_empty() {
        state.hit.plates.clear();
        return;
    }

    let direction = if area.width / (n as u16) < MIN_PLATE_COLUMNS {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let cols = Layout::default()
        .direction(direction)
        .constraints(vec![Constraint::Ratio(1, n as u32); n])
        .split(area);

    let hitboxes = state
        .palette
        .swatches()
        .iter()
        .zip(cols.iter())
        .enumerate()
        .map(|(i, (swatch, rect))| {
            render_plate(frame, theme, swatch, i, i == state.selected, *rect)
        })
        .collect();
    state.hit.plates = hitboxes;
}

fn render_plate(
    frame: &mut Frame,
    theme: &Theme,
    swatch: &Swatch,
    index: usize,
    selected: bool,
    area: Rect,
) -> PlateHitbox {
    let bg: Color = swatch.color.into();
    let ink: Color = swatch.color.contrast().into();

    // Unselected plates keep an invisible border so content doesn't jump.
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(if selected { ink } else { bg }).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.is_empty() {
        return PlateHitbox {
            plate: area,
            ..PlateHitbox::default()
        };
    }

    let badge = Rect { height: 1, ..inner };
    frame.render_widget(
        Paragraph::new(format!("{}", index + 1))
            .style(Style::default().fg(ink).add_modifier(Modifier::DIM)),
        badge,
    );

    let mid = inner.y + inner.height / 2;
    let text_style = Style::default().fg(ink).bg(bg).add_modifier(Modifier::BOLD);

    let value = swatch.color.to_string();
    let icon = if swatch.locked {
        theme.icons.locked
    } else {
        theme.icons.unlocked
    };
    let icon_line = Line::from(icon);
    let label_width = value.len() as u16 + 2;
    let lock_width = icon_line.width() as u16 + 2;

    // Short (stacked) plates put label and lock side by side on one row.
    let (label, lock) = if inner.height >= 3 {
        (
            centered_row(inner, mid.saturating_sub(1), label_width),
            centered_row(inner, mid + 1, lock_width),
        )
    } else {
        let row = centered_row(inner, mid, label_width + lock_width);
        let label = Rect {
            width: label_width.min(row.width),
            ..row
        };
        let lock = Rect {
            x: label.right(),
            width: row.width.saturating_sub(label.width),
            ..row
        };
        (label, lock)
    };
    frame.render_widget(
        Paragraph::new(value).style(text_style).alignment(Alignment::Center),
        label,
    );
    frame.render_widget(
        Paragraph::new(icon_line).style(text_style).alignment(Alignment::Center),
        lock,
    );

    PlateHitbox {
        plate: area,
        label,
        lock,
    }
}
