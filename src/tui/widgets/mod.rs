pub mod footer;
pub mod header;
pub mod plates;
pub mod root;

use ratatui::layout::Rect;

/// One-row rect of `width` centered horizontally in `area` at row `y`.
/// Empty when `y` falls outside `area`.
pub(crate) fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    if area.width == 0 || y < area.y || y >= area.bottom() {
        return Rect::default();
    }
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, 1)
}

pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_row() {
        let area = Rect::new(10, 5, 20, 4);
        assert_eq!(centered_row(area, 6, 8), Rect::new(16, 6, 8, 1));
        assert_eq!(centered_row(area, 6, 50), Rect::new(10, 6, 20, 1));
        assert_eq!(centered_row(area, 9, 8), Rect::default());
        assert_eq!(centered_row(area, 4, 8), Rect::default());
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Copied to clipboard!", 40), "Copied to clipboard!");
        assert_eq!(truncate_str("Saved /tmp/color-palette.png", 10), "Saved /...");
        assert_eq!(truncate_str("abc", 0), "");
    }
}
