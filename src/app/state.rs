use crate::palette::Palette;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Clickable regions of one plate, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlateHitbox {
    pub plate: Rect,
    pub label: Rect,
    pub lock: Rect,
}

/// Written by the renderer each frame, read by the mouse mapper.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub plates: Vec<PlateHitbox>,
    pub download: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Label(usize),
    Lock(usize),
    Plate(usize),
    Download,
}

impl HitAreas {
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if self.download.contains(pos) {
            return Some(HitTarget::Download);
        }
        for (i, hb) in self.plates.iter().enumerate() {
            if hb.label.contains(pos) {
                return Some(HitTarget::Label(i));
            }
            if hb.lock.contains(pos) {
                return Some(HitTarget::Lock(i));
            }
            if hb.plate.contains(pos) {
                return Some(HitTarget::Plate(i));
            }
        }
        None
    }
}

pub struct AppState {
    pub should_quit: bool,

    pub palette: Palette,
    pub selected: usize,

    pub exporting: bool,

    // Toast notification
    pub toast: Option<Toast>,
    pub toast_ttl: Duration,

    pub hit: HitAreas,
}

impl AppState {
    pub fn new(palette: Palette, toast_ttl: Duration) -> Self {
        Self {
            should_quit: false,
            palette,
            selected: 0,
            exporting: false,
            toast: None,
            toast_ttl,
            hit: HitAreas::default(),
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.palette.is_empty() {
            self.selected = (self.selected + 1).min(self.palette.len() - 1);
        }
    }

    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::success(message, self.toast_ttl));
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message, self.toast_ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let t = Toast::success("hi", Duration::from_secs(60));
        assert!(!t.is_expired());
        let t = Toast::error("bye", Duration::ZERO);
        assert!(t.is_expired());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = AppState::new(Palette::random(3), Duration::from_secs(3));
        state.select_prev();
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_hit_targets() {
        let hit = HitAreas {
            plates: vec![PlateHitbox {
                plate: Rect::new(0, 3, 20, 10),
                label: Rect::new(6, 7, 9, 1),
                lock: Rect::new(9, 9, 3, 1),
            }],
            download: Rect::new(60, 1, 14, 1),
        };
        assert_eq!(hit.target_at(8, 7), Some(HitTarget::Label(0)));
        assert_eq!(hit.target_at(10, 9), Some(HitTarget::Lock(0)));
        assert_eq!(hit.target_at(1, 4), Some(HitTarget::Plate(0)));
        assert_eq!(hit.target_at(61, 1), Some(HitTarget::Download));
        assert_eq!(hit.target_at(40, 0), None);
    }
}
