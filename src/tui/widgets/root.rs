//! Root layout widget
//!
//! ┌─────────────────────────────────────────────────────┐
//! │ COLORAID  5 colors, 1 locked        [ Download ]    │
//! ├──────────┬──────────┬──────────┬──────────┬─────────┤
//! │ 1        │ 2        │ 3        │ 4        │ 5       │
//! │ #a1b2c3  │ #0f0f0f  │ #ffeedd  │ #123456  │ #abcdef │
//! │  lock    │  lock    │  lock    │  lock    │  lock   │
//! ├──────────┴──────────┴──────────┴──────────┴─────────┤
//! │ key hints                            toast          │
//! └─────────────────────────────────────────────────────┘

use crate::app::state::AppState;
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::{footer, header, plates};

pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let theme = get_theme(cfg);
    let root = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.chrome.bg)), root);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + download
            Constraint::Min(3),    // Plates
            Constraint::Length(1), // Hints + toast
        ])
        .split(root);

    header::render(frame, &theme, state, rows[0]);
    plates::render(frame, &theme, state, rows[1]);
    footer::render(frame, &theme, state, rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::InputEvent;
    use crate::app::actions::Action;
    use crate::app::state::HitTarget;
    use crate::input::map_input_to_action;
    use crate::palette::{HexColor, Palette};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn sample_state() -> AppState {
        let palette = Palette::from_colors([
            HexColor::new(0xa1, 0xb2, 0xc3),
            HexColor::new(0x00, 0x00, 0x00),
            HexColor::new(0xff, 0xff, 0xff),
            HexColor::new(0x12, 0x34, 0x56),
            HexColor::new(0xab, 0xcd, 0xef),
        ]);
        AppState::new(palette.toggle_lock(2).unwrap(), Duration::from_secs(3))
    }

    #[test]
    fn test_render_records_hit_areas() {
        let cfg = Config::default();
        let mut state = sample_state();
        state.toast_success("Copied to clipboard!");
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal.draw(|f| render(f, &cfg, &mut state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("#a1b2c3"));
        assert!(text.contains("#abcdef"));
        assert!(text.contains("Copied to clipboard!"));
        assert!(text.contains("Download"));
        assert!(text.contains("1 locked"));

        assert_eq!(state.hit.plates.len(), 5);
        let label = state.hit.plates[3].label;
        assert_eq!(state.hit.target_at(label.x, label.y), Some(HitTarget::Label(3)));

        let click = InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: state.hit.plates[2].lock.x,
            row: state.hit.plates[2].lock.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_input_to_action(&state, click), Some(Action::ToggleLock(2)));

        let dl = state.hit.download;
        assert_eq!(state.hit.target_at(dl.x, dl.y), Some(HitTarget::Download));
    }

    #[test]
    fn test_narrow_terminal_stacks_plates() {
        let cfg = Config::default();
        let mut state = sample_state();
        let mut terminal = Terminal::new(TestBackend::new(30, 30)).unwrap();

        terminal.draw(|f| render(f, &cfg, &mut state)).unwrap();

        let text = screen_text(&terminal);
        for color in state.palette.colors() {
            assert!(text.contains(&color.to_string()), "{color} not drawn");
        }
        let plates = &state.hit.plates;
        assert_eq!(plates.len(), 5);
        for pair in plates.windows(2) {
            assert_eq!(pair[0].plate.x, pair[1].plate.x);
            assert!(pair[0].plate.bottom() <= pair[1].plate.y);
        }
        for (i, hb) in plates.iter().enumerate() {
            assert_eq!(hb.plate.width, 30);
            assert_eq!(state.hit.target_at(hb.label.x, hb.label.y), Some(HitTarget::Label(i)));
            assert_eq!(state.hit.target_at(hb.lock.x, hb.lock.y), Some(HitTarget::Lock(i)));
        }
    }

    #[test]
    fn test_render_tiny_terminal() {
        let cfg = Config::default();
        let mut state = sample_state();
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal.draw(|f| render(f, &cfg, &mut state)).unwrap();
        assert_eq!(state.hit.plates.len(), 5);
    }
}
