use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, HitTarget};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

/// Live terminal input subscription. Dropping it stops the poller, so at
/// most one reader exists per handle and none outlives the app loop.
pub struct InputHandle {
    stop: Arc<AtomicBool>,
}

impl Drop for InputHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Consecutive poll/read failures tolerated before the poller gives up.
const MAX_CONSECUTIVE_FAILURES: u32 = 20;
const FAILURE_BACKOFF: Duration = Duration::from_millis(50);

/// Counts back-to-back terminal errors. Logs only the first of a run.
#[derive(Debug, Default)]
struct FailureBudget {
    consecutive: u32,
}

impl FailureBudget {
    /// Records a failure; false once the budget is spent.
    fn fail(&mut self, what: &str, err: &std::io::Error) -> bool {
        if self.consecutive == 0 {
            tracing::warn!("terminal {what} failed: {err}");
        }
        self.consecutive += 1;
        self.consecutive < MAX_CONSECUTIVE_FAILURES
    }

    fn reset(&mut self) {
        self.consecutive = 0;
    }
}

/// Terminal events the app cares about. Key releases and auto-repeats are
/// dropped; terminals only report those once keyboard enhancement is on
/// (see `TerminalGuard::enter`).
fn translate(ev: CtEvent) -> Option<InputEvent> {
    match ev {
        CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(InputEvent::Key(k)),
        CtEvent::Mouse(m) => Some(InputEvent::Mouse(m)),
        CtEvent::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

pub fn spawn_input_task(tx: mpsc::Sender<Event>) -> InputHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let stopped = stop.clone();
    tokio::task::spawn_blocking(move || {
        let mut budget = FailureBudget::default();
        while !stopped.load(Ordering::Relaxed) {
            let raw = match event::poll(Duration::from_millis(100)) {
                Ok(false) => {
                    budget.reset();
                    continue;
                }
                Ok(true) => event::read(),
                Err(e) => Err(e),
            };
            let ev = match raw {
                Ok(ev) => {
                    budget.reset();
                    ev
                }
                Err(e) => {
                    if !budget.fail("read", &e) {
                        tracing::error!("giving up on terminal input");
                        break;
                    }
                    std::thread::sleep(FAILURE_BACKOFF);
                    continue;
                }
            };
            let Some(ev) = translate(ev) else {
                continue;
            };
            if tx.blocking_send(Event::Input(ev)).is_err() {
                break;
            }
        }
        tracing::debug!("input task stopped");
    });
    InputHandle { stop }
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match state.hit.target_at(m.column, m.row)? {
                    HitTarget::Label(i) => Some(Action::CopyColor(i)),
                    HitTarget::Lock(i) => Some(Action::ToggleLock(i)),
                    HitTarget::Plate(i) => Some(Action::Select(i)),
                    HitTarget::Download => Some(Action::Export),
                }
            }
            MouseEventKind::ScrollUp => Some(Action::SelectPrev),
            MouseEventKind::ScrollDown => Some(Action::SelectNext),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        KeyCode::Char(' ') => Some(Action::Regenerate),

        // Selection - vim style
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectPrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectNext),

        // Locks: `t` on the selection, digits by position
        KeyCode::Char('t') => Some(Action::ToggleSelectedLock),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            (index < state.palette.len()).then_some(Action::ToggleLock(index))
        }

        KeyCode::Enter | KeyCode::Char('y') => Some(Action::CopySelected),
        KeyCode::Char('d') => Some(Action::Export),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PlateHitbox;
    use crate::palette::Palette;
    use crossterm::event::MouseEvent;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        AppState::new(Palette::random(5), Duration::from_secs(3))
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_space_regenerates() {
        assert_eq!(
            map_input_to_action(&state(), key(KeyCode::Char(' '))),
            Some(Action::Regenerate)
        );
    }

    #[test]
    fn test_only_key_presses_pass() {
        let press = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(matches!(translate(CtEvent::Key(press)), Some(InputEvent::Key(_))));

        let mut repeat = press;
        repeat.kind = KeyEventKind::Repeat;
        assert!(translate(CtEvent::Key(repeat)).is_none());

        let mut release = press;
        release.kind = KeyEventKind::Release;
        assert!(translate(CtEvent::Key(release)).is_none());

        assert!(matches!(translate(CtEvent::Resize(80, 24)), Some(InputEvent::Resize)));
        assert!(translate(CtEvent::FocusGained).is_none());
    }

    #[test]
    fn test_failure_budget_runs_out_and_resets() {
        let err = std::io::Error::other("not a tty");
        let mut budget = FailureBudget::default();
        for _ in 1..MAX_CONSECUTIVE_FAILURES {
            assert!(budget.fail("read", &err));
        }
        assert!(!budget.fail("read", &err));

        budget.reset();
        assert!(budget.fail("read", &err));
    }

    #[test]
    fn test_digit_toggles_within_palette() {
        let s = state();
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('1'))), Some(Action::ToggleLock(0)));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('5'))), Some(Action::ToggleLock(4)));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('6'))), None);
    }

    #[test]
    fn test_quit_keys() {
        let s = state();
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('q'))), Some(Action::Quit));
        let ctrl_c = InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_input_to_action(&s, ctrl_c), Some(Action::Quit));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_clicks_use_hit_areas() {
        let mut s = state();
        s.hit.plates = vec![
            PlateHitbox {
                plate: Rect::new(0, 3, 10, 10),
                label: Rect::new(1, 7, 7, 1),
                lock: Rect::new(4, 9, 1, 1),
            },
            PlateHitbox {
                plate: Rect::new(10, 3, 10, 10),
                label: Rect::new(11, 7, 7, 1),
                lock: Rect::new(14, 9, 1, 1),
            },
        ];
        s.hit.download = Rect::new(40, 1, 14, 1);

        assert_eq!(map_input_to_action(&s, click(12, 7)), Some(Action::CopyColor(1)));
        assert_eq!(map_input_to_action(&s, click(4, 9)), Some(Action::ToggleLock(0)));
        assert_eq!(map_input_to_action(&s, click(15, 12)), Some(Action::Select(1)));
        assert_eq!(map_input_to_action(&s, click(45, 1)), Some(Action::Export));
        assert_eq!(map_input_to_action(&s, click(70, 0)), None);
    }
}
