pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::export;
use crate::input;
use crate::palette::Palette;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, ExportEvent};
use state::AppState;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(cfg: Config, clipboard: Box<dyn Clipboard>) -> Self {
        let palette = Palette::random(cfg.palette.size);
        let state = AppState::new(palette, Duration::from_secs(cfg.ui.toast_secs));
        tracing::info!(size = cfg.palette.size, "palette initialized");
        Self {
            cfg,
            state,
            clipboard,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        // Unsubscribes from terminal input when dropped at the end of run().
        let _input = input::spawn_input_task(tx.clone());

        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Export(ee) => self.handle_export(ee, &tx),
                Event::ToastExpired => {}
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::CopyColor(index) => self.copy_color(index, tx),
            Action::CopySelected => self.copy_color(self.state.selected, tx),
            Action::Export => self.spawn_export(tx),
            other => self.reduce(other),
        }
    }

    /// Pure state transitions; no side effects beyond `self.state`.
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Resize => {}
            Action::SelectPrev => self.state.select_prev(),
            Action::SelectNext => self.state.select_next(),
            Action::Select(index) => {
                if index < self.state.palette.len() {
                    self.state.selected = index;
                }
            }
            Action::Regenerate => {
                self.state.palette = self.state.palette.regenerate();
                tracing::debug!(
                    locked = self.state.palette.locked_count(),
                    "palette regenerated"
                );
            }
            Action::ToggleLock(index) => self.toggle_lock(index),
            Action::ToggleSelectedLock => self.toggle_lock(self.state.selected),
            Action::CopyColor(_) | Action::CopySelected | Action::Export => {}
        }
    }

    fn toggle_lock(&mut self, index: usize) {
        match self.state.palette.toggle_lock(index) {
            Ok(next) => {
                self.state.palette = next;
                self.state.selected = index;
            }
            Err(e) => tracing::warn!("toggle lock rejected: {e}"),
        }
    }

    fn copy_color(&mut self, index: usize, tx: &mpsc::Sender<Event>) {
        let Some(swatch) = self.state.palette.get(index) else {
            tracing::warn!(index, "copy of missing swatch ignored");
            return;
        };
        let text = swatch.color.to_string();
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                tracing::debug!(color = %text, "copied to clipboard");
                self.state.toast_success("Copied to clipboard!");
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e:#}");
                self.state.toast_error(format!("Clipboard unavailable: {e}"));
            }
        }
        self.schedule_toast_expiry(tx);
    }

    fn spawn_export(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.exporting {
            self.state.toast_error("Export already in progress");
            self.schedule_toast_expiry(tx);
            return;
        }
        self.state.exporting = true;

        let palette = self.state.palette.clone();
        let cfg = self.cfg.export.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || export::export_png(&palette, &cfg)).await;
            let ev = match result {
                Ok(Ok(path)) => ExportEvent::Saved(path),
                Ok(Err(e)) => ExportEvent::Failed(e.to_string()),
                Err(e) => ExportEvent::Failed(format!("export task: {e}")),
            };
            let _ = tx.send(Event::Export(ev)).await;
        });
    }

    fn handle_export(&mut self, ev: ExportEvent, tx: &mpsc::Sender<Event>) {
        self.state.exporting = false;
        match ev {
            ExportEvent::Saved(path) => {
                self.state.toast_success(format!("Saved {}", path.display()));
            }
            ExportEvent::Failed(e) => {
                tracing::warn!("export failed: {e}");
                self.state.toast_error(format!("Export failed: {e}"));
            }
        }
        self.schedule_toast_expiry(tx);
    }

    fn schedule_toast_expiry(&self, tx: &mpsc::Sender<Event>) {
        let tx = tx.clone();
        let ttl = self.state.toast_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let _ = tx.send(Event::ToastExpired).await;
        });
    }
}
