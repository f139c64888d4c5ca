use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Export(ExportEvent),
    /// A toast's lifetime ran out; redraw so it disappears.
    ToastExpired,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum ExportEvent {
    Saved(PathBuf),
    Failed(String),
}
