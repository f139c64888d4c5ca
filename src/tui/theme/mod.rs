//! UI chrome theme. The plates themselves are painted with palette colors;
//! everything around them uses this.

pub mod chrome;
pub mod icons;

pub use chrome::Chrome;
pub use icons::Icons;

#[derive(Debug, Clone)]
pub struct Theme {
    pub chrome: Chrome,
    pub icons: Icons,
}

impl Theme {
    pub fn new(nerd_font: bool) -> Self {
        Self {
            chrome: Chrome::MONO,
            icons: if nerd_font { Icons::nerd() } else { Icons::ascii() },
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

pub fn get_theme(cfg: &crate::config::Config) -> Theme {
    Theme::new(cfg.ui.nerd_font)
}
