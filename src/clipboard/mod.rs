//! Clipboard access behind a small trait so the app can be driven without a
//! display server.

use anyhow::Context;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard via `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 and
/// Wayland the copied text is only served while it exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("open clipboard")?);
        }
        let Some(cb) = self.inner.as_mut() else {
            anyhow::bail!("clipboard unavailable");
        };
        if let Err(e) = cb.set_text(text.to_string()) {
            // Drop the handle so the next copy retries from scratch.
            self.inner = None;
            return Err(e).context("write clipboard");
        }
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: std::sync::Arc<std::sync::Mutex<Option<String>>>,
    pub fail: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard access denied");
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
