//! Icon sets. The Nerd Font set needs a patched font
//! (https://www.nerdfonts.com); the ASCII set works everywhere.

#[derive(Debug, Clone)]
pub struct Icons {
    pub locked: &'static str,
    pub unlocked: &'static str,
    pub download: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            locked: "\u{f023}",   // nf-fa-lock
            unlocked: "\u{f09c}", // nf-fa-unlock
            download: "\u{f019}", // nf-fa-download
            success: "\u{f00c}",  // nf-fa-check
            error: "\u{f00d}",    // nf-fa-times
        }
    }

    pub const fn ascii() -> Self {
        Self {
            locked: "[L]",
            unlocked: "[ ]",
            download: "v",
            success: "+",
            error: "x",
        }
    }
}
