#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resize,

    SelectPrev,
    SelectNext,
    Select(usize),

    /// Replace every unlocked color
    Regenerate,
    ToggleLock(usize),
    ToggleSelectedLock,

    CopyColor(usize),
    CopySelected,
    Export,
}
