//! Key hints on the left, the current toast on the right.

use super::truncate_str;
use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, theme: &Theme, state: &AppState, area: Rect) {
    let toast = state.toast.as_ref().filter(|t| !t.is_expired()).map(|toast| {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (theme.icons.success, theme.chrome.success),
            ToastKind::Error => (theme.icons.error, theme.chrome.error),
        };
        let max = (area.width as usize * 2 / 3).saturating_sub(prefix.chars().count() + 2);
        Line::from(vec![
            Span::styled(format!("{} ", prefix), Style::default().fg(color)),
            Span::styled(truncate_str(&toast.message, max), Style::default().fg(color)),
            Span::raw(" "),
        ])
    });
    let toast_width = toast.as_ref().map_or(0, |l| l.width() as u16).min(area.width);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(toast_width)])
        .split(area);

    let mut hints = vec![Span::raw(" ")];
    for (key, desc) in [
        ("space", "regenerate"),
        ("h/l", "select"),
        ("y", "copy"),
        ("t/1-9", "lock"),
        ("d", "download"),
        ("q", "quit"),
    ] {
        hints.extend(keybind(key, desc, theme));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), cols[0]);

    if let Some(line) = toast {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), cols[1]);
    }
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!("{} ", key),
            Style::default()
                .fg(theme.chrome.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", desc), Style::default().fg(theme.chrome.fg_secondary)),
    ]
}
