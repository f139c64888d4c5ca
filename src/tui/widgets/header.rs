use super::centered_row;
use crate::app::state::AppState;
use crate::tui::theme::{Theme, chrome::title_gradient};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "COLORAID";

pub fn render(frame: &mut Frame, theme: &Theme, state: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.chrome.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(inner);
    let row = inner.y + inner.height / 2;

    let last = (TITLE.len() - 1) as f32;
    let mut spans: Vec<Span> = TITLE
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(title_gradient(i as f32 / last))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    spans.push(Span::styled(
        format!(
            "  {} colors, {} locked",
            state.palette.len(),
            state.palette.locked_count()
        ),
        Style::default().fg(theme.chrome.fg_secondary),
    ));
    let title_area = Rect {
        x: cols[0].x + 1,
        width: cols[0].width.saturating_sub(1),
        ..centered_row(cols[0], row, cols[0].width)
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), title_area);

    let label = if state.exporting {
        "[ Exporting... ]".to_string()
    } else {
        format!("[ {} Download ]", theme.icons.download)
    };
    let label = Line::from(label);
    let button = centered_row(cols[1], row, label.width() as u16);
    frame.render_widget(
        Paragraph::new(label).style(
            Style::default()
                .fg(theme.chrome.button_fg)
                .bg(theme.chrome.button_bg)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
    state.hit.download = button;
}
