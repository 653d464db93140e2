use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = " t/Space: Toggle │ +/↑: Increase │ -/↓: Decrease │ q: Quit";

/// Key hints, or the last dispatch error when there is one.
pub fn widget(last_error: Option<&str>) -> Paragraph<'static> {
    let line = match last_error {
        Some(error) => Line::from(Span::styled(
            format!(" Error: {}", error),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(Span::styled(
            HINTS,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    };

    Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
