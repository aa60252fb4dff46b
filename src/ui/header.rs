use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::ui::users::OperationState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &OperationState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_color) = match state {
            OperationState::NotStarted => ("○", HEADER_SEPARATOR),
            OperationState::Pending { .. } => ("●", STATUS_PENDING),
            OperationState::Failed { .. } => ("●", STATUS_ERROR),
            OperationState::Succeeded { .. } => ("●", STATUS_OK),
        };
        let operation = state
            .operation()
            .map(|op| format!("fetch {}", op.id()))
            .unwrap_or_else(|| "no fetch".to_string());

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Users",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled(" ", text_style),
            Span::styled(state.label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(operation, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
