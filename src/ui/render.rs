use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{bottom_strip, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, AVATAR_BG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_PENDING,
};
use crate::ui::users::{UserRow, ViewDescriptor};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(&app.users().operation), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, &app.view(), app.frame_count());
    frame.render_widget(Footer::new().widget(footer), footer);
}

/// Renders a view descriptor into `area`.
pub fn draw_body(frame: &mut Frame<'_>, area: Rect, view: &ViewDescriptor, frame_count: u64) {
    match view {
        ViewDescriptor::Placeholder { text } => {
            draw_centered(frame, area, vec![muted_line(text)], None);
        }
        ViewDescriptor::Loading { label } => {
            let spinner = SPINNER[(frame_count % SPINNER.len() as u64) as usize];
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(STATUS_PENDING)),
                Span::raw("  "),
                Span::styled(*label, Style::default().fg(HEADER_TEXT)),
            ]);
            draw_centered(frame, area, vec![line], None);
        }
        ViewDescriptor::Failed {
            icon,
            message,
            retry_label,
        } => {
            let error_style = Style::default().fg(STATUS_ERROR);
            let lines = vec![
                Line::from(Span::styled(*icon, error_style.add_modifier(Modifier::BOLD))),
                Line::from(""),
                Line::from(Span::styled(message.clone(), error_style)),
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        format!("[ {} ]", retry_label),
                        Style::default()
                            .fg(ACCENT)
                            .bg(ACTIVE_HIGHLIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  Enter", Style::default().fg(MUTED_TEXT)),
                ]),
            ];
            draw_centered(frame, area, lines, Some(" Error "));
        }
        ViewDescriptor::Empty { text } => {
            draw_centered(frame, area, vec![muted_line(text)], None);
        }
        ViewDescriptor::Users {
            header,
            rows,
            toast,
        } => {
            draw_user_list(frame, area, header, rows);
            if let Some(message) = toast {
                draw_toast(frame, area, message);
            }
        }
    }
}

fn draw_user_list(frame: &mut Frame<'_>, area: Rect, header: &str, rows: &[UserRow]) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", header),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for row in rows {
        let mut name_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", row.avatar),
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(AVATAR_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                row.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ›", Style::default().fg(MUTED_TEXT)),
        ]);
        let mut detail_line = Line::from(vec![
            Span::raw("      "),
            Span::styled(row.email.clone(), Style::default().fg(MUTED_TEXT)),
            Span::styled("  ·  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(row.role.clone(), Style::default().fg(MUTED_TEXT)),
        ]);
        if row.selected {
            let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
            name_line = name_line.style(highlight);
            detail_line = detail_line.style(highlight);
        }
        lines.push(name_line);
        lines.push(detail_line);
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_toast(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let strip = bottom_strip(area, 3);
    frame.render_widget(Clear, strip);
    let widget = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(HEADER_TEXT),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(widget, strip);
}

fn draw_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>, title: Option<&str>) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(6);
    let height = (lines.len() as u16).saturating_add(2);
    let target = centered_rect_by_size(area, width, height);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if let Some(title) = title {
        block = block.title(Span::styled(
            title.to_string(),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, target);
}

fn muted_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(MUTED_TEXT)))
}
