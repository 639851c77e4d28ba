//! Modal notice overlay.

use client_frontend_core::view_model::{Notice, NoticeKind, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    notice: &Notice,
    theme: &T,
) {
    let title = match notice.kind {
        NoticeKind::Success => " Success ",
        NoticeKind::Warning => " Attention ",
        NoticeKind::Failure => " Transaction failed ",
    };
    let style = theme.style_notice(notice.kind);

    let lines = vec![
        Line::from(""),
        Line::styled(notice.text.clone(), style),
        Line::from(""),
        Line::from("[Enter] OK"),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(title),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
