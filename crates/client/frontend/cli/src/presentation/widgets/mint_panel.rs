//! Main panel: collection intro, minted supply, and the current control.

use client_blockchain_core::Wei;
use client_frontend_core::view_model::{Control, PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    mint_price: Wei,
    theme: &T,
) {
    let control = view_model.control();

    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to Crypto Devs!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Its an NFT collection for developers in Crypto."),
        Line::from(Span::styled(
            view_model.minted_text(),
            theme.style_supply(view_model.minted, view_model.max_supply),
        )),
        Line::from(""),
    ];

    if let Some(description) = control.description() {
        lines.push(Line::from(description));
    }
    lines.push(control_line(control, theme));

    if matches!(control, Control::PresaleMint | Control::PublicMint) {
        lines.push(Line::from(Span::styled(
            format!("Price: {}", mint_price),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

/// Actionable controls render as a button, the rest as plain text.
fn control_line<T: PresentationMapper<Style = Style>>(control: Control, theme: &T) -> Line<'static> {
    let text = if control.is_actionable() {
        format!("[ {} ]", control.label())
    } else {
        control.label().to_string()
    };
    Line::from(Span::styled(text, theme.style_control(control)))
}
