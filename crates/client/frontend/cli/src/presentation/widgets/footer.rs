//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let keys = if view_model.has_notice() {
        "[Enter/Esc] Dismiss | [q] Quit"
    } else if view_model.control().is_actionable() {
        "[Enter/Space] Activate | [q] Quit"
    } else {
        "[q] Quit"
    };

    let text = Line::from(vec![
        Span::raw(keys),
        Span::raw("  ·  Made with ❤ by Crypto Devs"),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
