//! Header widget displaying network and wallet information.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel with the required network and connected account.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    network_name: &str,
    backend_name: &str,
) {
    let account = match &view_model.connection.address {
        Some(address) if view_model.connection.connected => Span::styled(
            address.short(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        _ if view_model.connection.connected => {
            Span::styled("connected", Style::default().fg(Color::Cyan))
        }
        _ => Span::styled("not connected", Style::default().fg(Color::DarkGray)),
    };

    let mut spans = vec![
        Span::raw("Network: "),
        Span::styled(network_name.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Wallet: "),
        account,
    ];
    if view_model.is_owner {
        spans.push(Span::styled(
            " [OWNER]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Crypto Devs ({})", backend_name)),
    );

    frame.render_widget(paragraph, area);
}
