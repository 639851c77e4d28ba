//! Ratatui theme implementation of PresentationMapper.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{Control, NoticeKind, PresentationMapper},
};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_control(&self, control: Control) -> Self::Style {
        match control {
            Control::Loading => Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            Control::PresaleNotStarted => Style::default().fg(Color::Gray),
            Control::StartPresale => Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            Control::ConnectWallet | Control::PresaleMint | Control::PublicMint => Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn style_supply(&self, minted: u64, max_supply: u64) -> Self::Style {
        if max_supply > 0 && minted >= max_supply {
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightGreen)
        }
    }

    fn style_notice(&self, kind: NoticeKind) -> Self::Style {
        let color = match kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Failure => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }
}
