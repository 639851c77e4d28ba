//! UI rendering entry point composing the mint screen widgets.
use anyhow::Result;
use client_blockchain_core::Wei;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::view_model::ViewModel;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub network_name: &'a str,
    pub backend_name: &'a str,
    pub mint_price: Wei,
    pub message_panel_height: u16,
}

/// Render the mint screen, with the pending notice (if any) as a modal on top.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(9),                           // Mint panel
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(3),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(
            frame,
            chunks[0],
            ctx.view_model,
            ctx.network_name,
            ctx.backend_name,
        );
        widgets::mint_panel::render(frame, chunks[1], ctx.view_model, ctx.mint_price, &theme);

        let recent_messages: Vec<_> = ctx
            .view_model
            .messages
            .recent(ctx.message_panel_height.saturating_sub(2) as usize)
            .cloned()
            .collect();
        widgets::messages::render(
            frame,
            chunks[2],
            &recent_messages,
            ctx.message_panel_height,
            &theme,
        );

        widgets::footer::render(frame, chunks[3], ctx.view_model);

        if let Some(notice) = &ctx.view_model.notice {
            let area = centered_rect(60, 30, frame.area());
            widgets::notice::render(frame, area, notice, &theme);
        }
    })?;

    Ok(())
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 30, parent);

        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 12);
        assert_eq!(popup.x, 20);
        assert!(popup.y + popup.height <= parent.height);
    }
}
