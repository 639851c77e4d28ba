//! Framework-agnostic presentation mapping traits.
//!
//! Each frontend maps view-model states to its own styling system while
//! sharing the same view model logic.

use crate::message::MessageLevel;
use crate::view_model::{Control, NoticeKind};

/// Framework-agnostic presentation mapper for the mint screen.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///
///     fn style_control(&self, control: Control) -> Self::Style {
///         if control.is_actionable() {
///             Style::default().fg(Color::Black).bg(Color::Blue)
///         } else {
///             Style::default().fg(Color::Gray)
///         }
///     }
///     // ...
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Style for the current control.
    fn style_control(&self, control: Control) -> Self::Style;

    /// Style for the minted-count line; `minted == max_supply` means sold out.
    fn style_supply(&self, minted: u64, max_supply: u64) -> Self::Style;

    /// Style for notice borders and text.
    fn style_notice(&self, kind: NoticeKind) -> Self::Style;

    /// Style for message log entries based on level.
    fn style_message(&self, level: MessageLevel) -> Self::Style;
}
