//! Overlay widgets
//!
//! One file per widget. Widgets consume the card model produced by
//! the controller; they never touch remote data directly.

use crate::state::{CardKind, ClaimCard};
use ratatui::style::Color;

mod claim_list;
mod status_panel;

pub use claim_list::ClaimListWidget;
pub use status_panel::StatusPanelWidget;

/// Accent color for a card.
///
/// High-confidence claims get the alarming color; the confidence
/// label has no effect beyond presentation.
pub fn card_color(card: &ClaimCard) -> Color {
    match card.kind {
        CardKind::AllClear => Color::Green,
        CardKind::Error => Color::Red,
        CardKind::Claim => {
            if card.high_confidence {
                Color::LightRed
            } else {
                Color::Yellow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_colors() {
        assert_eq!(card_color(&ClaimCard::all_clear()), Color::Green);
        assert_eq!(card_color(&ClaimCard::error()), Color::Red);

        let mut card = ClaimCard::all_clear();
        card.kind = CardKind::Claim;
        card.high_confidence = true;
        assert_eq!(card_color(&card), Color::LightRed);
        card.high_confidence = false;
        assert_eq!(card_color(&card), Color::Yellow);
    }
}
