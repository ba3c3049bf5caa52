//! Results list widget
//!
//! Renders the card area: one bordered card per claim, or the single
//! all-clear/error card.

use super::card_color;
use crate::state::ClaimCard;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

pub struct ClaimListWidget;

impl ClaimListWidget {
    /// Render the results area
    pub fn render(cards: &[ClaimCard], area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .title(" RESULTS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        if cards.is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "No results yet",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let mut y = inner.y;
        for card in cards {
            let height = Self::card_height(card);
            if y + height > inner.bottom() {
                break;
            }
            let card_area = Rect::new(inner.x, y, inner.width, height);
            Self::render_card(card, card_area, buf);
            y += height;
        }
    }

    /// Card height: borders plus one row per content line
    fn card_height(card: &ClaimCard) -> u16 {
        let mut lines = 0u16;
        if card.description.is_some() {
            lines += 1;
        }
        if card.score_line.is_some() {
            lines += 1;
        }
        if !card.sources.is_empty() {
            lines += 1;
        }
        2 + lines.max(1)
    }

    /// Render a single card
    fn render_card(card: &ClaimCard, area: Rect, buf: &mut Buffer) {
        let color = card_color(card);
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        if let Some(description) = &card.description {
            buf.set_string(
                inner.x + 1,
                y,
                description,
                Style::default().fg(Color::Gray),
            );
            y += 1;
        }
        if let Some(score_line) = &card.score_line {
            buf.set_string(inner.x + 1, y, score_line, Style::default().fg(color));
            y += 1;
        }
        if !card.sources.is_empty() {
            let chips: Vec<String> = card
                .sources
                .iter()
                .map(|source| format!("[{}]", source))
                .collect();
            buf.set_string(
                inner.x + 1,
                y,
                format!("Sources: {}", chips.join(" ")),
                Style::default().fg(Color::Cyan),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_core::Claim;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn sample_claim_card() -> ClaimCard {
        ClaimCard::claim(
            0,
            &Claim {
                text: "Example claim".to_string(),
                confidence: 0.75,
                bias_score: 0.3,
                sources: vec!["Source 1".to_string(), "Source 2".to_string()],
            },
        )
    }

    #[test]
    fn test_card_heights() {
        assert_eq!(ClaimListWidget::card_height(&ClaimCard::all_clear()), 3);
        assert_eq!(ClaimListWidget::card_height(&ClaimCard::error()), 3);
        assert_eq!(ClaimListWidget::card_height(&sample_claim_card()), 4);

        let mut no_sources = sample_claim_card();
        no_sources.sources.clear();
        assert_eq!(ClaimListWidget::card_height(&no_sources), 3);
    }

    #[test]
    fn test_render_empty_state() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 20));
        ClaimListWidget::render(&[], Rect::new(0, 0, 50, 20), &mut buf);
        assert!(row_text(&buf, 1).contains("No results yet"));
    }

    #[test]
    fn test_render_claim_card_content() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 20));
        ClaimListWidget::render(&[sample_claim_card()], Rect::new(0, 0, 50, 20), &mut buf);

        assert!(row_text(&buf, 1).contains("Claim 1: Example claim"));
        assert!(row_text(&buf, 2).contains("Confidence: 75% | Bias: 30%"));
        assert!(row_text(&buf, 3).contains("[Source 1] [Source 2]"));
    }

    #[test]
    fn test_render_stops_at_area_bottom() {
        let cards: Vec<ClaimCard> = (0..10).map(|_| sample_claim_card()).collect();
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 12));
        // Must not panic with more cards than fit
        ClaimListWidget::render(&cards, Rect::new(0, 0, 50, 12), &mut buf);
    }

    #[test]
    fn test_render_tiny_area_is_a_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        ClaimListWidget::render(&[sample_claim_card()], Rect::new(0, 0, 3, 2), &mut buf);
    }
}
