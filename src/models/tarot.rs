// file: src/models/tarot.rs

/// Number of tarot card images shipped with the app.
pub const TAROT_CARD_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TarotCard(u8);

impl TarotCard {
    /// Card numbers run from 1 to `TAROT_CARD_COUNT`.
    pub fn new(number: u8) -> Option<Self> {
        if (1..=TAROT_CARD_COUNT as u8).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Maps a zero-based draw index onto a card.
    pub fn from_draw(index: usize) -> Option<Self> {
        u8::try_from(index + 1).ok().and_then(Self::new)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn image_name(&self) -> String {
        format!("Tarot{}.png", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_bounds() {
        assert!(TarotCard::new(0).is_none());
        assert!(TarotCard::new(1).is_some());
        assert!(TarotCard::new(6).is_some());
        assert!(TarotCard::new(7).is_none());
    }

    #[test]
    fn test_from_draw() {
        assert_eq!(TarotCard::from_draw(0).map(|c| c.number()), Some(1));
        assert_eq!(TarotCard::from_draw(5).map(|c| c.number()), Some(6));
        assert!(TarotCard::from_draw(6).is_none());
        assert_eq!(TarotCard::from_draw(2).map(|c| c.image_name()), Some("Tarot3.png".to_string()));
    }
}
