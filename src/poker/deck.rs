use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::domain::Domain;

/// The standard 52-card deck, suits outermost, ranks ace to king within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub const SIZE: usize = Suit::COUNT * Rank::COUNT;
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
}

impl Domain for Deck {
    type Item = Card;
    fn items(&self) -> &[Card] {
        &self.0
    }
    fn index(&self, card: &Card) -> Option<usize> {
        Some(u8::from(*card) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_two_distinct() {
        let deck = Deck::new();
        let mut cards = deck.items().to_vec();
        cards.dedup();
        assert_eq!(deck.size(), Deck::SIZE);
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn nested_order() {
        let deck = Deck::new();
        assert_eq!(deck.items()[0], Card::from((Rank::Ace, Suit::C)));
        assert_eq!(deck.items()[1], Card::from((Rank::Two, Suit::C)));
        assert_eq!(deck.items()[13], Card::from((Rank::Ace, Suit::D)));
        assert_eq!(deck.items()[51], Card::from((Rank::King, Suit::S)));
        for (i, card) in deck.items().iter().enumerate() {
            assert_eq!(deck.index(card), Some(i));
        }
    }
}
