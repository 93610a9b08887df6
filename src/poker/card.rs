use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `suit * 13 + rank`. This is exactly the card's position in a freshly
/// built [`Deck`], suits outermost.
///
/// Cards parse from two-character strings like `"As"` (ace of spades) or
/// `"Tc"` (ten of clubs). Use [`Card::parse`] for multiple cards.
///
/// [`Deck`]: super::deck::Deck
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % Rank::COUNT as u8)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / Rank::COUNT as u8)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * Rank::COUNT as u8 + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in the deck 0-51
/// Ts
/// 48
/// 0b00110000
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().count() {
            2 => {
                let mut chars = s.chars();
                let rank = chars.next().map(String::from).unwrap_or_default();
                let suit = chars.next().map(String::from).unwrap_or_default();
                let rank = Rank::try_from(rank.as_str())?;
                let suit = Suit::try_from(suit.as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card needs 2 characters: {}", s)),
        }
    }
}

impl Card {
    /// Parses whitespace-separated card notations.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52))
    }
}
