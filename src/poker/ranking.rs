use crate::histogram::Label;

/// A five-card poker hand category.
///
/// Variants are declared strongest first, which is both the order the
/// [`Evaluator`] tries them in and the order they are displayed in.
///
/// [`Evaluator`]: super::evaluator::Evaluator
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Ranking {
    RoyalFlush,
    StraightFlush,
    FourOAK,
    FullHouse,
    Flush,
    Straight,
    ThreeOAK,
    TwoPair,
    OnePair,
    HighCard,
}

impl Label for Ranking {
    fn all() -> &'static [Self] {
        &[
            Ranking::RoyalFlush,
            Ranking::StraightFlush,
            Ranking::FourOAK,
            Ranking::FullHouse,
            Ranking::Flush,
            Ranking::Straight,
            Ranking::ThreeOAK,
            Ranking::TwoPair,
            Ranking::OnePair,
            Ranking::HighCard,
        ]
    }
    fn name(&self) -> &'static str {
        match self {
            Ranking::RoyalFlush => "RoyalFlush",
            Ranking::StraightFlush => "StraightFlush",
            Ranking::FourOAK => "FourOfAKind",
            Ranking::FullHouse => "FullHouse",
            Ranking::Flush => "Flush",
            Ranking::Straight => "Straight",
            Ranking::ThreeOAK => "ThreeOfAKind",
            Ranking::TwoPair => "TwoPair",
            Ranking::OnePair => "OnePair",
            Ranking::HighCard => "HighCard",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
