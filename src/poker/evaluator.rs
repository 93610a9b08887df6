use super::card::Card;
use super::deck::Deck;
use super::rank::Rank;
use super::ranking::Ranking;
use crate::classify::Classifier;
use crate::classify::Policy;
use crate::histogram::Histogram;
use crate::predicates::Frequency;
use crate::predicates::consecutive;
use crate::predicates::uniform;

/// A lazy evaluator for a five-card hand's category.
///
/// Categories are tried strongest first and the first match wins, so
/// every hand gets exactly one [`Ranking`]. Rank multiplicities are
/// counted once up front; everything else is a predicate over the hand.
pub struct Evaluator<'a> {
    hand: &'a [Card],
    ranks: Frequency,
}

impl<'a> From<&'a [Card]> for Evaluator<'a> {
    fn from(hand: &'a [Card]) -> Self {
        Self {
            hand,
            ranks: Frequency::of(hand, |c| u8::from(c.rank())),
        }
    }
}

impl Evaluator<'_> {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }

    /// every card shares a suit
    pub fn is_flush(&self) -> bool {
        uniform(self.hand, Card::suit)
    }
    /// ranks form a run with the ace played low (A2345) or high (TJQKA)
    pub fn is_straight(&self) -> bool {
        consecutive(self.hand, |c| c.rank().low()) || consecutive(self.hand, |c| c.rank().high())
    }
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }
    /// the ace-high straight flush
    pub fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.has(Rank::Ace) && self.has(Rank::King)
    }

    fn has(&self, rank: Rank) -> bool {
        self.ranks.count(u8::from(rank)) > 0
    }

    fn find_royal_flush(&self) -> Option<Ranking> {
        self.is_royal_flush().then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.is_straight_flush().then_some(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.ranks.exactly(4).then_some(Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.ranks.exactly(3) && self.ranks.exactly(2)).then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.is_straight().then_some(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.ranks.exactly(3).then_some(Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.ranks.groups(2) == 2).then_some(Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        (self.ranks.groups(2) == 1).then_some(Ranking::OnePair)
    }
}

/// Priority-chain classifier over the standard deck.
#[derive(Debug, Clone, Default)]
pub struct Ranker(Deck);

impl Ranker {
    pub fn new() -> Self {
        Self(Deck::new())
    }
}

impl Classifier for Ranker {
    type Domain = Deck;
    type Label = Ranking;
    const POLICY: Policy = Policy::PriorityChain;

    fn domain(&self) -> &Deck {
        &self.0
    }
    fn label(&self, hand: &[Card], hist: &mut Histogram<Ranking>) {
        hist.increment(Evaluator::from(hand).find_ranking());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn rank(s: &str) -> Ranking {
        let hand = Card::parse(s).unwrap();
        Evaluator::from(hand.as_slice()).find_ranking()
    }

    #[test]
    fn high_card() {
        assert_eq!(rank("As Kh Qd Jc 9s"), Ranking::HighCard);
    }

    #[test]
    fn one_pair() {
        assert_eq!(rank("As Ah Kd Qc Js"), Ranking::OnePair);
    }

    #[test]
    fn two_pair() {
        assert_eq!(rank("As Ah Kd Kc Qs"), Ranking::TwoPair);
    }

    #[test]
    fn three_oak() {
        assert_eq!(rank("As Ah Ad Kc Qs"), Ranking::ThreeOAK);
    }

    #[test]
    fn straight() {
        assert_eq!(rank("9s Th Jd Qc Ks"), Ranking::Straight);
    }

    #[test]
    fn broadway_straight() {
        assert_eq!(rank("Ts Jh Qd Kc As"), Ranking::Straight);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(rank("As 2h 3d 4c 5s"), Ranking::Straight);
    }

    #[test]
    fn no_wraparound_straight() {
        assert_eq!(rank("Qs Kh Ad 2c 3s"), Ranking::HighCard);
    }

    #[test]
    fn reference_wheel_indices() {
        let hand = [0u8, 9, 10, 11, 12]
            .into_iter()
            .zip([0u8, 1, 2, 3, 0])
            .map(|(r, s)| Card::from((Rank::from(r), crate::poker::Suit::from(s))))
            .collect::<Vec<Card>>();
        assert_eq!(Evaluator::from(hand.as_slice()).find_ranking(), Ranking::Straight);
    }

    #[test]
    fn flush() {
        assert_eq!(rank("As Ks Qs Js 9s"), Ranking::Flush);
    }

    #[test]
    fn full_house() {
        assert_eq!(rank("2s 2h 2d 3c 3s"), Ranking::FullHouse);
    }

    #[test]
    fn four_oak() {
        assert_eq!(rank("As Ah Ad Ac Ks"), Ranking::FourOAK);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank("9s Ts Js Qs Ks"), Ranking::StraightFlush);
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(rank("As 2s 3s 4s 5s"), Ranking::StraightFlush);
    }

    #[test]
    fn royal_flush() {
        assert_eq!(rank("Ts Js Qs Ks As"), Ranking::RoyalFlush);
        assert_eq!(rank("Ah Kh Qh Jh Th"), Ranking::RoyalFlush);
    }

    #[test]
    fn order_independent() {
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let mut hand = Card::parse("Ts Jh Qd Kc As").unwrap();
        for _ in 0..16 {
            hand.shuffle(rng);
            assert_eq!(Evaluator::from(hand.as_slice()).find_ranking(), Ranking::Straight);
        }
    }

    #[test]
    fn single_hand_histogram() {
        let ranker = Ranker::new();
        let hand = Card::parse("2s 2h 2d 3c 3s").unwrap();
        let hist = ranker.single(&hand).unwrap();
        assert_eq!(hist.get(Ranking::FullHouse), 1);
        assert_eq!(hist.total(), 1);
        assert_eq!(hist.mass(), 1);
    }

    #[test]
    fn single_hand_rejects_bad_input() {
        let ranker = Ranker::new();
        assert!(ranker.single(&Card::parse("2s 2h 2d 3c").unwrap()).is_err());
        assert!(ranker.single(&Card::parse("2s 2h 2d 3c 2s").unwrap()).is_err());
    }

    #[test]
    fn random_hands_get_one_label() {
        let ranker = Ranker::new();
        let mut hist = Histogram::default();
        let mut seen = 0;
        while seen < 64 {
            let hand = (0..5).map(|_| Card::random()).collect::<Vec<Card>>();
            if ranker.classify(&hand, &mut hist).is_ok() {
                seen += 1;
            }
        }
        assert_eq!(hist.mass(), 64);
        assert_eq!(hist.total(), 64);
    }
}
