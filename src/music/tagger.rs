use super::instrument::Instrument;
use super::orchestra::Orchestra;
use super::scale::Scale;
use super::tag::Tag;
use super::tone::Tone;
use crate::classify::Classifier;
use crate::classify::Policy;
use crate::histogram::Histogram;
use crate::predicates::Frequency;
use crate::predicates::consecutive;
use crate::predicates::covers;
use crate::predicates::uniform;

/// Every tag a hand of tones earns.
///
/// Unlike the poker evaluator nothing short-circuits: each predicate is
/// asked independently. Pitch-class multiplicities are counted once.
pub struct Motif<'a> {
    hand: &'a [Tone],
    pitches: Frequency,
}

impl<'a> From<&'a [Tone]> for Motif<'a> {
    fn from(hand: &'a [Tone]) -> Self {
        Self {
            hand,
            pitches: Frequency::of(hand, Tone::pitch_class),
        }
    }
}

impl Motif<'_> {
    pub fn find_tags(&self) -> Vec<Tag> {
        let solo = self.is_solo();
        let scale = self.is_scale();
        let mut tags = vec![Tag::All];
        tags.extend(solo.then_some(Tag::Solo));
        tags.extend(self.is_ensemble().then_some(Tag::Ensemble));
        tags.extend(scale.then_some(Tag::Scale));
        tags.extend((solo && scale).then_some(Tag::SoloScale));
        tags.extend(self.is_run().then_some(Tag::Run));
        tags.extend(self.is_same_note().then_some(Tag::SameNote));
        tags.extend(self.is_same_accidental().then_some(Tag::SameAccidental));
        tags.extend((2..=5).filter(|&n| self.pitches.exactly(n)).filter_map(Tag::multiple));
        tags.extend(self.is_two_pair().then_some(Tag::TwoPair));
        tags.extend(self.is_full_house().then_some(Tag::FullHouse));
        tags
    }

    /// one instrument plays every tone
    pub fn is_solo(&self) -> bool {
        uniform(self.hand, Tone::instrument)
    }
    /// every instrument plays at least one tone
    pub fn is_ensemble(&self) -> bool {
        covers(self.hand, |t| u8::from(t.instrument()), Instrument::COUNT as u8)
    }
    pub fn is_scale(&self) -> bool {
        Scale::detect(self.hand)
    }
    /// note letters form a run; B does not wrap to C
    pub fn is_run(&self) -> bool {
        consecutive(self.hand, |t| u8::from(t.note()))
    }
    pub fn is_same_note(&self) -> bool {
        uniform(self.hand, Tone::note)
    }
    pub fn is_same_accidental(&self) -> bool {
        uniform(self.hand, Tone::accidental)
    }
    pub fn is_two_pair(&self) -> bool {
        self.pitches.groups(2) == 2
    }
    pub fn is_full_house(&self) -> bool {
        self.pitches.exactly(3) && self.pitches.exactly(2)
    }
}

/// Multi-label classifier over the musical deck.
#[derive(Debug, Clone, Default)]
pub struct Tagger(Orchestra);

impl Tagger {
    pub fn new() -> Self {
        Self(Orchestra::new())
    }
}

impl Classifier for Tagger {
    type Domain = Orchestra;
    type Label = Tag;
    const POLICY: Policy = Policy::MultiLabel;

    fn domain(&self) -> &Orchestra {
        &self.0
    }
    fn label(&self, hand: &[Tone], hist: &mut Histogram<Tag>) {
        Motif::from(hand)
            .find_tags()
            .into_iter()
            .for_each(|tag| hist.increment(tag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Tally;
    use crate::combinatorics::Combinations;
    use crate::domain::Domain;
    use crate::error::Error;
    use crate::histogram::Label;
    use crate::music::pitch::Pitch;

    fn tags(s: &str) -> Vec<Tag> {
        let hand = Tone::parse(s).unwrap();
        Motif::from(hand.as_slice()).find_tags()
    }

    #[test]
    fn solo_scale_earns_all_three() {
        let hist = Tagger::new()
            .single(&Tone::parse("pC pD pE pF pG").unwrap())
            .unwrap();
        assert_eq!(hist.get(Tag::All), 1);
        assert_eq!(hist.get(Tag::Solo), 1);
        assert_eq!(hist.get(Tag::Scale), 1);
        assert_eq!(hist.get(Tag::SoloScale), 1);
        assert_eq!(hist.get(Tag::Run), 1);
        assert_eq!(hist.get(Tag::SameAccidental), 1);
        assert_eq!(hist.get(Tag::Ensemble), 0);
        assert_eq!(hist.get(Tag::Pair), 0);
        assert_eq!(hist.mass(), 1);
        assert!(Tag::all().iter().all(|&t| hist.get(t) <= 1));
    }

    #[test]
    fn ensemble_scale_is_not_solo() {
        assert_eq!(
            tags("pC vD gE fF dG"),
            vec![
                Tag::All,
                Tag::Ensemble,
                Tag::Scale,
                Tag::Run,
                Tag::SameAccidental
            ]
        );
    }

    #[test]
    fn wrapping_scale_is_not_a_run() {
        let tags = tags("pA pB pC pD pE");
        assert!(tags.contains(&Tag::Scale));
        assert!(tags.contains(&Tag::SoloScale));
        assert!(!tags.contains(&Tag::Run));
    }

    #[test]
    fn quintuple() {
        assert_eq!(
            tags("pC vC gC fC dC"),
            vec![
                Tag::All,
                Tag::Ensemble,
                Tag::SameNote,
                Tag::SameAccidental,
                Tag::Quintuple
            ]
        );
    }

    #[test]
    fn full_house_is_also_pair_and_triple() {
        let tags = tags("pC vC gC pD vD");
        assert!(tags.contains(&Tag::Pair));
        assert!(tags.contains(&Tag::Triple));
        assert!(tags.contains(&Tag::FullHouse));
        assert!(!tags.contains(&Tag::TwoPair));
        assert!(!tags.contains(&Tag::Scale));
    }

    #[test]
    fn two_pair_is_also_pair() {
        let tags = tags("pC vC pD vD pE");
        assert!(tags.contains(&Tag::Pair));
        assert!(tags.contains(&Tag::TwoPair));
        assert!(!tags.contains(&Tag::FullHouse));
        assert!(!tags.contains(&Tag::Run));
    }

    #[test]
    fn same_note_mixed_accidentals() {
        let tags = tags("pC vC# gCb fC dC#");
        assert!(tags.contains(&Tag::SameNote));
        assert!(!tags.contains(&Tag::SameAccidental));
        assert!(tags.contains(&Tag::TwoPair));
        assert!(tags.contains(&Tag::Ensemble));
    }

    #[test]
    fn quad_without_triple() {
        let tags = tags("pEb vEb gEb fEb pF");
        assert!(tags.contains(&Tag::Quad));
        assert!(!tags.contains(&Tag::Triple));
        assert!(!tags.contains(&Tag::Pair));
    }

    #[test]
    fn rejects_duplicate_tone() {
        let hand = Tone::parse("pC pC pD pE pF").unwrap();
        assert_eq!(
            Tagger::new().single(&hand),
            Err(Error::DuplicateItem("pC".into()))
        );
    }

    #[test]
    fn piano_slice_totals() {
        let orchestra = Orchestra::new();
        let piano = &orchestra.items()[..Pitch::COUNT];
        assert!(piano.iter().all(|t| t.instrument() == Instrument::Piano));
        let mut hist = Histogram::<Tag>::default();
        for hand in Combinations::new(piano, 5).unwrap() {
            hist.witness();
            Motif::from(hand.as_slice())
                .find_tags()
                .into_iter()
                .for_each(|tag| hist.increment(tag));
        }
        assert_eq!(hist.mass(), 20_349);
        assert_eq!(hist.get(Tag::All), 20_349);
        assert_eq!(hist.get(Tag::Solo), 20_349);
        assert_eq!(hist.get(Tag::Ensemble), 0);
        // 7 windows, 11 distinct key restrictions per window
        assert_eq!(hist.get(Tag::Scale), 77);
        assert_eq!(hist.get(Tag::SoloScale), 77);
        // C..G, D..A, E..B with any accidental on each letter
        assert_eq!(hist.get(Tag::Run), 3 * 3usize.pow(5));
        // 3 tones per letter, 7 per accidental
        assert_eq!(hist.get(Tag::SameNote), 0);
        assert_eq!(hist.get(Tag::SameAccidental), 3 * 21);
        // one instrument never repeats a pitch class
        assert_eq!(hist.get(Tag::Pair), 0);
        assert_eq!(hist.get(Tag::TwoPair), 0);
        assert_eq!(hist.get(Tag::FullHouse), 0);
    }

    #[test]
    #[ignore = "enumerates all 96,560,646 hands"]
    fn full_orchestra() {
        let tagger = Tagger::new();
        let hist = Tally::new(&tagger, 5).unwrap().run().unwrap();
        assert_eq!(hist.mass(), 96_560_646);
        assert_eq!(hist.get(Tag::All), 96_560_646);
        assert_eq!(hist.get(Tag::Solo), 5 * 20_349);
        assert_eq!(hist.get(Tag::Ensemble), 21usize.pow(5));
        assert_eq!(hist.get(Tag::SameNote), 7 * 3_003);
        assert_eq!(hist.get(Tag::SameAccidental), 3 * 324_632);
        assert_eq!(hist.get(Tag::Scale), 77 * 5usize.pow(5));
        assert_eq!(hist.get(Tag::SoloScale), 77 * 5);
        assert_eq!(hist.get(Tag::Run), 3 * 3usize.pow(5) * 5usize.pow(5));
        assert_eq!(hist.get(Tag::Pair), 31_962_000);
        assert_eq!(hist.get(Tag::Triple), 21 * 10 * 4_950);
        assert_eq!(hist.get(Tag::Quad), 21 * 5 * 100);
        assert_eq!(hist.get(Tag::Quintuple), 21);
        assert_eq!(hist.get(Tag::TwoPair), 1_995_000);
        assert_eq!(hist.get(Tag::FullHouse), 21 * 10 * 20 * 10);
    }
}
