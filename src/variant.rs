use crate::classify::Classifier;
use crate::classify::Item;
use crate::classify::Policy;
use crate::classify::Tally;
use crate::domain::Domain;
use crate::error::Result;
use crate::histogram::Histogram;
use crate::histogram::Label;
use crate::music::Tagger;
use crate::music::Tone;
use crate::poker::Card;
use crate::poker::Ranker;

/// Which deck and predicate set to run.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// 52 cards, one poker ranking per hand
    Poker,
    /// 105 tones, any number of tags per hand
    Music,
}

impl Variant {
    pub fn policy(&self) -> Policy {
        match self {
            Variant::Poker => Ranker::POLICY,
            Variant::Music => Tagger::POLICY,
        }
    }
    /// Number of items in this variant's deck.
    pub fn size(&self) -> usize {
        match self {
            Variant::Poker => Ranker::new().domain().size(),
            Variant::Music => Tagger::new().domain().size(),
        }
    }
    /// Tally every `k`-hand of the deck.
    ///
    /// The sequence is cut into `parts` contiguous ranges which are tallied
    /// one after another and merged; the result does not depend on `parts`.
    pub fn count(&self, k: usize, parts: usize) -> Result<Report> {
        match self {
            Variant::Poker => tally(*self, &Ranker::new(), k, parts),
            Variant::Music => tally(*self, &Tagger::new(), k, parts),
        }
    }
    /// Classify one hand given in card notation, e.g. `["As", "Kd", ..]`
    /// or `["pC#", "vBb", ..]`. Every count in the report is 0 or 1.
    pub fn classify(&self, cards: &[&str]) -> Result<Report> {
        match self {
            Variant::Poker => {
                let hand = cards
                    .iter()
                    .map(|s| Card::try_from(*s))
                    .collect::<std::result::Result<Vec<Card>, String>>()?;
                single(*self, &Ranker::new(), &hand)
            }
            Variant::Music => {
                let hand = cards
                    .iter()
                    .map(|s| Tone::try_from(*s))
                    .collect::<std::result::Result<Vec<Tone>, String>>()?;
                single(*self, &Tagger::new(), &hand)
            }
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Poker => write!(f, "poker"),
            Variant::Music => write!(f, "music"),
        }
    }
}

fn tally<C: Classifier>(variant: Variant, classifier: &C, k: usize, parts: usize) -> Result<Report> {
    let tally = Tally::new(classifier, k)?;
    let hist = tally
        .partition(parts)?
        .into_iter()
        .map(|range| tally.over(range))
        .sum::<Histogram<C::Label>>();
    Ok(Report::from((variant, &hist)))
}

fn single<C: Classifier>(variant: Variant, classifier: &C, hand: &[Item<C>]) -> Result<Report> {
    classifier
        .single(hand)
        .map(|hist| Report::from((variant, &hist)))
}

/// One label bucket of a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bucket {
    pub label: &'static str,
    pub count: usize,
}

/// A histogram with its label type erased: label names and counts in
/// display order, plus the number of hands classified.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    variant: Variant,
    hands: usize,
    counts: Vec<Bucket>,
}

impl Report {
    pub fn variant(&self) -> Variant {
        self.variant
    }
    /// hands classified
    pub fn hands(&self) -> usize {
        self.hands
    }
    /// count under the label called `name`
    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|b| b.label == name)
            .map(|b| b.count)
    }
    pub fn buckets(&self) -> &[Bucket] {
        &self.counts
    }
}

impl<L: Label> From<(Variant, &Histogram<L>)> for Report {
    fn from((variant, hist): (Variant, &Histogram<L>)) -> Self {
        Self {
            variant,
            hands: hist.mass(),
            counts: hist
                .iter()
                .map(|(label, count)| Bucket {
                    label: label.name(),
                    count,
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for bucket in self.counts.iter() {
            writeln!(f, "{:<16}{:>12}", bucket.label, bucket.count)?;
        }
        write!(f, "{:<16}{:>12}", "hands", self.hands)
    }
}
