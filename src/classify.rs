use crate::HAND_SIZE;
use crate::PROGRESS_LINES;
use crate::combinatorics::Selector;
use crate::domain::Domain;
use crate::error::Error;
use crate::error::Result;
use crate::histogram::Histogram;
use crate::histogram::Label;
use crate::progress::Progress;

/// How a classifier turns predicate results into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Predicates run in precedence order; the first match is the only label.
    PriorityChain,
    /// Every predicate runs; each match bumps its own bucket.
    MultiLabel,
}

/// Item type drawn by a classifier's domain.
pub type Item<C> = <<C as Classifier>::Domain as Domain>::Item;

/// A variant-specific policy over the predicate library.
pub trait Classifier {
    type Domain: Domain;
    type Label: Label;
    const POLICY: Policy;

    fn domain(&self) -> &Self::Domain;
    /// Bump the bucket of every label `hand` earns under this policy.
    ///
    /// `hand` has already passed [`Classifier::validate`].
    fn label(&self, hand: &[<Self::Domain as Domain>::Item], hist: &mut Histogram<Self::Label>);

    /// Hand size the predicates are written for.
    fn size(&self) -> usize {
        HAND_SIZE
    }
    /// Exactly `size()` pairwise distinct items.
    fn validate(&self, hand: &[<Self::Domain as Domain>::Item]) -> Result<()> {
        if hand.len() != self.size() {
            return Err(Error::InvalidHandSize {
                expected: self.size(),
                found: hand.len(),
            });
        }
        for (i, a) in hand.iter().enumerate() {
            if hand[i + 1..].contains(a) {
                return Err(Error::DuplicateItem(a.to_string()));
            }
        }
        Ok(())
    }
    /// Validate, witness and label one hand.
    fn classify(
        &self,
        hand: &[<Self::Domain as Domain>::Item],
        hist: &mut Histogram<Self::Label>,
    ) -> Result<()> {
        self.validate(hand)?;
        hist.witness();
        self.label(hand, hist);
        Ok(())
    }
    /// Histogram of a single hand: every bucket is 0 or 1.
    fn single(&self, hand: &[<Self::Domain as Domain>::Item]) -> Result<Histogram<Self::Label>> {
        let mut hist = Histogram::default();
        self.classify(hand, &mut hist)?;
        Ok(hist)
    }
}

/// Exhaustive enumeration of a classifier's domain.
///
/// Domain -> Selector -> hand -> Classifier -> Histogram, one hand at a
/// time, with a single reused hand buffer.
pub struct Tally<'a, C: Classifier> {
    classifier: &'a C,
    k: usize,
}

impl<'a, C: Classifier> Tally<'a, C> {
    pub fn new(classifier: &'a C, k: usize) -> Result<Self> {
        Selector::new(classifier.domain().size(), k)?;
        if k != classifier.size() {
            return Err(Error::InvalidHandSize {
                expected: classifier.size(),
                found: k,
            });
        }
        Ok(Self { classifier, k })
    }
    /// The full C(n, k) sequence.
    pub fn selector(&self) -> Result<Selector> {
        Selector::new(self.classifier.domain().size(), self.k)
    }
    /// Contiguous sub-ranges that together cover the full sequence.
    ///
    /// Tallying each range and summing the histograms gives the same
    /// result as [`Tally::run`].
    pub fn partition(&self, parts: usize) -> Result<Vec<Selector>> {
        Selector::partition(self.classifier.domain().size(), self.k, parts)
    }
    pub fn run(&self) -> Result<Histogram<C::Label>> {
        Ok(self.over(self.selector()?))
    }
    /// Tally the hands of one selector range.
    ///
    /// Selector hands are distinct and sized by construction, so they go
    /// straight to [`Classifier::label`] without [`Classifier::validate`].
    pub fn over(&self, selector: Selector) -> Histogram<C::Label> {
        let items = self.classifier.domain().items();
        let mut hist = Histogram::default();
        let mut hand = Vec::with_capacity(self.k);
        let mut progress = Progress::new(selector.combinations(), PROGRESS_LINES);
        log::info!(
            "classifying {} hands of {} from {} items ({:?})",
            selector.combinations(),
            self.k,
            items.len(),
            C::POLICY,
        );
        for mask in selector {
            mask.pick_into(items, &mut hand);
            hist.witness();
            self.classifier.label(&hand, &mut hist);
            progress.tick();
        }
        progress.finish();
        log::debug!(
            "{} of {} labels matched at least one hand",
            hist.support().count(),
            <C::Label as Label>::all().len(),
        );
        hist
    }
}
