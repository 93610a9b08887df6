use std::collections::BTreeMap;
use std::ops::AddAssign;

/// A closed set of classification labels.
///
/// The `Ord` of a label is its display order.
pub trait Label: Copy + Ord + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every label, in display order.
    fn all() -> &'static [Self];
    /// Stable, human-readable name.
    fn name(&self) -> &'static str;
}

/// Counts of hands per label over an enumeration.
///
/// Every label has a bucket from construction, so a label that never
/// matches still reports zero. `mass` is the number of hands witnessed,
/// which equals the bucket sum only when every hand gets exactly one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<L: Label> {
    mass: usize,
    counts: BTreeMap<L, usize>,
}

impl<L: Label> Default for Histogram<L> {
    fn default() -> Self {
        Self {
            mass: 0,
            counts: L::all().iter().map(|&l| (l, 0usize)).collect(),
        }
    }
}

impl<L: Label> Histogram<L> {
    /// record that one more hand went through classification
    pub fn witness(&mut self) {
        self.mass.add_assign(1usize);
    }
    /// bump the bucket of one label
    pub fn increment(&mut self, label: L) {
        self.counts.entry(label).or_insert(0usize).add_assign(1usize);
    }
    /// hands counted under `label`
    pub fn get(&self, label: L) -> usize {
        self.counts.get(&label).copied().unwrap_or(0usize)
    }
    /// hands witnessed
    pub fn mass(&self) -> usize {
        self.mass
    }
    /// sum over all buckets
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
    /// labels with nonzero counts
    pub fn support(&self) -> impl Iterator<Item = L> + '_ {
        self.counts
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(l, _)| *l)
    }
    /// buckets in display order
    pub fn iter(&self) -> impl Iterator<Item = (L, usize)> + '_ {
        self.counts.iter().map(|(l, n)| (*l, *n))
    }
    /// absorb the other histogram into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.mass += other.mass;
        for (label, count) in other.counts.iter() {
            self.counts.entry(*label).or_insert(0usize).add_assign(*count);
        }
    }
}

impl<L: Label> AddAssign for Histogram<L> {
    fn add_assign(&mut self, other: Self) {
        self.absorb(&other);
    }
}

impl<L: Label> std::iter::Sum for Histogram<L> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, h| {
            acc += h;
            acc
        })
    }
}

impl<L: Label> From<Vec<L>> for Histogram<L> {
    fn from(labels: Vec<L>) -> Self {
        let mut hist = Self::default();
        hist.witness();
        labels.into_iter().for_each(|l| hist.increment(l));
        hist
    }
}

#[cfg(feature = "serde")]
impl<L: Label> serde::Serialize for Histogram<L> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, count) in self.counts.iter() {
            map.serialize_entry(label.name(), count)?;
        }
        map.end()
    }
}

impl<L: Label> std::fmt::Display for Histogram<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, count) in self.counts.iter() {
            writeln!(f, "{:<16}{:>12}", label.name(), count)?;
        }
        write!(f, "{:<16}{:>12}", "hands", self.mass)
    }
}
