use crate::histogram::Label;

/// A musical hand pattern.
///
/// Tags are not exclusive: a hand earns every tag whose predicate holds,
/// and always earns [`Tag::All`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tag {
    All,
    Solo,
    Ensemble,
    Scale,
    SoloScale,
    Run,
    SameNote,
    SameAccidental,
    Pair,
    Triple,
    Quad,
    Quintuple,
    TwoPair,
    FullHouse,
}

impl Tag {
    /// The tag for a pitch class occurring exactly `n` times.
    pub fn multiple(n: usize) -> Option<Self> {
        match n {
            2 => Some(Tag::Pair),
            3 => Some(Tag::Triple),
            4 => Some(Tag::Quad),
            5 => Some(Tag::Quintuple),
            _ => None,
        }
    }
}

impl Label for Tag {
    fn all() -> &'static [Self] {
        &[
            Tag::All,
            Tag::Solo,
            Tag::Ensemble,
            Tag::Scale,
            Tag::SoloScale,
            Tag::Run,
            Tag::SameNote,
            Tag::SameAccidental,
            Tag::Pair,
            Tag::Triple,
            Tag::Quad,
            Tag::Quintuple,
            Tag::TwoPair,
            Tag::FullHouse,
        ]
    }
    fn name(&self) -> &'static str {
        match self {
            Tag::All => "All",
            Tag::Solo => "Solo",
            Tag::Ensemble => "Ensemble",
            Tag::Scale => "Scale",
            Tag::SoloScale => "SoloScale",
            Tag::Run => "Run",
            Tag::SameNote => "SameNote",
            Tag::SameAccidental => "SameAccidental",
            Tag::Pair => "Pair",
            Tag::Triple => "Triple",
            Tag::Quad => "Quad",
            Tag::Quintuple => "Quintuple",
            Tag::TwoPair => "TwoPair",
            Tag::FullHouse => "FullHouse",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_is_declaration_order() {
        let all = Tag::all();
        assert_eq!(all.len(), 14);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0], Tag::All);
        assert_eq!(all[13], Tag::FullHouse);
    }

    #[test]
    fn multiples() {
        assert_eq!(Tag::multiple(1), None);
        assert_eq!(Tag::multiple(2), Some(Tag::Pair));
        assert_eq!(Tag::multiple(5), Some(Tag::Quintuple));
        assert_eq!(Tag::multiple(6), None);
    }
}
