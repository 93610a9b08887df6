/// Everything that can go wrong while building a generator or classifying a hand.
///
/// Errors are local: a bad hand is skipped by the caller, a bad generator
/// means no enumeration happens at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid hand size: expected {expected} cards, found {found}")]
    InvalidHandSize { expected: usize, found: usize },
    #[error("cannot choose {k} of {n} items")]
    InvalidCombinationParameters { n: usize, k: usize },
    #[error("duplicate card in hand: {0}")]
    DuplicateItem(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Parse(s)
    }
}
impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Parse(s.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
