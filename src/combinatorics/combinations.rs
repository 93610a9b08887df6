use super::selector::Selector;
use crate::error::Result;

/// Every k-item hand drawn from a borrowed domain, in [`Selector`] order.
///
/// Items keep their domain order inside each hand.
pub struct Combinations<'a, T> {
    domain: &'a [T],
    selector: Selector,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(domain: &'a [T], k: usize) -> Result<Self> {
        Ok(Self {
            domain,
            selector: Selector::new(domain.len(), k)?,
        })
    }
    /// Hands still to come.
    pub fn combinations(&self) -> u128 {
        self.selector.combinations()
    }
}

impl<'a, T: Copy> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        self.selector.next().map(|mask| mask.pick(self.domain))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.selector.size_hint()
    }
}
