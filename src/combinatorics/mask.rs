/// A selector mask over a domain of at most 128 items.
///
/// Bit `i` is set when domain item `i` belongs to the selection. Like a
/// hand bitset, this lets a whole k-subset live in a single word, so the
/// generator never touches the heap while advancing.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mask(u128);

impl Mask {
    pub fn empty() -> Self {
        Self(0)
    }
    /// Number of selected items.
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, index: usize) -> bool {
        index < 128 && self.0 & (1 << index) != 0
    }
    /// Selected items of `domain`, in domain order.
    pub fn pick<T: Copy>(&self, domain: &[T]) -> Vec<T> {
        let mut hand = Vec::with_capacity(self.size());
        self.pick_into(domain, &mut hand);
        hand
    }
    /// Same as [`Mask::pick`] but refills a caller-owned buffer.
    pub fn pick_into<T: Copy>(&self, domain: &[T], hand: &mut Vec<T>) {
        hand.clear();
        hand.extend(self.into_iter().map(|i| domain[i]));
    }
}

/// drains set bits from low to high, yielding domain indices
impl Iterator for Mask {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(index)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u128 isomorphism
impl From<u128> for Mask {
    fn from(n: u128) -> Self {
        Self(n)
    }
}
impl From<Mask> for u128 {
    fn from(m: Mask) -> Self {
        m.0
    }
}

/// index-list isomorphism (up to permutation; indices come back sorted)
impl From<&[usize]> for Mask {
    fn from(indices: &[usize]) -> Self {
        Self(indices.iter().fold(0u128, |m, &i| m | (1 << i)))
    }
}
impl From<Mask> for Vec<usize> {
    fn from(m: Mask) -> Self {
        m.collect()
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_low_to_high() {
        let mask = Mask::from(0b1010_0110u128);
        assert_eq!(Vec::<usize>::from(mask), vec![1, 2, 5, 7]);
    }

    #[test]
    fn bijective_indices() {
        let indices = [0usize, 3, 64, 104, 127];
        let mask = Mask::from(&indices[..]);
        assert_eq!(mask.size(), 5);
        assert!(mask.contains(104));
        assert!(!mask.contains(105));
        assert_eq!(Vec::<usize>::from(mask), indices.to_vec());
    }

    #[test]
    fn picks_in_domain_order() {
        let domain = ['a', 'b', 'c', 'd', 'e'];
        let mask = Mask::from(0b10101u128);
        assert_eq!(mask.pick(&domain), vec!['a', 'c', 'e']);
        let ref mut buffer = vec!['z'; 9];
        Mask::from(0b00010u128).pick_into(&domain, buffer);
        assert_eq!(buffer, &vec!['b']);
    }
}
