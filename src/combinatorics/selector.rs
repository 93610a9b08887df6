use super::mask::Mask;
use crate::error::Error;
use crate::error::Result;

/// Selector walks every k-subset of an n-item domain exactly once.
///
/// State is a single `u128` with exactly k bits set, so domains of up to
/// 128 items are supported. Successive masks come from Gosper's hack, which
/// visits the subsets in increasing numeric order (colexicographic order
/// over domain indices). A selector also carries how many masks it has left
/// to yield, which lets the full sequence be cut into contiguous ranges
/// with [`Selector::partition`] and each range walked independently.
///
/// - Memory: O(1), the sequence is never materialized
/// - Time per `.next()`: O(1)
/// - Deterministic: the same (n, k) always yields the same order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    next: u128,
    n: usize,
    k: usize,
    left: u128,
}

impl Selector {
    /// Largest domain a single word can index.
    pub const MAX_DOMAIN: usize = 128;

    /// Starts at the lowest k-subset, `{0, 1, .., k-1}`.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        Self::validate(n, k)?;
        Ok(Self {
            next: Self::lowest(k),
            n,
            k,
            left: binomial(n, k),
        })
    }

    /// Starts at the subset of the given colexicographic rank and yields
    /// everything after it.
    pub fn starting_at(n: usize, k: usize, rank: u128) -> Result<Self> {
        Self::validate(n, k)?;
        let total = binomial(n, k);
        if rank >= total {
            return Err(Error::InvalidCombinationParameters { n, k });
        }
        Ok(Self {
            next: unrank(n, k, rank),
            n,
            k,
            left: total - rank,
        })
    }

    /// Splits the whole C(n, k) sequence into at most `parts` contiguous,
    /// non-overlapping ranges whose union is the full sequence.
    pub fn partition(n: usize, k: usize, parts: usize) -> Result<Vec<Self>> {
        Self::validate(n, k)?;
        let total = binomial(n, k);
        let parts = (parts.max(1) as u128).min(total);
        let chunk = total / parts;
        let extra = total % parts;
        let mut start = 0u128;
        let mut ranges = Vec::with_capacity(parts as usize);
        for i in 0..parts {
            let len = chunk + if i < extra { 1 } else { 0 };
            ranges.push(Self {
                next: unrank(n, k, start),
                n,
                k,
                left: len,
            });
            start += len;
        }
        Ok(ranges)
    }

    pub fn n(&self) -> usize {
        self.n
    }
    pub fn k(&self) -> usize {
        self.k
    }
    /// Masks still to be yielded.
    pub fn combinations(&self) -> u128 {
        self.left
    }

    fn validate(n: usize, k: usize) -> Result<()> {
        if k == 0 || k > n || n > Self::MAX_DOMAIN {
            Err(Error::InvalidCombinationParameters { n, k })
        } else {
            Ok(())
        }
    }
    fn lowest(k: usize) -> u128 {
        u128::MAX >> (128 - k)
    }
    fn exhausted(&self) -> bool {
        self.left == 0
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u128 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a.wrapping_add(1);
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d.wrapping_sub(1);
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e.checked_shr(f).unwrap_or(0);
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn look(&self) -> Mask {
        Mask::from(self.next)
    }
    fn advance(&mut self) {
        self.left -= 1;
        if !self.exhausted() {
            self.next = self.permute();
        }
    }
}

impl Iterator for Selector {
    type Item = Mask;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// C(n, k) by the multiplicative formula, dividing out common factors
/// first so intermediates never exceed the result.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u128, |x, i| {
        let num = (n - i) as u128;
        let den = (i + 1) as u128;
        let g = gcd(x, den);
        (x / g) * (num / (den / g))
    })
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Mask of the k-subset at colexicographic `rank` (combinatorial number system).
fn unrank(n: usize, k: usize, mut rank: u128) -> u128 {
    let mut mask = 0u128;
    let mut c = n;
    for i in (1..=k).rev() {
        c -= 1;
        while binomial(c, i) > rank {
            c -= 1;
        }
        rank -= binomial(c, i);
        mask |= 1 << c;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn five_choose_three() {
        let mut iter = Selector::new(5, 3).unwrap();
        assert!(iter.next() == Some(Mask::from(0b00111)));
        assert!(iter.next() == Some(Mask::from(0b01011)));
        assert!(iter.next() == Some(Mask::from(0b01101)));
        assert!(iter.next() == Some(Mask::from(0b01110)));
        assert!(iter.next() == Some(Mask::from(0b10011)));
        assert!(iter.next() == Some(Mask::from(0b10101)));
        assert!(iter.next() == Some(Mask::from(0b10110)));
        assert!(iter.next() == Some(Mask::from(0b11001)));
        assert!(iter.next() == Some(Mask::from(0b11010)));
        assert!(iter.next() == Some(Mask::from(0b11100)));
        assert!(iter.next() == None);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Selector::new(4, 5).is_err());
        assert!(Selector::new(52, 0).is_err());
        assert!(Selector::new(129, 5).is_err());
        assert_eq!(
            Selector::new(3, 4),
            Err(Error::InvalidCombinationParameters { n: 3, k: 4 })
        );
    }

    #[test]
    fn binomial_identities() {
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(105, 5), 96_560_646);
        assert_eq!(binomial(7, 0), 1);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(128, 64), 23951146041928082866135587776380551750);
        for n in 1..20 {
            for k in 1..n {
                assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
            }
        }
    }

    #[test]
    fn visits_every_subset_once() {
        let masks = Selector::new(12, 4).unwrap().collect::<Vec<Mask>>();
        let unique = masks.iter().copied().collect::<HashSet<Mask>>();
        assert_eq!(masks.len(), 495);
        assert_eq!(unique.len(), 495);
        assert!(masks.iter().all(|m| m.size() == 4));
        assert!(masks.iter().all(|m| u128::from(*m) < 1 << 12));
        assert!(masks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn matches_nested_loop_listing() {
        let mut reference = HashSet::new();
        for a in 0..9usize {
            for b in a + 1..9 {
                for c in b + 1..9 {
                    reference.insert(Mask::from(&[a, b, c][..]));
                }
            }
        }
        let masks = Selector::new(9, 3).unwrap().collect::<HashSet<Mask>>();
        assert_eq!(masks, reference);
    }

    #[test]
    fn full_domain_single_subset() {
        let mut iter = Selector::new(128, 128).unwrap();
        assert_eq!(iter.combinations(), 1);
        assert_eq!(iter.next(), Some(Mask::from(u128::MAX)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn starting_at_resumes_mid_sequence() {
        let full = Selector::new(10, 3).unwrap().collect::<Vec<Mask>>();
        for rank in [0usize, 1, 17, 119] {
            let tail = Selector::starting_at(10, 3, rank as u128)
                .unwrap()
                .collect::<Vec<Mask>>();
            assert_eq!(tail, full[rank..].to_vec());
        }
        assert!(Selector::starting_at(10, 3, 120).is_err());
    }

    #[test]
    fn partition_covers_sequence() {
        let full = Selector::new(11, 4).unwrap().collect::<Vec<Mask>>();
        let parts = Selector::partition(11, 4, 7).unwrap();
        assert_eq!(parts.len(), 7);
        assert_eq!(parts.iter().map(|p| p.combinations()).sum::<u128>(), 330);
        let joined = parts.into_iter().flatten().collect::<Vec<Mask>>();
        assert_eq!(joined, full);
    }

    #[test]
    fn partition_never_exceeds_total() {
        let parts = Selector::partition(5, 5, 8).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].combinations(), 1);
    }
}
