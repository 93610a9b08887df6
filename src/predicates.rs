//! Pure boolean tests over a fixed-size hand.
//!
//! Every predicate takes the hand plus an attribute accessor, so the same
//! test serves suits and instruments, ranks and note letters alike. None of
//! them care about the order of the hand and none of them can fail: a hand
//! that does not match simply yields `false`.

/// All items share the same key.
pub fn uniform<T, K, F>(hand: &[T], key: F) -> bool
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    let mut keys = hand.iter().map(key);
    match keys.next() {
        None => true,
        Some(first) => keys.all(|k| k == first),
    }
}

/// The values form a run of `hand.len()` distinct consecutive integers.
///
/// Values are folded into a bitset and the run is found by repeated
/// shift-and, so the hand does not need to be sorted first. Values must be
/// below 32.
pub fn consecutive<T, F>(hand: &[T], value: F) -> bool
where
    F: Fn(&T) -> u8,
{
    if hand.is_empty() {
        return false;
    }
    let bits = bitset(hand, value);
    if bits.count_ones() as usize != hand.len() {
        return false;
    }
    let mut run = bits;
    for _ in 1..hand.len() {
        run &= run << 1;
    }
    run != 0
}

/// Every key in `0..n` occurs at least once. `n` and keys must be below 32.
pub fn covers<T, F>(hand: &[T], key: F, n: u8) -> bool
where
    F: Fn(&T) -> u8,
{
    debug_assert!((n as usize) < Frequency::KEYS, "covers: n {} out of range", n);
    let full = (1u32 << n) - 1;
    bitset(hand, key) & full == full
}

/// OR of `1 << key` over the hand. Keys must be below 32.
pub fn bitset<T, F>(hand: &[T], key: F) -> u32
where
    F: Fn(&T) -> u8,
{
    hand.iter()
        .map(|t| key(t))
        .inspect(|&k| debug_assert!((k as usize) < Frequency::KEYS, "key {} out of range", k))
        .map(|k| 1u32 << k)
        .fold(0u32, |a, b| a | b)
}

/// How many items of the hand share each key.
///
/// Rebuilt for every hand. Keys are small integers (ranks, pitch classes)
/// and index a fixed array, so building one never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency([u8; Frequency::KEYS]);

impl Frequency {
    /// Exclusive upper bound on keys, here and for every bitset predicate.
    pub const KEYS: usize = 32;

    /// Panics if a key is `KEYS` or more.
    pub fn of<T, F>(hand: &[T], key: F) -> Self
    where
        F: Fn(&T) -> u8,
    {
        let mut counts = [0u8; Self::KEYS];
        for item in hand {
            let k = key(item) as usize;
            assert!(k < Self::KEYS, "frequency key {} out of range", k);
            counts[k] += 1;
        }
        Self(counts)
    }
    /// Items sharing `key`.
    pub fn count(&self, key: u8) -> usize {
        self.0[key as usize] as usize
    }
    /// Number of keys that occur exactly `n` times.
    pub fn groups(&self, n: usize) -> usize {
        self.0.iter().filter(|&&c| c as usize == n).count()
    }
    /// Some key occurs exactly `n` times.
    pub fn exactly(&self, n: usize) -> bool {
        self.0.iter().any(|&c| c as usize == n)
    }
}
