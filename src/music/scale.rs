use super::note::Note;
use super::signature::FLAT_KEYS;
use super::signature::KeySignature;
use super::signature::SHARP_KEYS;
use super::tone::Tone;

/// Five consecutive letters on the seven-letter circle, one arc per
/// starting letter. C..G, D..A and E..B are straight runs; the other four
/// wrap from B back to C.
pub const WINDOWS: [u8; Note::COUNT] = windows();

const fn windows() -> [u8; Note::COUNT] {
    let run = 0b11111u8;
    let mut arcs = [0u8; Note::COUNT];
    let mut s = 0;
    while s < Note::COUNT {
        arcs[s] = ((run << s) | (run >> (Note::COUNT - s))) & 0b1111111;
        s += 1;
    }
    arcs
}

/// Scale matching over a hand of tones.
///
/// A hand is a scale when its five letters form one of the [`WINDOWS`] and
/// the accidentals on those five letters agree with some key signature.
/// Both the hand and the signatures are reduced to packed bits: a 7-bit
/// letter set and 2 bits of accidental per letter slot.
pub struct Scale;

impl Scale {
    /// Which of the seven letters appear, ignoring accidental and instrument.
    pub fn letters(hand: &[Tone]) -> u8 {
        hand.iter()
            .map(|t| 1u8 << u8::from(t.note()))
            .fold(0u8, |a, b| a | b)
    }
    /// Accidental code of each present letter in its 2-bit slot.
    ///
    /// Only meaningful when no letter appears twice.
    pub fn accidentals(hand: &[Tone]) -> u16 {
        hand.iter()
            .map(|t| t.accidental().bits() << (2 * u8::from(t.note())))
            .fold(0u16, |a, b| a | b)
    }
    /// Slot mask covering the 2-bit accidental slots of a letter set.
    pub fn slots(letters: u8) -> u16 {
        (0..Note::COUNT)
            .filter(|i| letters & (1 << i) != 0)
            .map(|i| 0b11u16 << (2 * i))
            .fold(0u16, |a, b| a | b)
    }
    /// The window the hand's letters fill exactly, if any.
    pub fn window(hand: &[Tone]) -> Option<u8> {
        let letters = Self::letters(hand);
        WINDOWS.iter().copied().find(|&w| w == letters)
    }
    /// First key signature (flat keys, then sharp keys) the hand is a
    /// five-letter window of.
    ///
    /// Enharmonic spellings such as Cb major and B major are separate
    /// entries and each is tried; only the first match is reported.
    pub fn find(hand: &[Tone]) -> Option<&'static KeySignature> {
        let window = Self::window(hand)?;
        let slots = Self::slots(window);
        let accidentals = Self::accidentals(hand) & slots;
        FLAT_KEYS
            .iter()
            .chain(SHARP_KEYS.iter())
            .find(|key| key.mask() & slots == accidentals)
    }
    pub fn detect(hand: &[Tone]) -> bool {
        Self::find(hand).is_some()
    }
}
