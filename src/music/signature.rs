use super::accidental::Accidental;
use super::note::Note;
use super::pitch::Pitch;

const B: Accidental = Accidental::Flat;
const N: Accidental = Accidental::Natural;
const X: Accidental = Accidental::Sharp;

/// A diatonic key signature: the accidental each of the seven letters
/// takes in one major key and in its relative natural minor.
///
/// Major and relative minor share the same seven pitches, so one record
/// covers both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySignature {
    major: Pitch,
    minor: Pitch,
    letters: [Accidental; Note::COUNT],
}

impl KeySignature {
    const fn new(major: Pitch, minor: Pitch, letters: [Accidental; Note::COUNT]) -> Self {
        Self {
            major,
            minor,
            letters,
        }
    }
    /// Tonic of the major key.
    pub fn major(&self) -> Pitch {
        self.major
    }
    /// Tonic of the relative natural minor.
    pub fn minor(&self) -> Pitch {
        self.minor
    }
    /// Accidental required on `note`.
    pub fn accidental(&self, note: Note) -> Accidental {
        self.letters[note as usize]
    }
    /// The seven pitches of the scale, starting from C.
    pub fn pitches(&self) -> [Pitch; Note::COUNT] {
        Note::all().map(|n| Pitch::new(n, self.accidental(n)))
    }
    /// Two bits per letter slot, C in the lowest bits.
    pub const fn mask(&self) -> u16 {
        let mut mask = 0u16;
        let mut i = 0;
        while i < Note::COUNT {
            mask |= self.letters[i].bits() << (2 * i);
            i += 1;
        }
        mask
    }
}

impl std::fmt::Display for KeySignature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} major / {} minor", self.major, self.minor)
    }
}

const fn p(note: Note, accidental: Accidental) -> Pitch {
    Pitch::new(note, accidental)
}

/// Major keys by number of flats, 0 through 7.
/// Flats are applied in the order B E A D G C F.
#[rustfmt::skip]
pub const FLAT_KEYS: [KeySignature; 8] = [
    //                                                C  D  E  F  G  A  B
    KeySignature::new(p(Note::C, N), p(Note::A, N), [N, N, N, N, N, N, N]),
    KeySignature::new(p(Note::F, N), p(Note::D, N), [N, N, N, N, N, N, B]),
    KeySignature::new(p(Note::B, B), p(Note::G, N), [N, N, B, N, N, N, B]),
    KeySignature::new(p(Note::E, B), p(Note::C, N), [N, N, B, N, N, B, B]),
    KeySignature::new(p(Note::A, B), p(Note::F, N), [N, B, B, N, N, B, B]),
    KeySignature::new(p(Note::D, B), p(Note::B, B), [N, B, B, N, B, B, B]),
    KeySignature::new(p(Note::G, B), p(Note::E, B), [B, B, B, N, B, B, B]),
    KeySignature::new(p(Note::C, B), p(Note::A, B), [B, B, B, B, B, B, B]),
];

/// Major keys by number of sharps, 0 through 7.
/// Sharps are applied in the order F C G D A E B.
#[rustfmt::skip]
pub const SHARP_KEYS: [KeySignature; 8] = [
    //                                                C  D  E  F  G  A  B
    KeySignature::new(p(Note::C, N), p(Note::A, N), [N, N, N, N, N, N, N]),
    KeySignature::new(p(Note::G, N), p(Note::E, N), [N, N, N, X, N, N, N]),
    KeySignature::new(p(Note::D, N), p(Note::B, N), [X, N, N, X, N, N, N]),
    KeySignature::new(p(Note::A, N), p(Note::F, X), [X, N, N, X, X, N, N]),
    KeySignature::new(p(Note::E, N), p(Note::C, X), [X, X, N, X, X, N, N]),
    KeySignature::new(p(Note::B, N), p(Note::G, X), [X, X, N, X, X, X, N]),
    KeySignature::new(p(Note::F, X), p(Note::D, X), [X, X, X, X, X, X, N]),
    KeySignature::new(p(Note::C, X), p(Note::A, X), [X, X, X, X, X, X, X]),
];
