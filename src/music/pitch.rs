use super::accidental::Accidental;
use super::note::Note;

/// A spelled pitch: note letter plus accidental.
///
/// Spelling matters: `C#` and `Db` are different pitches here. The index
/// `note * 3 + accidental` is the pitch class used to group tones that
/// sound the same on different instruments.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pitch {
    note: Note,
    accidental: Accidental,
}

impl Pitch {
    pub const COUNT: usize = Note::COUNT * Accidental::COUNT;
    pub const fn new(note: Note, accidental: Accidental) -> Self {
        Self { note, accidental }
    }
    pub fn note(&self) -> Note {
        self.note
    }
    pub fn accidental(&self) -> Accidental {
        self.accidental
    }
    /// `note * 3 + accidental`, in `0..21`.
    pub fn class(&self) -> u8 {
        u8::from(self.note) * Accidental::COUNT as u8 + u8::from(self.accidental)
    }
}

/// (Note, Accidental) isomorphism
impl From<(Note, Accidental)> for Pitch {
    fn from((note, accidental): (Note, Accidental)) -> Self {
        Self::new(note, accidental)
    }
}

/// u8 isomorphism over pitch classes
impl From<u8> for Pitch {
    fn from(n: u8) -> Self {
        Self::new(
            Note::from(n / Accidental::COUNT as u8),
            Accidental::from(n % Accidental::COUNT as u8),
        )
    }
}
impl From<Pitch> for u8 {
    fn from(p: Pitch) -> u8 {
        p.class()
    }
}

/// str isomorphism: `C`, `C#`, `Db`
impl TryFrom<&str> for Pitch {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        let note = chars
            .next()
            .ok_or_else(|| format!("empty pitch str: {:?}", s))?
            .to_string();
        let note = Note::try_from(note.as_str())?;
        let accidental = Accidental::try_from(chars.as_str())?;
        Ok(Self::new(note, accidental))
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.note, self.accidental)
    }
}
