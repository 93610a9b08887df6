use super::accidental::Accidental;
use super::instrument::Instrument;
use super::note::Note;
use super::pitch::Pitch;
use crate::Arbitrary;

/// A musical card: one pitch played on one instrument.
///
/// Encoded as its position in the [`Orchestra`]:
/// `instrument * 21 + note * 3 + accidental`.
///
/// Parses from the instrument letter followed by a pitch, e.g. `pC#`
/// (piano C sharp), `vBb` (violin B flat), `gE` (guitar E natural).
///
/// [`Orchestra`]: super::orchestra::Orchestra
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tone(u8);

impl Tone {
    pub fn instrument(&self) -> Instrument {
        Instrument::from(self.0 / Pitch::COUNT as u8)
    }
    pub fn pitch(&self) -> Pitch {
        Pitch::from(self.0 % Pitch::COUNT as u8)
    }
    pub fn note(&self) -> Note {
        self.pitch().note()
    }
    pub fn accidental(&self) -> Accidental {
        self.pitch().accidental()
    }
    /// `note * 3 + accidental`; equal for the same pitch on any instrument.
    pub fn pitch_class(&self) -> u8 {
        self.0 % Pitch::COUNT as u8
    }
    /// Parses whitespace-separated tone notations.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Instrument, Pitch) isomorphism
impl From<(Instrument, Pitch)> for Tone {
    fn from((instrument, pitch): (Instrument, Pitch)) -> Self {
        Self(u8::from(instrument) * Pitch::COUNT as u8 + u8::from(pitch))
    }
}

/// u8 isomorphism
impl From<Tone> for u8 {
    fn from(t: Tone) -> u8 {
        t.0
    }
}
impl From<u8> for Tone {
    fn from(n: u8) -> Self {
        assert!(
            (n as usize) < Instrument::COUNT * Pitch::COUNT,
            "invalid tone u8: {}",
            n
        );
        Self(n)
    }
}

/// str isomorphism
impl TryFrom<&str> for Tone {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        let instrument = chars
            .next()
            .ok_or_else(|| format!("empty tone str: {:?}", s))?
            .to_string();
        let instrument = Instrument::try_from(instrument.as_str())?;
        let pitch = Pitch::try_from(chars.as_str())?;
        Ok(Self::from((instrument, pitch)))
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.instrument(), self.pitch())
    }
}

impl Arbitrary for Tone {
    fn random() -> Self {
        Self(rand::random_range(0..(Instrument::COUNT * Pitch::COUNT) as u8))
    }
}
