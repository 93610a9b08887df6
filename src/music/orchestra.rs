use super::accidental::Accidental;
use super::instrument::Instrument;
use super::note::Note;
use super::pitch::Pitch;
use super::tone::Tone;
use crate::domain::Domain;

/// The 105-tone musical deck: instruments outermost, then note letters,
/// then accidentals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orchestra(Vec<Tone>);

impl Default for Orchestra {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestra {
    pub const SIZE: usize = Instrument::COUNT * Note::COUNT * Accidental::COUNT;
    pub fn new() -> Self {
        let mut tones = Vec::with_capacity(Self::SIZE);
        for instrument in Instrument::all() {
            for note in Note::all() {
                for accidental in Accidental::all() {
                    tones.push(Tone::from((instrument, Pitch::new(note, accidental))));
                }
            }
        }
        Self(tones)
    }
}

impl Domain for Orchestra {
    type Item = Tone;
    fn items(&self) -> &[Tone] {
        &self.0
    }
    fn index(&self, tone: &Tone) -> Option<usize> {
        Some(u8::from(*tone) as usize)
    }
}
