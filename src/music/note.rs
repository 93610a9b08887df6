/// One of the seven note letters, in scale order starting from C.
///
/// Letters sit on a circle: B is followed by C again. Scale windows are
/// contiguous arcs of that circle.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Note {
    #[default]
    C = 0,
    D = 1,
    E = 2,
    F = 3,
    G = 4,
    A = 5,
    B = 6,
}

impl Note {
    pub const COUNT: usize = 7;
    pub const fn all() -> [Note; 7] {
        [Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B]
    }
}

/// u8 isomorphism
impl From<u8> for Note {
    fn from(n: u8) -> Note {
        match n {
            0 => Note::C,
            1 => Note::D,
            2 => Note::E,
            3 => Note::F,
            4 => Note::G,
            5 => Note::A,
            6 => Note::B,
            _ => panic!("invalid note u8: {}", n),
        }
    }
}
impl From<Note> for u8 {
    fn from(n: Note) -> u8 {
        n as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Note {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Note::C),
            "D" => Ok(Note::D),
            "E" => Ok(Note::E),
            "F" => Ok(Note::F),
            "G" => Ok(Note::G),
            "A" => Ok(Note::A),
            "B" => Ok(Note::B),
            _ => Err(format!("invalid note str: {}", s)),
        }
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
