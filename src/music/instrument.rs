/// The five instruments of the musical deck; they play the role of suits.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Instrument {
    #[default]
    Piano = 0,
    Violin = 1,
    Guitar = 2,
    Flute = 3,
    Drum = 4,
}

impl Instrument {
    pub const COUNT: usize = 5;
    pub const fn all() -> [Instrument; 5] {
        [
            Instrument::Piano,
            Instrument::Violin,
            Instrument::Guitar,
            Instrument::Flute,
            Instrument::Drum,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Instrument {
    fn from(n: u8) -> Instrument {
        match n {
            0 => Instrument::Piano,
            1 => Instrument::Violin,
            2 => Instrument::Guitar,
            3 => Instrument::Flute,
            4 => Instrument::Drum,
            _ => panic!("invalid instrument u8: {}", n),
        }
    }
}
impl From<Instrument> for u8 {
    fn from(i: Instrument) -> u8 {
        i as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Instrument {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "p" | "piano" => Ok(Instrument::Piano),
            "v" | "violin" => Ok(Instrument::Violin),
            "g" | "guitar" => Ok(Instrument::Guitar),
            "f" | "flute" => Ok(Instrument::Flute),
            "d" | "drum" => Ok(Instrument::Drum),
            _ => Err(format!("invalid instrument str: {}", s)),
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Instrument::Piano => write!(f, "p"),
            Instrument::Violin => write!(f, "v"),
            Instrument::Guitar => write!(f, "g"),
            Instrument::Flute => write!(f, "f"),
            Instrument::Drum => write!(f, "d"),
        }
    }
}
