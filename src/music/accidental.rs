/// Flat, natural or sharp. The discriminant is the 2-bit code used in
/// packed key signatures.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Accidental {
    Flat = 0,
    #[default]
    Natural = 1,
    Sharp = 2,
}

impl Accidental {
    pub const COUNT: usize = 3;
    pub const fn all() -> [Accidental; 3] {
        [Accidental::Flat, Accidental::Natural, Accidental::Sharp]
    }
    pub const fn bits(&self) -> u16 {
        *self as u16
    }
}

/// u8 isomorphism
impl From<u8> for Accidental {
    fn from(n: u8) -> Accidental {
        match n {
            0 => Accidental::Flat,
            1 => Accidental::Natural,
            2 => Accidental::Sharp,
            _ => panic!("invalid accidental u8: {}", n),
        }
    }
}
impl From<Accidental> for u8 {
    fn from(a: Accidental) -> u8 {
        a as u8
    }
}

/// str isomorphism; the empty string is a natural
impl TryFrom<&str> for Accidental {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "b" | "♭" => Ok(Accidental::Flat),
            "" | "n" | "♮" => Ok(Accidental::Natural),
            "#" | "♯" => Ok(Accidental::Sharp),
            _ => Err(format!("invalid accidental str: {}", s)),
        }
    }
}

impl std::fmt::Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Accidental::Flat => write!(f, "b"),
            Accidental::Natural => Ok(()),
            Accidental::Sharp => write!(f, "#"),
        }
    }
}
