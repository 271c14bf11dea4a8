use std::{convert::Infallible, fmt, str::FromStr};

/// A letter grade as entered by the user.
///
/// Grades are free text: anything outside the known letters is kept verbatim as [Grade::Unknown]
/// and is worth zero grade points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Grade {
    A,
    BPlus,
    B,
    CPlus,
    C,
    D,
    F,
    Unknown(String),
}

impl Grade {
    pub const KNOWN: [Grade; 7] = [
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    /// Trims and upper-cases `input` before matching it against the known letters.
    pub fn parse(input: &str) -> Grade {
        let normalized = input.trim().to_uppercase();
        match normalized.as_str() {
            "A" => Grade::A,
            "B+" => Grade::BPlus,
            "B" => Grade::B,
            "C+" => Grade::CPlus,
            "C" => Grade::C,
            "D" => Grade::D,
            "F" => Grade::F,
            _ => Grade::Unknown(normalized),
        }
    }

    pub fn points(&self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::BPlus => 3.5,
            Grade::B => 3.0,
            Grade::CPlus => 2.5,
            Grade::C => 2.0,
            Grade::D => 1.0,
            Grade::F | Grade::Unknown(_) => 0.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::Unknown(text) => text,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Grade::Unknown(_))
    }
}

impl FromStr for Grade {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Grade::parse(s))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
