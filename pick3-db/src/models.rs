use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::Pick3Error;

/// Un chiffre 0-9, affiché comme son caractère.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0), Digit(1), Digit(2), Digit(3), Digit(4),
        Digit(5), Digit(6), Digit(7), Digit(8), Digit(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Digit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    D1,
    D2,
    D3,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::D1, Position::D2, Position::D3];

    pub fn index(self) -> usize {
        match self {
            Position::D1 => 0,
            Position::D2 => 1,
            Position::D3 => 2,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::D1 => write!(f, "D1"),
            Position::D2 => write!(f, "D2"),
            Position::D3 => write!(f, "D3"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Session {
    Day,
    Evening,
}

impl Session {
    pub const ALL: [Session; 2] = [Session::Day, Session::Evening];

    /// Code de tirage tel qu'il apparaît dans les fichiers : `D` ou `E`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "D" => Some(Session::Day),
            "E" => Some(Session::Evening),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Session::Day => "D",
            Session::Evening => "E",
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Session::Day => write!(f, "Day"),
            Session::Evening => write!(f, "Evening"),
        }
    }
}

/// Numéro complet D1‖D2‖D3, toujours trois caractères.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FullNumber(pub [Digit; 3]);

impl FullNumber {
    pub fn digit(&self, position: Position) -> Digit {
        self.0[position.index()]
    }
}

impl std::fmt::Display for FullNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl Serialize for FullNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    date: NaiveDate,
    session: Session,
    digits: [Digit; 3],
}

impl DrawRecord {
    pub fn new(date: NaiveDate, session: Session, digits: [Digit; 3]) -> Self {
        Self { date, session, digits }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn digits(&self) -> &[Digit; 3] {
        &self.digits
    }

    pub fn digit(&self, position: Position) -> Digit {
        self.digits[position.index()]
    }

    pub fn full_number(&self) -> FullNumber {
        FullNumber(self.digits)
    }

    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }
}

/// Historique ordonné des tirages. L'ordre d'entrée est pris comme
/// chronologique (le plus ancien en premier) ; rien n'est retrié.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<DrawRecord>,
}

impl Dataset {
    pub fn new(records: Vec<DrawRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Les `min(n, len)` derniers tirages.
    pub fn tail(&self, n: usize) -> &[DrawRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn ensure_non_empty(&self) -> Result<&Self, Pick3Error> {
        if self.records.is_empty() {
            return Err(Pick3Error::EmptyDataset);
        }
        Ok(self)
    }
}
