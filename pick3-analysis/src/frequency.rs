use serde::Serialize;

use pick3_db::models::{Dataset, Digit, Position};

use crate::counting::{count_digits, DigitCounts};

/// Fréquence de chaque chiffre, position par position. Aussi la matrice
/// position × chiffre affichée en carte de chaleur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionFrequencyTable {
    #[serde(rename = "D1")]
    d1: DigitCounts,
    #[serde(rename = "D2")]
    d2: DigitCounts,
    #[serde(rename = "D3")]
    d3: DigitCounts,
}

impl PositionFrequencyTable {
    pub fn position(&self, position: Position) -> &DigitCounts {
        match position {
            Position::D1 => &self.d1,
            Position::D2 => &self.d2,
            Position::D3 => &self.d3,
        }
    }

    pub fn get(&self, position: Position, digit: Digit) -> u32 {
        self.position(position).get(digit)
    }
}

pub fn compute_frequencies(dataset: &Dataset) -> PositionFrequencyTable {
    let records = dataset.records();
    PositionFrequencyTable {
        d1: count_digits(records, &[Position::D1]),
        d2: count_digits(records, &[Position::D2]),
        d3: count_digits(records, &[Position::D3]),
    }
}
