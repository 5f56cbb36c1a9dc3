use serde::ser::{Serialize, SerializeMap, Serializer};

use pick3_db::models::{Digit, DrawRecord, Position};

/// Compteur par chiffre ; les dix chiffres sont toujours présents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitCounts([u32; 10]);

impl DigitCounts {
    pub fn get(&self, digit: Digit) -> u32 {
        self.0[digit.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// (chiffre, compte) par chiffre croissant.
    pub fn iter(&self) -> impl Iterator<Item = (Digit, u32)> + '_ {
        Digit::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Chiffre le plus fréquent ; en cas d'égalité, le plus petit.
    pub fn most_frequent(&self) -> Digit {
        let mut best = Digit::ALL[0];
        for (digit, count) in self.iter() {
            if count > self.get(best) {
                best = digit;
            }
        }
        best
    }

    fn add(&mut self, digit: Digit) {
        self.0[digit.index()] += 1;
    }
}

impl Serialize for DigitCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(10))?;
        for (digit, count) in self.iter() {
            map.serialize_entry(&digit, &count)?;
        }
        map.end()
    }
}

/// Compte les occurrences de chaque chiffre sur les positions données d'une
/// sous-suite quelconque de tirages.
pub fn count_digits<'a, I>(records: I, positions: &[Position]) -> DigitCounts
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    let mut counts = DigitCounts::default();
    for record in records {
        for &position in positions {
            counts.add(record.digit(position));
        }
    }
    counts
}
