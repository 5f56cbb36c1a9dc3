use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use pick3_db::models::{Dataset, Digit};

/// Dernière apparition d'un chiffre. `Never` précède toute date, ce qui
/// donne directement l'ordre « en retard » (le plus ancien d'abord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LastSeen {
    Never,
    On(NaiveDate),
}

impl LastSeen {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            LastSeen::Never => None,
            LastSeen::On(date) => Some(date),
        }
    }
}

impl std::fmt::Display for LastSeen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LastSeen::Never => write!(f, "jamais"),
            LastSeen::On(date) => write!(f, "{date}"),
        }
    }
}

impl Serialize for LastSeen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.date().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecencyEntry {
    pub digit: Digit,
    pub last_seen: LastSeen,
    /// Tirages écoulés depuis la dernière apparition (ordre du dataset).
    pub draws_since: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecencyTable {
    entries: [RecencyEntry; 10],
}

impl RecencyTable {
    pub fn get(&self, digit: Digit) -> &RecencyEntry {
        &self.entries[digit.index()]
    }

    pub fn last_seen(&self, digit: Digit) -> LastSeen {
        self.get(digit).last_seen
    }

    /// Entrées par chiffre croissant.
    pub fn entries(&self) -> &[RecencyEntry] {
        &self.entries
    }

    /// Les dix chiffres du plus en retard au plus récent ; à date égale,
    /// par chiffre croissant.
    pub fn overdue(&self) -> Vec<RecencyEntry> {
        let mut sorted = self.entries.to_vec();
        sorted.sort_by_key(|e| (e.last_seen, e.digit));
        sorted
    }
}

pub fn compute_recency(dataset: &Dataset) -> RecencyTable {
    let n = dataset.len();
    let mut entries = Digit::ALL.map(|digit| RecencyEntry {
        digit,
        last_seen: LastSeen::Never,
        draws_since: None,
    });

    for (i, record) in dataset.records().iter().enumerate() {
        for digit in Digit::ALL {
            if !record.contains(digit) {
                continue;
            }
            let entry = &mut entries[digit.index()];
            // Le dataset n'est pas retrié : on garde la date maximale.
            let seen = LastSeen::On(record.date());
            if seen > entry.last_seen {
                entry.last_seen = seen;
            }
            entry.draws_since = Some(n - 1 - i);
        }
    }

    RecencyTable { entries }
}
