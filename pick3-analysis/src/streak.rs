use std::collections::BTreeMap;

use serde::Serialize;

use pick3_db::models::{Dataset, Digit, Position};

use crate::counting::count_digits;

pub const DEFAULT_WINDOW: usize = 30;

/// Activité des chiffres sur la fenêtre récente. Seuls les chiffres vus dans
/// la fenêtre figurent dans la table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StreakTable {
    counts: BTreeMap<Digit, u32>,
}

impl StreakTable {
    pub fn get(&self, digit: Digit) -> Option<u32> {
        self.counts.get(&digit).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Digit, u32)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Du plus actif au moins actif ; à égalité, par chiffre croissant.
    pub fn most_active(&self) -> Vec<(Digit, u32)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Compte les chiffres, toutes positions confondues, sur les
/// `min(window, len)` derniers tirages.
pub fn window_frequency(dataset: &Dataset, window: usize) -> StreakTable {
    let counts = count_digits(dataset.tail(window), &Position::ALL);
    StreakTable {
        counts: counts.iter().filter(|&(_, c)| c > 0).collect(),
    }
}
