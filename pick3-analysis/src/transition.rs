use std::collections::HashMap;

use serde::Serialize;

use pick3_db::models::{Dataset, FullNumber};

pub const DEFAULT_TOP_TRANSITIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionCount {
    pub from: FullNumber,
    pub to: FullNumber,
    pub count: u32,
}

/// Toutes les paires consécutives distinctes, dans l'ordre de leur première
/// apparition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    entries: Vec<TransitionCount>,
}

impl TransitionTable {
    pub fn entries(&self) -> &[TransitionCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, from: FullNumber, to: FullNumber) -> u32 {
        self.entries
            .iter()
            .find(|t| t.from == from && t.to == to)
            .map_or(0, |t| t.count)
    }

    /// Les `k` paires les plus fréquentes. Le tri est stable : à compte égal,
    /// la paire apparue la première passe devant.
    pub fn top(&self, k: usize) -> Vec<TransitionCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(k);
        sorted
    }
}

pub fn transition_table(dataset: &Dataset) -> TransitionTable {
    let mut index: HashMap<(FullNumber, FullNumber), usize> = HashMap::new();
    let mut entries: Vec<TransitionCount> = Vec::new();

    for pair in dataset.records().windows(2) {
        let key = (pair[0].full_number(), pair[1].full_number());
        match index.get(&key) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(key, entries.len());
                entries.push(TransitionCount { from: key.0, to: key.1, count: 1 });
            }
        }
    }

    TransitionTable { entries }
}

pub fn top_transitions(dataset: &Dataset, k: usize) -> Vec<TransitionCount> {
    transition_table(dataset).top(k)
}
