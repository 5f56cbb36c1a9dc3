//! Statistiques descriptives sur un historique de tirages Pick 3 : fréquences
//! par position, numéro candidat, transitions, retards et séries récentes.
//!
//! Toutes les analyses sont des fonctions pures d'un `Dataset` immuable.

pub mod config;
pub mod counting;
pub mod frequency;
pub mod ingest;
pub mod recency;
pub mod report;
pub mod session;
pub mod streak;
pub mod suggestion;
pub mod transition;

pub use config::AnalysisConfig;
pub use counting::DigitCounts;
pub use frequency::{compute_frequencies, PositionFrequencyTable};
pub use ingest::ingest;
pub use recency::{compute_recency, LastSeen, RecencyEntry, RecencyTable};
pub use report::AnalysisReport;
pub use session::{session_distribution, SessionDistribution};
pub use streak::{window_frequency, StreakTable};
pub use suggestion::suggest;
pub use transition::{top_transitions, transition_table, TransitionCount, TransitionTable};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use pick3_db::models::{Dataset, Digit, FullNumber};

    pub fn digit(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn number(s: &str) -> FullNumber {
        let d: Vec<Digit> = s.chars().map(|c| Digit::from_char(c).unwrap()).collect();
        FullNumber([d[0], d[1], d[2]])
    }

    /// (date, code de tirage, numéro complet)
    pub fn dataset(rows: &[(&str, &str, &str)]) -> Dataset {
        let rows = rows.iter().map(|&(date, session, n)| {
            let d: Vec<String> = n.chars().map(String::from).collect();
            vec![date.to_string(), session.to_string(), d[0].clone(), d[1].clone(), d[2].clone()]
        });
        crate::ingest::ingest(rows).unwrap()
    }
}
