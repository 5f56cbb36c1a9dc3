use serde::Serialize;

use pick3_db::models::{Dataset, Position, Session};

use crate::counting::{count_digits, DigitCounts};

/// Répartition des chiffres (toutes positions) entre tirages de jour et du soir.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionDistribution {
    pub day: DigitCounts,
    pub evening: DigitCounts,
}

impl SessionDistribution {
    pub fn session(&self, session: Session) -> &DigitCounts {
        match session {
            Session::Day => &self.day,
            Session::Evening => &self.evening,
        }
    }
}

pub fn session_distribution(dataset: &Dataset) -> SessionDistribution {
    let of = |session: Session| {
        count_digits(
            dataset.records().iter().filter(|r| r.session() == session),
            &Position::ALL,
        )
    };
    SessionDistribution {
        day: of(Session::Day),
        evening: of(Session::Evening),
    }
}
