use serde::Serialize;

use pick3_db::models::{Dataset, FullNumber};

use crate::config::AnalysisConfig;
use crate::frequency::{compute_frequencies, PositionFrequencyTable};
use crate::recency::{compute_recency, RecencyTable};
use crate::session::{session_distribution, SessionDistribution};
use crate::streak::{window_frequency, StreakTable};
use crate::suggestion::suggest;
use crate::transition::{top_transitions, TransitionCount};

/// Toutes les statistiques d'un dataset, prêtes pour l'affichage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub draw_count: usize,
    pub window: usize,
    pub frequencies: PositionFrequencyTable,
    pub suggestion: FullNumber,
    pub top_transitions: Vec<TransitionCount>,
    pub recency: RecencyTable,
    pub streaks: StreakTable,
    pub sessions: SessionDistribution,
}

impl AnalysisReport {
    /// Les analyseurs sont indépendants et tournent en parallèle ; seule la
    /// suggestion attend la table des fréquences.
    pub fn compute(dataset: &Dataset, config: &AnalysisConfig) -> Self {
        let ((frequencies, transitions), (recency, (streaks, sessions))) = rayon::join(
            || {
                rayon::join(
                    || compute_frequencies(dataset),
                    || top_transitions(dataset, config.top_transitions),
                )
            },
            || {
                rayon::join(
                    || compute_recency(dataset),
                    || {
                        rayon::join(
                            || window_frequency(dataset, config.window),
                            || session_distribution(dataset),
                        )
                    },
                )
            },
        );
        let suggestion = suggest(&frequencies);

        log::debug!(
            "Analyse de {} tirages : suggestion {}, {} transitions, {} chiffres actifs",
            dataset.len(),
            suggestion,
            transitions.len(),
            streaks.len()
        );

        Self {
            draw_count: dataset.len(),
            window: config.window.min(dataset.len()),
            frequencies,
            suggestion,
            top_transitions: transitions,
            recency,
            streaks,
            sessions,
        }
    }
}
