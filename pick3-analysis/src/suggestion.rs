use pick3_db::models::{FullNumber, Position};

use crate::frequency::PositionFrequencyTable;

/// Numéro candidat : le chiffre le plus fréquent de chaque position.
///
/// À égalité, le plus petit chiffre l'emporte ; un dataset vide donne donc
/// `000`. C'est à l'appelant de vérifier la taille du dataset s'il veut
/// distinguer ce cas.
pub fn suggest(table: &PositionFrequencyTable) -> FullNumber {
    FullNumber(Position::ALL.map(|p| table.position(p).most_frequent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::compute_frequencies;
    use crate::test_support::dataset;
    use pick3_db::models::Dataset;

    #[test]
    fn test_suggest_most_frequent() {
        let ds = dataset(&[
            ("2024-01-01", "D", "123"),
            ("2024-01-02", "E", "123"),
            ("2024-01-03", "D", "456"),
        ]);
        assert_eq!(suggest(&compute_frequencies(&ds)).to_string(), "123");
    }

    #[test]
    fn test_suggest_tie_picks_smallest_digit() {
        let ds = dataset(&[
            ("2024-01-01", "D", "984"),
            ("2024-01-02", "E", "271"),
        ]);
        assert_eq!(suggest(&compute_frequencies(&ds)).to_string(), "271");
    }

    #[test]
    fn test_suggest_empty_dataset() {
        assert_eq!(suggest(&compute_frequencies(&Dataset::default())).to_string(), "000");
    }
}
