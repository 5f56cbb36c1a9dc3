use thiserror::Error;

pub type Result<T> = std::result::Result<T, Pick3Error>;

/// Erreurs d'ingestion et de stockage. Les numéros de ligne commencent à 1
/// et ne comptent pas l'en-tête.
#[derive(Error, Debug)]
pub enum Pick3Error {
    /// Code de tirage inconnu (ni `D` ni `E`).
    #[error("Ligne {row} : code de tirage '{code}' invalide (attendu D ou E)")]
    Validation { row: usize, code: String },

    /// Champ chiffre ou date illisible.
    #[error("Ligne {row} : impossible de parser {field} depuis '{value}'")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Ligne {row} : 5 champs attendus (Date, DrawType, D1, D2, D3), {found} trouvés")]
    FieldCount { row: usize, found: usize },

    #[error("Aucun tirage à analyser")]
    EmptyDataset,

    #[error("Erreur SQLite : {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Erreur d'E/S : {0}")]
    Io(#[from] std::io::Error),
}
