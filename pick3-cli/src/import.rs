use anyhow::{Context, Result};
use pick3_db::rusqlite::Connection;
use std::path::Path;

use pick3_analysis::ingest::{ingest, EXPECTED_HEADER};
use pick3_db::db::insert_draw;
use pick3_db::models::Dataset;

/// Lit un CSV `Date,DrawType,D1,D2,D3` ligne par ligne, sans l'en-tête.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;

    let header = reader.headers().context("En-tête illisible")?;
    if header.iter().ne(EXPECTED_HEADER) {
        // Les colonnes sont lues par position, comme dans les exports d'origine.
        log::warn!(
            "En-tête inattendu {:?} (attendu {:?}), colonnes lues par position",
            header.iter().collect::<Vec<_>>(),
            EXPECTED_HEADER
        );
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Erreur lecture ligne {}", i + 1))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let rows = read_rows(path)?;
    ingest(rows).with_context(|| format!("Fichier {:?} rejeté", path))
}

pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
}

/// Importe tout le fichier ou rien : une ligne invalide annule l'import.
pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let dataset = load_dataset(path)?;

    let tx = conn
        .unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    let mut result = ImportResult {
        total_records: dataset.len() as u32,
        inserted: 0,
        skipped: 0,
    };

    for draw in dataset.records() {
        if insert_draw(&tx, draw)? {
            result.inserted += 1;
        } else {
            result.skipped += 1;
        }
    }

    tx.commit().context("Échec du commit")?;
    log::info!(
        "Import de {:?} : {} insérés, {} doublons",
        path,
        result.inserted,
        result.skipped
    );
    Ok(result)
}
