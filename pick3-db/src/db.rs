use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

use crate::error::Result;
use crate::models::{Dataset, Digit, DrawRecord, Session};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS draws (
    date     TEXT NOT NULL,
    session  TEXT NOT NULL CHECK (session IN ('D', 'E')),
    d1       INTEGER NOT NULL CHECK (d1 BETWEEN 0 AND 9),
    d2       INTEGER NOT NULL CHECK (d2 BETWEEN 0 AND 9),
    d3       INTEGER NOT NULL CHECK (d3 BETWEEN 0 AND 9),
    PRIMARY KEY (date, session)
);
";

pub fn db_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("pick3.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Connection::open(path)?)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Insère un tirage ; renvoie `false` si (date, session) existe déjà.
pub fn insert_draw(conn: &Connection, draw: &DrawRecord) -> Result<bool> {
    let [d1, d2, d3] = *draw.digits();
    let changed = conn.execute(
        "INSERT OR IGNORE INTO draws (date, session, d1, d2, d3) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            draw.date(),
            draw.session().code(),
            d1.value(),
            d2.value(),
            d3.value(),
        ],
    )?;
    Ok(changed > 0)
}

fn row_to_draw(row: &rusqlite::Row<'_>) -> rusqlite::Result<DrawRecord> {
    let date: NaiveDate = row.get(0)?;
    let code: String = row.get(1)?;
    let session = Session::from_code(&code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("code de tirage invalide : {code}").into(),
        )
    })?;
    let mut digits = [Digit::ALL[0]; 3];
    for (i, slot) in digits.iter_mut().enumerate() {
        let raw: u8 = row.get(2 + i)?;
        *slot = Digit::new(raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2 + i,
                rusqlite::types::Type::Integer,
                format!("chiffre hors limites : {raw}").into(),
            )
        })?;
    }
    Ok(DrawRecord::new(date, session, digits))
}

/// Tout l'historique en ordre chronologique (Day avant Evening le même jour).
pub fn fetch_dataset(conn: &Connection) -> Result<Dataset> {
    let mut stmt = conn.prepare(
        "SELECT date, session, d1, d2, d3 FROM draws ORDER BY date ASC, session ASC",
    )?;
    let records = stmt
        .query_map([], row_to_draw)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(Dataset::new(records))
}

/// Les derniers tirages, le plus récent en premier.
pub fn fetch_last_draws(conn: &Connection, limit: u32) -> Result<Vec<DrawRecord>> {
    let mut stmt = conn.prepare(
        "SELECT date, session, d1, d2, d3 FROM draws ORDER BY date DESC, session DESC LIMIT ?1",
    )?;
    let draws = stmt
        .query_map([limit], row_to_draw)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(draws)
}

pub fn count_draws(conn: &Connection) -> Result<u32> {
    let count: u32 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_draw(date: &str, session: Session, digits: [u8; 3]) -> DrawRecord {
        DrawRecord::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            session,
            digits.map(|v| Digit::new(v).unwrap()),
        )
    }

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_count() {
        let conn = memory_db();
        assert_eq!(count_draws(&conn).unwrap(), 0);

        insert_draw(&conn, &test_draw("2024-01-01", Session::Day, [1, 2, 3])).unwrap();
        assert_eq!(count_draws(&conn).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_ignored() {
        let conn = memory_db();
        let draw = test_draw("2024-01-01", Session::Day, [1, 2, 3]);

        assert!(insert_draw(&conn, &draw).unwrap());
        assert!(!insert_draw(&conn, &draw).unwrap());
        assert_eq!(count_draws(&conn).unwrap(), 1);

        // Même date, autre session : tirage distinct
        let evening = test_draw("2024-01-01", Session::Evening, [1, 2, 3]);
        assert!(insert_draw(&conn, &evening).unwrap());
        assert_eq!(count_draws(&conn).unwrap(), 2);
    }

    #[test]
    fn test_fetch_dataset_chronological() {
        let conn = memory_db();
        insert_draw(&conn, &test_draw("2024-01-02", Session::Day, [4, 5, 6])).unwrap();
        insert_draw(&conn, &test_draw("2024-01-01", Session::Evening, [0, 0, 7])).unwrap();
        insert_draw(&conn, &test_draw("2024-01-01", Session::Day, [1, 2, 3])).unwrap();

        let ds = fetch_dataset(&conn).unwrap();
        let numbers: Vec<String> = ds.records().iter().map(|r| r.full_number().to_string()).collect();
        assert_eq!(numbers, vec!["123", "007", "456"]);
        assert_eq!(ds.records()[1].session(), Session::Evening);
    }

    #[test]
    fn test_fetch_last_draws_newest_first() {
        let conn = memory_db();
        insert_draw(&conn, &test_draw("2024-01-01", Session::Day, [1, 2, 3])).unwrap();
        insert_draw(&conn, &test_draw("2024-01-05", Session::Day, [4, 5, 6])).unwrap();
        insert_draw(&conn, &test_draw("2024-01-03", Session::Evening, [7, 8, 9])).unwrap();

        let draws = fetch_last_draws(&conn, 2).unwrap();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].date().to_string(), "2024-01-05");
        assert_eq!(draws[1].date().to_string(), "2024-01-03");
    }
}
