use chrono::{NaiveDate, NaiveDateTime};

use pick3_db::error::{Pick3Error, Result};
use pick3_db::models::{Dataset, Digit, DrawRecord, Position, Session};

/// En-tête attendu des fichiers de tirages.
pub const EXPECTED_HEADER: [&str; 5] = ["Date", "DrawType", "D1", "D2", "D3"];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Construit un `Dataset` à partir de lignes brutes `Date, DrawType, D1, D2, D3`.
///
/// La première ligne invalide interrompt tout l'import : aucun dataset
/// partiel n'est jamais renvoyé. Zéro ligne donne un dataset vide, valide.
pub fn ingest<I, R, S>(rows: I) -> Result<Dataset>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let fields: Vec<S> = row.into_iter().collect();
            parse_row(i + 1, &fields)
        })
        .collect::<Result<Vec<_>>>()?;
    log::debug!("{} tirages ingérés", records.len());
    Ok(Dataset::new(records))
}

/// Valide une ligne ; `row` est le numéro (1-based) rapporté dans les erreurs.
pub fn parse_row<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<DrawRecord> {
    let [date, session, d1, d2, d3] = fields else {
        return Err(Pick3Error::FieldCount { row, found: fields.len() });
    };

    let date = parse_date(row, date.as_ref())?;
    let session = Session::from_code(session.as_ref()).ok_or_else(|| Pick3Error::Validation {
        row,
        code: session.as_ref().to_string(),
    })?;
    let digits = [
        parse_digit(row, Position::D1, d1.as_ref())?,
        parse_digit(row, Position::D2, d2.as_ref())?,
        parse_digit(row, Position::D3, d3.as_ref())?,
    ];

    Ok(DrawRecord::new(date, session, digits))
}

fn parse_date(row: usize, raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok().map(|dt| dt.date()))
        .ok_or_else(|| Pick3Error::Parse {
            row,
            field: "Date",
            value: raw.to_string(),
        })
}

/// Un seul caractère 0-9, ou un nombre entier de tableur comme `7.0`.
fn parse_digit(row: usize, position: Position, raw: &str) -> Result<Digit> {
    let s = raw.trim();
    let s = s
        .strip_suffix(".0")
        .filter(|rest| !rest.is_empty())
        .unwrap_or(s);

    let mut chars = s.chars();
    let digit = match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c),
        _ => None,
    };

    digit.ok_or_else(|| Pick3Error::Parse {
        row,
        field: position_name(position),
        value: raw.to_string(),
    })
}

fn position_name(position: Position) -> &'static str {
    match position {
        Position::D1 => "D1",
        Position::D2 => "D2",
        Position::D3 => "D3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_basic_rows() {
        let ds = ingest([
            ["2024-01-01", "D", "1", "2", "3"],
            ["2024-01-01", "E", "0", "0", "9"],
        ])
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].session(), Session::Day);
        assert_eq!(ds.records()[1].session(), Session::Evening);
        assert_eq!(ds.records()[1].full_number().to_string(), "009");
    }

    #[test]
    fn test_ingest_keeps_input_order() {
        let ds = ingest([
            ["2024-03-01", "D", "1", "1", "1"],
            ["2024-01-01", "D", "2", "2", "2"],
        ])
        .unwrap();
        assert_eq!(ds.records()[0].full_number().to_string(), "111");
        assert_eq!(ds.records()[1].full_number().to_string(), "222");
    }

    #[test]
    fn test_ingest_empty_is_valid() {
        let rows: Vec<Vec<String>> = vec![];
        let ds = ingest(rows).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_invalid_session_aborts() {
        let err = ingest([
            ["2024-01-01", "D", "1", "2", "3"],
            ["2024-01-02", "X", "1", "2", "3"],
            ["2024-01-03", "E", "1", "2", "3"],
        ])
        .unwrap_err();
        assert!(matches!(err, Pick3Error::Validation { row: 2, ref code } if code == "X"));
    }

    #[test]
    fn test_invalid_digit_aborts() {
        let err = ingest([["2024-01-01", "D", "1", "12", "3"]]).unwrap_err();
        assert!(matches!(err, Pick3Error::Parse { row: 1, field: "D2", .. }));

        let err = ingest([["2024-01-01", "D", "1", "2", ""]]).unwrap_err();
        assert!(matches!(err, Pick3Error::Parse { field: "D3", .. }));

        let err = ingest([["2024-01-01", "D", "a", "2", "3"]]).unwrap_err();
        assert!(matches!(err, Pick3Error::Parse { field: "D1", .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = ingest([vec!["2024-01-01", "D", "1", "2"]]).unwrap_err();
        assert!(matches!(err, Pick3Error::FieldCount { row: 1, found: 4 }));
    }

    #[test]
    fn test_digit_normalization() {
        let r = parse_row(1, &["2024-01-01", " D ", " 7 ", "0.0", "5.0"]).unwrap();
        assert_eq!(r.full_number().to_string(), "705");
        assert!(parse_row(1, &["2024-01-01", "D", ".0", "1", "2"]).is_err());
        assert!(parse_row(1, &["2024-01-01", "D", "7.5", "1", "2"]).is_err());
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
        for raw in ["2024-02-17", "02/17/2024", "2024-02-17 00:00:00"] {
            let r = parse_row(1, &[raw, "D", "1", "2", "3"]).unwrap();
            assert_eq!(r.date(), expected, "format {raw}");
        }
        let err = parse_row(4, &["17.02.2024", "D", "1", "2", "3"]).unwrap_err();
        assert!(matches!(err, Pick3Error::Parse { row: 4, field: "Date", .. }));
    }
}
