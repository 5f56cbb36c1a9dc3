//! Scénario de bout en bout : trois tirages, toutes les analyses.

use chrono::NaiveDate;
use pick3_analysis::{
    compute_frequencies, compute_recency, ingest, suggest, top_transitions, window_frequency,
    LastSeen,
};
use pick3_db::error::Pick3Error;
use pick3_db::models::{Dataset, Digit, Position};

fn digit(v: u8) -> Digit {
    Digit::new(v).unwrap()
}

fn sample() -> Dataset {
    ingest([
        ["2024-01-01", "D", "1", "2", "3"],
        ["2024-01-02", "E", "1", "2", "3"],
        ["2024-01-03", "D", "4", "5", "6"],
    ])
    .unwrap()
}

#[test]
fn test_frequencies() {
    let table = compute_frequencies(&sample());
    let d1: Vec<u32> = table.position(Position::D1).iter().map(|(_, c)| c).collect();
    assert_eq!(d1, vec![0, 2, 0, 0, 1, 0, 0, 0, 0, 0]);
    assert_eq!(table.position(Position::D2).most_frequent(), digit(2));
    assert_eq!(table.get(Position::D2, digit(2)), 2);
    assert_eq!(table.position(Position::D3).most_frequent(), digit(3));
    assert_eq!(table.get(Position::D3, digit(3)), 2);
}

#[test]
fn test_suggestion() {
    assert_eq!(suggest(&compute_frequencies(&sample())).to_string(), "123");
}

#[test]
fn test_transitions() {
    let top = top_transitions(&sample(), 10);
    let pairs: Vec<(String, String, u32)> = top
        .iter()
        .map(|t| (t.from.to_string(), t.to.to_string(), t.count))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("123".to_string(), "123".to_string(), 1),
            ("123".to_string(), "456".to_string(), 1),
        ]
    );
}

#[test]
fn test_recency() {
    let table = compute_recency(&sample());
    let day = |s| LastSeen::On(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap());
    assert_eq!(table.last_seen(digit(1)), day("2024-01-02"));
    assert_eq!(table.last_seen(digit(6)), day("2024-01-03"));
    assert_eq!(table.last_seen(digit(7)), LastSeen::Never);
    assert_eq!(table.overdue()[0].last_seen, LastSeen::Never);
}

#[test]
fn test_streaks() {
    let table = window_frequency(&sample(), 30);
    let got: Vec<(u8, u32)> = table.iter().map(|(d, c)| (d.value(), c)).collect();
    assert_eq!(got, vec![(1, 2), (2, 2), (3, 2), (4, 1), (5, 1), (6, 1)]);
}

#[test]
fn test_bad_row_rejects_whole_input() {
    let result = ingest([
        ["2024-01-01", "D", "1", "2", "3"],
        ["2024-01-02", "N", "1", "2", "3"],
    ]);
    assert!(matches!(result, Err(Pick3Error::Validation { row: 2, .. })));
}

#[test]
fn test_empty_dataset_reported_on_demand() {
    let empty: Vec<[&str; 5]> = vec![];
    let ds = ingest(empty).unwrap();
    assert!(matches!(ds.ensure_non_empty(), Err(Pick3Error::EmptyDataset)));
    assert!(top_transitions(&ds, 10).is_empty());
    assert!(window_frequency(&ds, 30).is_empty());
}
