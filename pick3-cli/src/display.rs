use comfy_table::{Table, ContentArrangement, presets::UTF8_FULL, Cell, Color, Row};

use crate::import::ImportResult;
use pick3_analysis::{AnalysisReport, LastSeen};
use pick3_db::models::{Digit, DrawRecord, FullNumber, Position, Session};

fn new_table(header: impl Into<Row>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn display_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = new_table(vec!["Date", "Tirage", "Numéro"]);
    for draw in draws {
        table.add_row(vec![
            draw.date().to_string(),
            draw.session().to_string(),
            draw.full_number().to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Total lignes lues : {}", result.total_records);
    println!("  Insérés           : {}", result.inserted);
    println!("  Doublons ignorés  : {}", result.skipped);
}

pub fn display_suggestion(suggestion: FullNumber) {
    println!("\n🎯 Numéro suggéré : {suggestion}");
}

pub fn display_report(report: &AnalysisReport) {
    println!("\n📊 Statistiques sur {} tirages\n", report.draw_count);

    display_suggestion(report.suggestion);

    println!("\n── Fréquence des chiffres par position ──");
    let mut header = vec!["Position".to_string()];
    header.extend(Digit::ALL.iter().map(|d| d.to_string()));
    let mut table = new_table(header);
    for position in Position::ALL {
        let counts = report.frequencies.position(position);
        let best = counts.most_frequent();
        let mut row = vec![Cell::new(position.to_string())];
        row.extend(counts.iter().map(|(digit, count)| {
            let cell = Cell::new(count);
            if digit == best && count > 0 {
                cell.fg(Color::Green)
            } else {
                cell
            }
        }));
        table.add_row(row);
    }
    println!("{table}");

    println!("\n── Jour / Soir (toutes positions) ──");
    let mut header = vec!["Tirage".to_string()];
    header.extend(Digit::ALL.iter().map(|d| d.to_string()));
    let mut table = new_table(header);
    for session in Session::ALL {
        let mut row = vec![session.to_string()];
        row.extend(report.sessions.session(session).iter().map(|(_, c)| c.to_string()));
        table.add_row(row);
    }
    println!("{table}");

    println!("\n── Transitions les plus fréquentes ──");
    if report.top_transitions.is_empty() {
        println!("Pas assez de tirages pour former une transition.");
    } else {
        let mut table = new_table(vec!["#", "Transition", "Occurrences"]);
        for (i, t) in report.top_transitions.iter().enumerate() {
            table.add_row(vec![
                format!("{}", i + 1),
                format!("{} ➜ {}", t.from, t.to),
                t.count.to_string(),
            ]);
        }
        println!("{table}");
    }

    println!("\n── Chiffres en retard ──");
    let mut table = new_table(vec!["Chiffre", "Dernière sortie", "Tirages depuis"]);
    for entry in report.recency.overdue() {
        let color = match entry.last_seen {
            LastSeen::Never => Color::Red,
            LastSeen::On(_) => Color::White,
        };
        table.add_row(vec![
            Cell::new(entry.digit),
            Cell::new(entry.last_seen).fg(color),
            Cell::new(entry.draws_since.map_or("—".to_string(), |n| n.to_string())),
        ]);
    }
    println!("{table}");

    println!("\n── Chiffres actifs ({} derniers tirages) ──", report.window);
    if report.streaks.is_empty() {
        println!("Aucun chiffre dans la fenêtre.");
    } else {
        let mut table = new_table(vec!["Chiffre", "Occurrences"]);
        for (digit, count) in report.streaks.most_active() {
            table.add_row(vec![digit.to_string(), count.to_string()]);
        }
        println!("{table}");
    }
}
