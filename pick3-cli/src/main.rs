mod display;
mod import;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pick3_analysis::ingest::parse_row;
use pick3_analysis::{compute_frequencies, suggest, AnalysisConfig, AnalysisReport};
use pick3_db::db::{count_draws, db_path, fetch_dataset, fetch_last_draws, insert_draw, migrate, open_db};
use pick3_db::models::Dataset;
use pick3_db::rusqlite::Connection;
use crate::display::{display_draws, display_import_summary, display_report, display_suggestion};

#[derive(Parser)]
#[command(name = "pick3", about = "Statistiques descriptives sur les tirages Pick 3")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importer les tirages depuis un fichier CSV (Date,DrawType,D1,D2,D3)
    Import {
        /// Chemin vers le fichier CSV
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,

    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Afficher toutes les statistiques
    Stats {
        /// Analyser directement un CSV au lieu de la base
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Fenêtre des chiffres actifs (nombre de tirages)
        #[arg(short, long)]
        window: Option<usize>,

        /// Nombre de transitions à afficher
        #[arg(short, long)]
        top: Option<usize>,

        /// Fichier de configuration JSON
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Afficher le numéro suggéré par les fréquences
    Suggest {
        /// Analyser directement un CSV au lieu de la base
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Ajouter un tirage manuellement
    Add,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let path = db_path();

    match cli.command {
        Command::Import { file } => cmd_import(&open_store(&path)?, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&open_store(&path)?, last),
        Command::Stats {
            file,
            window,
            top,
            config,
            json,
        } => {
            let mut config = match config {
                Some(p) => AnalysisConfig::load(&p)
                    .with_context(|| format!("Configuration {:?} invalide", p))?,
                None => AnalysisConfig::default(),
            };
            if let Some(w) = window {
                config.window = w;
            }
            if let Some(k) = top {
                config.top_transitions = k;
            }
            cmd_stats(&path, file.as_deref(), &config, json)
        }
        Command::Suggest { file } => cmd_suggest(&path, file.as_deref()),
        Command::Add => cmd_add(&open_store(&path)?),
    }
}

fn open_store(path: &Path) -> Result<Connection> {
    let conn = open_db(path).with_context(|| format!("Impossible d'ouvrir la base {:?}", path))?;
    migrate(&conn).context("Échec de la migration")?;
    Ok(conn)
}

/// Le dataset vient du CSV s'il est donné, sinon de la base.
fn load(db: &Path, file: Option<&Path>) -> Result<Dataset> {
    match file {
        Some(f) => import::load_dataset(f),
        None => Ok(fetch_dataset(&open_store(db)?)?),
    }
}

fn cmd_import(conn: &Connection, file: &Path) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &Connection, last: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : pick3 import --file <csv>");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(db: &Path, file: Option<&Path>, config: &AnalysisConfig, json: bool) -> Result<()> {
    let dataset = load(db, file)?;
    if dataset.ensure_non_empty().is_err() {
        println!("Aucun tirage. Lancez d'abord : pick3 import --file <csv>");
        return Ok(());
    }

    let report = AnalysisReport::compute(&dataset, config);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }
    Ok(())
}

fn cmd_suggest(db: &Path, file: Option<&Path>) -> Result<()> {
    let dataset = load(db, file)?;
    if dataset.ensure_non_empty().is_err() {
        println!("Aucun tirage. Lancez d'abord : pick3 import --file <csv>");
        return Ok(());
    }
    display_suggestion(suggest(&compute_frequencies(&dataset)));
    Ok(())
}

fn cmd_add(conn: &Connection) -> Result<()> {
    println!("Ajout d'un tirage manuellement\n");

    let date = prompt("Date (AAAA-MM-JJ) : ")?;
    let session = prompt("Tirage (D = jour, E = soir) : ")?;
    let number = prompt("Numéro (3 chiffres, ex: 047) : ")?;

    let digits: Vec<String> = number.chars().map(String::from).collect();
    let mut fields = vec![date, session];
    fields.extend(digits);
    let draw = parse_row(1, &fields).context("Tirage invalide")?;

    println!("\nTirage à insérer :");
    display_draws(std::slice::from_ref(&draw));

    let confirm = prompt("\nConfirmer l'insertion ? (o/n) : ")?;
    if confirm.trim().to_lowercase() == "o" {
        if insert_draw(conn, &draw)? {
            println!("Tirage inséré avec succès.");
        } else {
            println!("Ce tirage existe déjà (doublon ignoré).");
        }
    } else {
        println!("Insertion annulée.");
    }

    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}
