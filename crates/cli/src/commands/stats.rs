//! Commande d'inspection d'un fichier FASTA

use crate::{display, StatsFormat};
use anyhow::Result;
use fastagen_core::{read_fasta, CompositionStats};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled, Serialize)]
struct CompositionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "A")]
    count_a: usize,
    #[tabled(rename = "C")]
    count_c: usize,
    #[tabled(rename = "G")]
    count_g: usize,
    #[tabled(rename = "T")]
    count_t: usize,
    #[tabled(rename = "GC%")]
    gc_percent: String,
}

pub fn run(input: PathBuf, format: StatsFormat, output: Option<PathBuf>) -> Result<()> {
    println!("📊 Statistiques de: {}", input.display());

    // 1. Lire les enregistrements
    let records = read_fasta(&input)?;
    println!("{} séquences chargées", records.len());

    // 2. Construire les lignes de composition
    //    Les symboles hors alphabet (un nom inséré, par exemple) sont
    //    ignorés par les comptes
    let rows: Vec<CompositionRow> = records
        .iter()
        .map(|record| {
            let stats = CompositionStats::from_text(&record.sequence);
            CompositionRow {
                id: record.id.clone(),
                length: record.sequence.chars().count(),
                count_a: stats.count_a,
                count_c: stats.count_c,
                count_g: stats.count_g,
                count_t: stats.count_t,
                gc_percent: format!("{:.1}%", stats.pct_cg()),
            }
        })
        .collect();

    // 3. Afficher selon le format
    match format {
        StatsFormat::Table => {
            println!();
            println!("{}", Table::new(rows));
            display::stats::display_summary(&records);
        }
        StatsFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)?;

            if let Some(output) = output {
                std::fs::write(&output, json)?;
                println!("JSON écrit dans: {}", output.display());
            } else {
                println!("\n{}", json);
            }
        }
    }

    Ok(())
}
