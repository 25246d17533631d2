//! Affichage des statistiques

use fastagen_core::{CompositionStats, FastaRecord};

/// Affiche la composition d'une séquence, un pourcentage par ligne
pub fn display_composition(stats: &CompositionStats) {
    println!("\n📊 Statistiques de la séquence:");
    println!("   A: {:.1}%", stats.pct_a());
    println!("   C: {:.1}%", stats.pct_c());
    println!("   G: {:.1}%", stats.pct_g());
    println!("   T: {:.1}%", stats.pct_t());
    println!("   %CG: {:.1}%", stats.pct_cg());
}

/// Affiche le résumé global d'un ensemble d'enregistrements
pub fn display_summary(records: &[FastaRecord]) {
    if records.is_empty() {
        println!("Aucune séquence à afficher");
        return;
    }

    let total_length: usize = records.iter().map(|r| r.sequence.chars().count()).sum();
    let avg_gc: f64 = records
        .iter()
        .map(|r| CompositionStats::from_text(&r.sequence).pct_cg())
        .sum::<f64>()
        / records.len() as f64;

    println!("\n┌────────────────────────────────────────────────┐");
    println!("│ Statistiques Globales                          │");
    println!("├────────────────────────────────────────────────┤");
    println!("│ Nombre de séquences    : {:>8}              │", records.len());
    println!("│ Longueur totale        : {:>8} caractères   │", total_length);
    println!("│ GC moyen               : {:>8.1}%              │", avg_gc);
    println!("└────────────────────────────────────────────────┘");
}
