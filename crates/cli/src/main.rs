//! CLI pour le générateur de séquences FASTA

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;
mod prompt;

use commands::{generate, stats};

#[derive(Parser)]
#[command(name = "fastagen")]
#[command(about = "Génération de séquences ADN aléatoires au format FASTA", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Génère une séquence aléatoire et l'écrit en FASTA
    Generate {
        /// Longueur de la séquence (demandée interactivement si absente)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        length: Option<u64>,

        /// Identifiant de la séquence
        #[arg(short, long)]
        id: Option<String>,

        /// Description libre
        #[arg(short, long)]
        description: Option<String>,

        /// Nom de l'auteur, inséré tel quel dans la séquence écrite
        #[arg(short, long)]
        name: Option<String>,

        /// Seed du générateur, pour une sortie reproductible
        #[arg(short, long)]
        seed: Option<u64>,

        /// Écrase le fichier de sortie sans confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Affiche les statistiques de composition d'un fichier FASTA
    Stats {
        /// Fichier FASTA d'entrée
        #[arg(short, long)]
        input: PathBuf,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: StatsFormat,

        /// Exporter en fichier (JSON uniquement)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum StatsFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fastagen_core::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            length,
            id,
            description,
            name,
            seed,
            yes,
        } => {
            generate::run(length, id, description, name, seed, yes)?;
        }
        Commands::Stats {
            input,
            format,
            output,
        } => {
            stats::run(input, format, output)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb
}
