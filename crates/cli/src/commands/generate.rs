//! Commande de génération

use crate::{create_spinner, display, prompt};
use anyhow::Result;
use console::style;
use fastagen_core::{CompositionStats, FastaRecord, SequenceGenerator, SequenceRequest};
use std::io;
use std::path::Path;

pub fn run(
    length: Option<u64>,
    id: Option<String>,
    description: Option<String>,
    name: Option<String>,
    seed: Option<u64>,
    yes: bool,
) -> Result<()> {
    println!("🧬 Génération d'une séquence FASTA");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // 1. Collecter les entrées manquantes
    let length = match length {
        Some(length) => length as usize,
        None => prompt::prompt_length(&mut input, &mut output)?,
    };

    let raw_id = match id {
        Some(id) => id,
        None => prompt::prompt_line(&mut input, &mut output, "Identifiant de la séquence: ")?,
    };

    let description = match description {
        Some(description) => description,
        None => prompt::prompt_line(&mut input, &mut output, "Description de la séquence: ")?,
    };

    let author_name = match name {
        Some(name) => name,
        None => prompt::prompt_line(&mut input, &mut output, "Votre nom: ")?,
    };

    // 2. Valider la requête (nom vide: erreur fatale, code de sortie 1)
    let request = SequenceRequest::new(length, &raw_id, &description, &author_name)?;

    // 3. Générer la séquence de base et y insérer le nom
    let spinner = create_spinner("Génération de la séquence...");
    let mut generator = match seed {
        Some(seed) => SequenceGenerator::with_seed(seed),
        None => SequenceGenerator::new(),
    };
    let core = generator.generate(request.length)?;
    let annotated = generator.annotate(&core, &request.author_name)?;
    spinner.finish_with_message(format!(
        "Séquence de {} bases générée (seed: {})",
        core.len(),
        generator.seed()
    ));

    // 4. Confirmer avant d'écraser un fichier existant
    let filename = request.filename();
    if Path::new(&filename).exists() && !yes {
        if !prompt::confirm_overwrite(&mut input, &mut output, &filename)? {
            println!("Opération annulée.");
            return Ok(());
        }
    }

    // 5. Écrire le fichier FASTA
    let record = FastaRecord::new(
        request.id.clone(),
        request.description.clone(),
        annotated.text().to_string(),
    );
    record.write_to_path(Path::new(&filename))?;

    // 6. Statistiques, sur la séquence de base uniquement
    let stats = CompositionStats::from_sequence(&core);
    println!("\n✅ Séquence sauvegardée dans {}", style(&filename).cyan());
    display::stats::display_composition(&stats);

    Ok(())
}
