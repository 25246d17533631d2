//! Écriture et lecture du format FASTA

use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Largeur de ligne standard du corps FASTA
pub const LINE_WIDTH: usize = 60;

/// Enregistrement FASTA: en-tête + séquence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl FastaRecord {
    /// Crée un enregistrement
    pub fn new(id: String, description: String, sequence: String) -> Self {
        Self {
            id,
            description,
            sequence,
        }
    }

    /// Rend le contenu exact du fichier FASTA
    ///
    /// Une ligne d'en-tête `>id description`, puis la séquence repliée à
    /// [`LINE_WIDTH`] caractères par ligne, chaque ligne (y compris la
    /// dernière) terminée par '\n'.
    pub fn to_fasta(&self) -> String {
        let mut out = format!(">{} {}\n", self.id, self.description);

        for line in wrap_sequence(&self.sequence, LINE_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    /// Écrit l'enregistrement dans un fichier
    ///
    /// Le descripteur est relâché à la sortie de la fonction, quel que soit
    /// le chemin emprunté.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.to_fasta().as_bytes())?;
        Ok(())
    }
}

/// Replie une séquence en lignes de `width` caractères
///
/// Repli brut, caractère par caractère (scalaires Unicode), sans tenir
/// compte des limites de mots.
pub fn wrap_sequence(sequence: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = sequence.chars().collect();

    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Lit un fichier FASTA (version simplifiée)
///
/// L'id est le premier mot de chaque en-tête, la description le reste; les
/// lignes de séquence d'un enregistrement sont concaténées.
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }

            let mut parts = header.splitn(2, ' ');
            let id = parts.next().unwrap_or_default().to_string();
            let description = parts.next().unwrap_or_default().trim().to_string();
            current = Some(FastaRecord::new(id, description, String::new()));
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(line.trim());
        } else if !line.trim().is_empty() {
            return Err(GenError::InvalidFasta(
                "données de séquence avant le premier en-tête".to_string(),
            ));
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    if records.is_empty() {
        return Err(GenError::InvalidFasta(
            "aucun enregistrement trouvé".to_string(),
        ));
    }

    Ok(records)
}
