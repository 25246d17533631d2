//! Collecte et validation des entrées utilisateur

use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};

/// Remplace les séparateurs de chemin et les espaces par des underscores
///
/// L'identifiant nettoyé sert à la fois d'id d'en-tête FASTA et de radical
/// du nom de fichier.
pub fn sanitize_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ' ' => '_',
            other => other,
        })
        .collect()
}

/// Requête de génération validée
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRequest {
    /// Longueur de la séquence de base (> 0)
    pub length: usize,
    /// Identifiant nettoyé, sans séparateurs de chemin ni espaces
    pub id: String,
    /// Description libre
    pub description: String,
    /// Nom de l'auteur (non vide après trim)
    pub author_name: String,
}

impl SequenceRequest {
    /// Construit une requête en validant les invariants
    pub fn new(length: usize, raw_id: &str, description: &str, author_name: &str) -> Result<Self> {
        if length == 0 {
            return Err(GenError::InvalidLength(0));
        }

        let author_name = author_name.trim();
        if author_name.is_empty() {
            return Err(GenError::EmptyAuthorName);
        }

        Ok(Self {
            length,
            id: sanitize_id(raw_id),
            description: description.trim().to_string(),
            author_name: author_name.to_string(),
        })
    }

    /// Nom du fichier de sortie dérivé de l'identifiant
    pub fn filename(&self) -> String {
        format!("{}.fasta", self.id)
    }
}
