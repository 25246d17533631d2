//! Types d'erreurs pour la bibliothèque FastaGen

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Longueur de séquence invalide: {0} (doit être strictement positive)")]
    InvalidLength(usize),

    #[error("Le nom de l'auteur ne peut pas être vide")]
    EmptyAuthorName,

    #[error("Base nucléotidique invalide: {0}")]
    InvalidBase(char),

    #[error("Position d'insertion hors limites: {offset} > {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Format FASTA invalide: {0}")]
    InvalidFasta(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
