//! Structures de séquences nucléotidiques

use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Les quatre bases standard de l'ADN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,  // Adénine
    C,  // Cytosine
    G,  // Guanine
    T,  // Thymine
}

impl Nucleotide {
    /// L'alphabet complet, dans l'ordre canonique
    pub const ALPHABET: [Nucleotide; 4] =
        [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Convertit un caractère en base
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(GenError::InvalidBase(c)),
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Retourne true si c'est une base GC
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = GenError;

    fn try_from(c: char) -> Result<Self> {
        Nucleotide::from_char(c)
    }
}

/// Séquence nucléotidique de base, sans le nom inséré
///
/// Immuable une fois générée; toutes les statistiques sont calculées sur elle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSequence {
    bases: Vec<Nucleotide>,
}

impl CoreSequence {
    /// Crée une séquence depuis des bases
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    /// Parse une séquence depuis une chaîne
    pub fn from_str(s: &str) -> Result<Self> {
        let bases = s
            .chars()
            .map(Nucleotide::from_char)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { bases })
    }

    /// Retourne les bases
    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Insère un token littéral à la position donnée, comptée en bases
    ///
    /// Le token n'est pas restreint à l'alphabet nucléotidique et n'entre
    /// jamais dans les statistiques; la position doit être dans [0, len].
    pub fn annotate(&self, token: &str, offset: usize) -> Result<AnnotatedSequence> {
        if offset > self.len() {
            return Err(GenError::OffsetOutOfRange {
                offset,
                len: self.len(),
            });
        }

        let mut text = String::with_capacity(self.len() + token.len());
        for base in &self.bases[..offset] {
            text.push(base.as_char());
        }
        text.push_str(token);
        for base in &self.bases[offset..] {
            text.push(base.as_char());
        }

        Ok(AnnotatedSequence {
            text,
            token: token.to_string(),
            offset,
        })
    }
}

impl fmt::Display for CoreSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base.as_char())?;
        }
        Ok(())
    }
}

/// Séquence annotée: séquence de base avec le nom de l'auteur inséré
///
/// Utilisée uniquement pour l'écriture du fichier, jamais pour les
/// statistiques. Conserve le token et sa position pour que l'insertion
/// reste reconstructible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSequence {
    text: String,
    token: String,
    offset: usize,
}

impl AnnotatedSequence {
    /// Retourne le texte complet (bases + token)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Retourne le token inséré
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Retourne la position d'insertion, comptée en bases
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reconstruit la séquence de base en retirant le token
    pub fn strip_token(&self) -> Result<CoreSequence> {
        let chars: Vec<char> = self.text.chars().collect();
        let token_len = self.token.chars().count();

        chars[..self.offset]
            .iter()
            .chain(chars[self.offset + token_len..].iter())
            .map(|&c| Nucleotide::from_char(c))
            .collect::<Result<Vec<_>>>()
            .map(CoreSequence::new)
    }
}
