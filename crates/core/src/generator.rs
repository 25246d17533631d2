//! Génération aléatoire de séquences

use crate::error::{GenError, Result};
use crate::sequence::{AnnotatedSequence, CoreSequence, Nucleotide};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Générateur de séquences aléatoires uniformes
///
/// Chaque base est tirée indépendamment avec probabilité 1/4. Le seed est
/// conservé: un même seed reproduit exactement la même séquence et la même
/// position d'insertion.
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SequenceGenerator {
    /// Crée un générateur avec un seed tiré de l'entropie du système
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Crée un générateur avec un seed explicite
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(seed, "initialisation du générateur");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Retourne le seed utilisé
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Génère une séquence de `length` bases uniformes
    pub fn generate(&mut self, length: usize) -> Result<CoreSequence> {
        if length == 0 {
            return Err(GenError::InvalidLength(0));
        }

        let bases = (0..length)
            .map(|_| Nucleotide::ALPHABET[self.rng.gen_range(0..4)])
            .collect();

        Ok(CoreSequence::new(bases))
    }

    /// Tire une position d'insertion uniforme dans [0, len] inclus
    pub fn random_offset(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..=len)
    }

    /// Insère le token à une position aléatoire de la séquence
    pub fn annotate(&mut self, core: &CoreSequence, token: &str) -> Result<AnnotatedSequence> {
        let offset = self.random_offset(core.len());
        tracing::debug!(offset, "position d'insertion choisie");
        core.annotate(token, offset)
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_length() {
        let mut generator = SequenceGenerator::with_seed(42);

        for length in [1, 2, 10, 61, 500] {
            let core = generator.generate(length).unwrap();
            assert_eq!(core.len(), length);
        }
    }

    #[test]
    fn test_generate_rejects_zero_length() {
        let mut generator = SequenceGenerator::with_seed(42);
        assert!(generator.generate(0).is_err());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SequenceGenerator::with_seed(1234);
        let mut second = SequenceGenerator::with_seed(1234);

        assert_eq!(
            first.generate(100).unwrap(),
            second.generate(100).unwrap()
        );
        assert_eq!(first.random_offset(100), second.random_offset(100));
    }

    #[test]
    fn test_alphabet_membership() {
        let mut generator = SequenceGenerator::with_seed(7);
        let core = generator.generate(1000).unwrap();

        assert!(core
            .to_string()
            .chars()
            .all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')));
    }

    #[test]
    fn test_offset_stays_in_range_and_reaches_bounds() {
        let mut generator = SequenceGenerator::with_seed(0);
        let mut seen_start = false;
        let mut seen_end = false;

        for _ in 0..1000 {
            let offset = generator.random_offset(3);
            assert!(offset <= 3);
            seen_start |= offset == 0;
            seen_end |= offset == 3;
        }

        // 4 positions équiprobables sur 1000 tirages: les bornes sortent
        assert!(seen_start);
        assert!(seen_end);
    }

    #[test]
    fn test_annotate_inserts_token() {
        let mut generator = SequenceGenerator::with_seed(99);
        let core = generator.generate(20).unwrap();
        let annotated = generator.annotate(&core, "Ann").unwrap();

        assert!(annotated.offset() <= core.len());
        assert_eq!(annotated.text().len(), 23);
        assert_eq!(annotated.strip_token().unwrap(), core);
    }
}
