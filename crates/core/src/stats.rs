//! Statistiques de composition nucléotidique

use crate::sequence::{CoreSequence, Nucleotide};
use serde::{Deserialize, Serialize};

/// Comptes et pourcentages de chaque base d'une séquence
///
/// Les pourcentages sont rapportés au nombre de bases comptées; les
/// symboles hors alphabet sont ignorés. Sur une séquence de base, le
/// total compté est exactement la longueur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionStats {
    pub count_a: usize,
    pub count_c: usize,
    pub count_g: usize,
    pub count_t: usize,
}

impl CompositionStats {
    /// Calcule les statistiques d'une séquence de base
    pub fn from_sequence(core: &CoreSequence) -> Self {
        let mut stats = Self::default();

        for base in core.bases() {
            match base {
                Nucleotide::A => stats.count_a += 1,
                Nucleotide::C => stats.count_c += 1,
                Nucleotide::G => stats.count_g += 1,
                Nucleotide::T => stats.count_t += 1,
            }
        }

        stats
    }

    /// Calcule les statistiques d'un texte arbitraire
    ///
    /// Seuls les symboles A, C, G, T (majuscules ou minuscules) sont
    /// comptés; tout autre caractère est ignoré.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();

        for c in text.chars() {
            match c.to_ascii_uppercase() {
                'A' => stats.count_a += 1,
                'C' => stats.count_c += 1,
                'G' => stats.count_g += 1,
                'T' => stats.count_t += 1,
                _ => {}
            }
        }

        stats
    }

    /// Nombre total de bases comptées
    pub fn total(&self) -> usize {
        self.count_a + self.count_c + self.count_g + self.count_t
    }

    fn pct(&self, count: usize) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        count as f64 / self.total() as f64 * 100.0
    }

    /// Pourcentage de bases A
    pub fn pct_a(&self) -> f64 {
        self.pct(self.count_a)
    }

    /// Pourcentage de bases C
    pub fn pct_c(&self) -> f64 {
        self.pct(self.count_c)
    }

    /// Pourcentage de bases G
    pub fn pct_g(&self) -> f64 {
        self.pct(self.count_g)
    }

    /// Pourcentage de bases T
    pub fn pct_t(&self) -> f64 {
        self.pct(self.count_t)
    }

    /// Pourcentage combiné C + G
    pub fn pct_cg(&self) -> f64 {
        self.pct_c() + self.pct_g()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_length() {
        let core = CoreSequence::from_str("ACGTACGTAA").unwrap();
        let stats = CompositionStats::from_sequence(&core);

        assert_eq!(stats.count_a, 4);
        assert_eq!(stats.count_c, 2);
        assert_eq!(stats.count_g, 2);
        assert_eq!(stats.count_t, 2);
        assert_eq!(stats.total(), core.len());
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let core = CoreSequence::from_str("ACGTACGTAA").unwrap();
        let stats = CompositionStats::from_sequence(&core);

        let sum = stats.pct_a() + stats.pct_c() + stats.pct_g() + stats.pct_t();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pct_cg_combines_c_and_g() {
        let core = CoreSequence::from_str("ACGT").unwrap();
        let stats = CompositionStats::from_sequence(&core);

        assert!((stats.pct_cg() - 50.0).abs() < 1e-9);
        assert!((stats.pct_cg() - (stats.pct_c() + stats.pct_g())).abs() < 1e-9);
    }

    #[test]
    fn test_from_text_ignores_foreign_symbols() {
        // Un nom inséré ne doit pas fausser les comptes au-delà de ses
        // propres lettres A/C/G/T
        let stats = CompositionStats::from_text("ACXYZ-gt!");

        assert_eq!(stats.count_a, 1);
        assert_eq!(stats.count_c, 1);
        assert_eq!(stats.count_g, 1);
        assert_eq!(stats.count_t, 1);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_empty_text_yields_zero_percentages() {
        let stats = CompositionStats::from_text("xyz");

        assert_eq!(stats.total(), 0);
        assert_eq!(stats.pct_a(), 0.0);
        assert_eq!(stats.pct_cg(), 0.0);
    }
}
