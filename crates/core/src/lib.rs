//! FastaGen Core Library
//!
//! Bibliothèque principale pour la génération de séquences ADN aléatoires
//! au format FASTA.

pub mod error;
pub mod fasta;
pub mod generator;
pub mod logging;
pub mod request;
pub mod sequence;
pub mod stats;

// Réexportations principales
pub use error::{GenError, Result};
pub use fasta::{read_fasta, FastaRecord, LINE_WIDTH};
pub use generator::SequenceGenerator;
pub use logging::init_logging;
pub use request::{sanitize_id, SequenceRequest};
pub use sequence::{AnnotatedSequence, CoreSequence, Nucleotide};
pub use stats::CompositionStats;
