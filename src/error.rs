//!
//! Errors
//!
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    /// input sequence has no bases
    #[error("sequence is empty")]
    EmptySequence,
    /// a symbol other than A/C/G/T (case-insensitive)
    #[error("non-standard nucleotide `{base}` at position {pos}")]
    InvalidBase { base: char, pos: usize },
    #[error("sequence of length {len} exceeds the maximum length {max}")]
    SequenceTooLong { len: usize, max: usize },
    #[error("kmer size should be a positive integer")]
    NonPositiveKmerSize,
    #[error("kmer size {k} should be smaller than the sequence length {len}")]
    KmerSizeTooLarge { k: usize, len: usize },
    /// retry budget of the Eulerian trail search was used up
    #[error("no Eulerian trail using every edge was found in {attempts} attempts")]
    TrailConstructionExhausted { attempts: usize },
    /// file could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// params file is not a valid json
    #[error("invalid params json: {0}")]
    Json(#[from] serde_json::Error),
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = AssemblyError::InvalidBase { base: 'N', pos: 3 };
        assert_eq!(e.to_string(), "non-standard nucleotide `N` at position 3");
        let e = AssemblyError::KmerSizeTooLarge { k: 8, len: 8 };
        assert_eq!(
            e.to_string(),
            "kmer size 8 should be smaller than the sequence length 8"
        );
        let e = AssemblyError::TrailConstructionExhausted { attempts: 5 };
        assert!(e.to_string().contains("5 attempts"));
    }
}
