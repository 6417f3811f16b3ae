//!
//! Assembly pipeline
//!
//! sequence+k -> de Bruijn graph -> Eulerian trail -> superstring -> verdict
//!
use crate::common::{is_valid_sequence, sequence_to_string, Bases, Sequence};
use crate::error::AssemblyError;
use crate::graph::euler::find_eulerian_tour;
use crate::kmer::Kmer;
use crate::params::AssemblyParams;
use log::info;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// Merge the nodes in the tour into a sequence:
/// the first k-mer as is, then the last base of every following k-mer.
///
pub fn tour_to_superstring(tour: &[Kmer]) -> Sequence {
    match tour.split_first() {
        Some((first, rest)) => {
            let mut seq = Sequence::with_capacity(first.len() + rest.len());
            seq.extend_from_slice(first.as_bytes());
            seq.extend(rest.iter().map(|kmer| kmer.last()));
            seq
        }
        None => Sequence::new(),
    }
}

///
/// Whether the assembled sequence is identical to the input
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Identical,
    NotIdentical,
}

impl Verdict {
    pub fn is_identical(&self) -> bool {
        matches!(self, Verdict::Identical)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Identical => write!(f, "identical"),
            Verdict::NotIdentical => write!(f, "not identical"),
        }
    }
}

/// Compare the assembled sequence with the original one
pub fn verify(assembled: &Bases, original: &Bases) -> Verdict {
    if assembled == original {
        Verdict::Identical
    } else {
        Verdict::NotIdentical
    }
}

///
/// Result of `assemble`
///
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// reconstructed sequence
    pub sequence: Sequence,
    pub verdict: Verdict,
    /// number of trail search attempts
    pub attempts: usize,
    /// number of nodes in the tour
    pub tour_len: usize,
}

///
/// Reassemble `seq` from its k-mers.
///
/// `seq` must be uppercase A/C/G/T and `1 <= k < seq.len()`
/// (see `validate`).
///
pub fn assemble<R: Rng + ?Sized>(
    seq: &Bases,
    k: usize,
    params: &AssemblyParams,
    rng: &mut R,
) -> Result<Assembly, AssemblyError> {
    debug_assert!(is_valid_sequence(&seq), "sequence is not validated");
    let result = find_eulerian_tour(seq, k, params, rng)?;
    let sequence = tour_to_superstring(&result.tour);
    let verdict = verify(&sequence, seq);
    info!(
        "assembled {} (k={}) verdict={}",
        sequence_to_string(&sequence),
        k,
        verdict
    );
    Ok(Assembly {
        sequence,
        verdict,
        attempts: result.attempts,
        tour_len: result.tour.len(),
    })
}

///
/// `assemble` with the rng created from `params.seed`
///
pub fn assemble_with_params(
    seq: &Bases,
    k: usize,
    params: &AssemblyParams,
) -> Result<Assembly, AssemblyError> {
    let mut rng = match params.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    assemble(seq, k, params, &mut rng)
}

//
// tests
//
