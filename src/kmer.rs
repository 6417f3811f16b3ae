//!
//! kmer base struct definitions
//!
use crate::common::Bases;

///
/// Kmer for any k
///
/// Used both as a node of the de Bruijn graph and as the payload of an edge.
///
#[derive(Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Clone)]
pub struct Kmer(pub Vec<u8>);

impl Kmer {
    pub fn from_bases(bases: &Bases) -> Kmer {
        Kmer(bases.to_vec())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn k(&self) -> usize {
        self.len()
    }
    pub fn as_bytes(&self) -> &Bases {
        &self.0
    }
    /// `self` can be followed by `other`,
    /// i.e. `self[1..] == other[..k-1]`.
    pub fn adjacent(&self, other: &Kmer) -> bool {
        let (_, a_suffix) = self.0.split_first().expect("k should be >=1");
        let (_, b_prefix) = other.0.split_last().expect("k should be >=1");
        a_suffix == b_prefix
    }
    pub fn last(&self) -> u8 {
        let (last, _) = self.0.split_last().expect("k should be >=1");
        *last
    }
}

impl AsRef<Bases> for Kmer {
    fn as_ref(&self) -> &Bases {
        &self.0
    }
}

impl std::fmt::Display for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // iter returns reference
        for &b in self.0.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// ATCGAT (k=3) -> Iterator on [ATC, TCG, CGA, GAT]
pub fn sequence_to_kmers(seq: &Bases, k: usize) -> impl Iterator<Item = Kmer> + '_ {
    seq.windows(k).map(Kmer::from_bases)
}
