//!
//! Degree table of the de Bruijn graph
//!
//! The degree of a node is the number of edges incident to it, counted
//! regardless of direction. A self loop counts twice.
//!
use crate::dbg::Edge;
use crate::kmer::Kmer;
use fnv::{FnvHashMap as HashMap, FnvHashSet as HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct DegreeTable {
    degrees: HashMap<Kmer, usize>,
    total: usize,
}

impl DegreeTable {
    ///
    /// Count the incident edges of every node in `nodes`.
    /// Duplicated edges are counted with their multiplicity.
    ///
    pub fn from_edges(edges: &[Edge], nodes: &HashSet<Kmer>) -> DegreeTable {
        let mut degrees: HashMap<Kmer, usize> = nodes.iter().map(|v| (v.clone(), 0)).collect();
        for edge in edges {
            for end in [&edge.prefix, &edge.suffix] {
                *degrees
                    .get_mut(end)
                    .unwrap_or_else(|| panic!("edge end {} is not in nodes", end)) += 1;
            }
        }
        let total = 2 * edges.len();
        DegreeTable { degrees, total }
    }
    /// Degree of the node. Unknown nodes have degree 0.
    pub fn get(&self, node: &Kmer) -> usize {
        self.degrees.get(node).copied().unwrap_or(0)
    }
    ///
    /// Mark the edge as used, i.e. decrement the degree of both ends.
    ///
    pub fn consume(&mut self, edge: &Edge) {
        for end in [&edge.prefix, &edge.suffix] {
            let d = self
                .degrees
                .get_mut(end)
                .unwrap_or_else(|| panic!("edge end {} is not in nodes", end));
            assert!(*d > 0, "degree of {} is already zero", end);
            *d -= 1;
        }
        self.total -= 2;
    }
    /// Sum of the degrees of all nodes
    pub fn total(&self) -> usize {
        self.total
    }
    /// All edges are used
    pub fn is_drained(&self) -> bool {
        self.degrees.values().all(|&d| d == 0)
    }
    pub fn n_nodes(&self) -> usize {
        self.degrees.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Kmer, usize)> + '_ {
        self.degrees.iter().map(|(kmer, &d)| (kmer, d))
    }
}

//
// tests
//
