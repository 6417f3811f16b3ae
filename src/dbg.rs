//!
//! De Bruijn graph stored as an edge list
//!
//! ## Structure
//!
//! * edges: one `Edge` per `(k+1)`-window of the sequence, in the order of the
//!   sequence. Repeated windows produce repeated edges; they are never merged.
//! * nodes: the distinct k-mers appearing as prefix or suffix of an edge.
//!
use crate::common::{sequence_to_string, Bases};
use crate::kmer::{sequence_to_kmers, Kmer};
use derive_new::new;
use fnv::{FnvHashMap as HashMap, FnvHashSet as HashSet};
use itertools::Itertools;
use log::debug;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

///
/// Edge of de Bruijn graph `prefix -> suffix`,
/// which corresponds to a `(k+1)`-mer of the sequence.
///
#[derive(new, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// the origin-side k-mer
    pub prefix: Kmer,
    /// the target-side k-mer
    pub suffix: Kmer,
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}->{}", self.prefix, self.suffix)
    }
}

///
/// De Bruijn graph built from a single sequence.
///
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    edges: Vec<Edge>,
    nodes: HashSet<Kmer>,
}

impl DeBruijnGraph {
    ///
    /// Decompose `seq` into `L-k` edges (in sequence order) and the set of nodes.
    ///
    /// `1 <= k < seq.len()` must be guaranteed by the caller.
    ///
    pub fn from_seq(seq: &Bases, k: usize) -> DeBruijnGraph {
        assert!(k > 0, "k should be >=1");
        assert!(
            k < seq.len(),
            "k={} should be smaller than the sequence length={}",
            k,
            seq.len()
        );
        // L-k+1 kmers, consecutive pairs of them are the L-k edges
        let kmers: Vec<Kmer> = sequence_to_kmers(seq, k).collect();
        let edges: Vec<Edge> = kmers
            .iter()
            .tuple_windows()
            .map(|(prefix, suffix)| Edge::new(prefix.clone(), suffix.clone()))
            .collect();
        let nodes: HashSet<Kmer> = kmers.into_iter().collect();
        debug!(
            "built dbg of {} (k={}) n_edges={} n_nodes={}",
            sequence_to_string(&seq),
            k,
            edges.len(),
            nodes.len()
        );
        DeBruijnGraph { k, edges, nodes }
    }
    /// Size of k-mer (node)
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
    /// Edges in the sequence order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn nodes(&self) -> &HashSet<Kmer> {
        &self.nodes
    }
    /// Nodes in lexicographic order
    pub fn sorted_nodes(&self) -> Vec<&Kmer> {
        self.nodes.iter().sorted().collect()
    }
    pub fn has_node(&self, kmer: &Kmer) -> bool {
        self.nodes.contains(kmer)
    }
    /// The edge at offset 0, which pins the starting node of the tour
    pub fn first_edge(&self) -> &Edge {
        &self.edges[0]
    }
    /// The node the sequence starts with
    pub fn start(&self) -> &Kmer {
        &self.first_edge().prefix
    }
    /// Take the edge list and the node set out of the graph
    pub fn into_parts(self) -> (Vec<Edge>, HashSet<Kmer>) {
        (self.edges, self.nodes)
    }
}

//
// conversion
//
impl DeBruijnGraph {
    ///
    /// Convert into petgraph `DiGraph` whose node weight is the k-mer
    /// and edge weight is the offset of the edge in the sequence.
    /// Duplicated edges are kept as parallel edges.
    ///
    pub fn to_digraph(&self) -> DiGraph<Kmer, usize> {
        let mut graph = DiGraph::new();
        let index: HashMap<&Kmer, NodeIndex> = self
            .sorted_nodes()
            .into_iter()
            .map(|kmer| (kmer, graph.add_node(kmer.clone())))
            .collect();
        for (offset, edge) in self.edges.iter().enumerate() {
            graph.add_edge(index[&edge.prefix], index[&edge.suffix], offset);
        }
        graph
    }
    ///
    /// Graphviz dot format of the graph
    ///
    pub fn as_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.to_digraph(), &[]))
    }
}

impl std::fmt::Display for DeBruijnGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.edges.iter().join(","))
    }
}

//
// tests
//
