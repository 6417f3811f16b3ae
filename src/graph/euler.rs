//!
//! Finding an Eulerian trail of the de Bruijn graph
//!
//! The trail is searched by a depth-first traversal that consumes edges.
//! Each node owns a stack of its outgoing edges, and the traversal keeps an
//! explicit stack of nodes instead of recursing:
//!
//! * if the node on the top has an unused outgoing edge, use it and move to
//!   the target node of the edge.
//! * otherwise the node is finished and emitted to the tour (post-order).
//!
//! Emitted nodes in reverse order form the trail. An attempt succeeds if the
//! degree table is drained after the traversal, and a failed attempt is
//! retried from scratch with a new random edge order.
//!
use super::degree::DegreeTable;
use super::shuffle::shuffle_except_first;
use crate::common::Bases;
use crate::dbg::{DeBruijnGraph, Edge};
use crate::error::AssemblyError;
use crate::kmer::Kmer;
use crate::params::AssemblyParams;
use fnv::FnvHashMap as HashMap;
use log::{debug, info, warn};
use rand::Rng;

/// Ordered list of nodes visited by the trail
pub type Tour = Vec<Kmer>;

///
/// One step of the traversal
///
#[derive(Debug, Clone, PartialEq)]
pub enum WalkStep {
    /// the edge (index in the edge list) was used
    Consume { edge: usize },
    /// the node has no unused outgoing edge and was added to the tour
    Emit { node: Kmer },
}

///
/// Iterator over the steps of a single traversal attempt.
///
/// The walker borrows the edge list, and owns the degree table of the
/// attempt which is decremented on every consumed edge.
///
pub struct TourWalker<'a> {
    /// edge list of this attempt
    edges: &'a [Edge],
    /// node -> indices of its unused outgoing edges (the next one is at the end)
    outgoing: HashMap<&'a Kmer, Vec<usize>>,
    /// nodes on the current path
    stack: Vec<&'a Kmer>,
    /// emitted nodes (reversed tour)
    emitted: Vec<Kmer>,
    degrees: DegreeTable,
    n_consumed: usize,
}

impl<'a> TourWalker<'a> {
    ///
    /// Start a traversal from the prefix of the first edge.
    /// Outgoing edges of each node are used in the order of `edges`.
    ///
    pub fn new(edges: &'a [Edge], degrees: DegreeTable) -> TourWalker<'a> {
        let mut outgoing: HashMap<&'a Kmer, Vec<usize>> = HashMap::default();
        for (i, edge) in edges.iter().enumerate().rev() {
            outgoing.entry(&edge.prefix).or_default().push(i);
        }
        let stack = match edges.first() {
            Some(edge) => vec![&edge.prefix],
            None => vec![],
        };
        TourWalker {
            edges,
            outgoing,
            stack,
            emitted: Vec::with_capacity(edges.len() + 1),
            degrees,
            n_consumed: 0,
        }
    }
    /// Degree table reflecting the edges used so far
    pub fn degrees(&self) -> &DegreeTable {
        &self.degrees
    }
    /// Number of edges used so far
    pub fn n_consumed(&self) -> usize {
        self.n_consumed
    }
    ///
    /// Finish the traversal and get the tour and the final degree table.
    ///
    pub fn into_tour(mut self) -> (Tour, DegreeTable) {
        while self.next().is_some() {}
        let mut tour = self.emitted;
        tour.reverse();
        (tour, self.degrees)
    }
}

impl<'a> Iterator for TourWalker<'a> {
    type Item = WalkStep;
    fn next(&mut self) -> Option<Self::Item> {
        let edges: &'a [Edge] = self.edges;
        let node: &'a Kmer = *self.stack.last()?;
        match self.outgoing.get_mut(node).and_then(|out| out.pop()) {
            Some(i) => {
                let edge = &edges[i];
                self.degrees.consume(edge);
                self.n_consumed += 1;
                self.stack.push(&edge.suffix);
                Some(WalkStep::Consume { edge: i })
            }
            None => {
                self.stack.pop();
                self.emitted.push(node.clone());
                Some(WalkStep::Emit { node: node.clone() })
            }
        }
    }
}

///
/// Every consecutive pair of nodes in the tour overlaps by k-1 bases,
/// i.e. the tour is a walk on the de Bruijn graph.
///
pub fn is_walk(tour: &[Kmer]) -> bool {
    tour.windows(2).all(|w| w[0].adjacent(&w[1]))
}

///
/// Traverse the edges once from the prefix of `edges[0]`.
///
/// Returns the tour and the degree table after the traversal. The tour
/// uses every edge only if the returned table `is_drained()`.
///
pub fn find_tour(edges: &[Edge], degrees: DegreeTable) -> (Tour, DegreeTable) {
    TourWalker::new(edges, degrees).into_tour()
}

///
/// Run `attempt` until it returns `Some`.
/// `attempt` receives the 1-origin attempt number.
///
/// Returns the result and the number of attempts used, or
/// `TrailConstructionExhausted` if `max_attempts` was reached.
///
pub fn retry_attempts<T, F>(
    max_attempts: Option<usize>,
    mut attempt: F,
) -> Result<(T, usize), AssemblyError>
where
    F: FnMut(usize) -> Option<T>,
{
    let mut n = 0;
    loop {
        if let Some(max) = max_attempts {
            if n >= max {
                warn!("gave up after {} attempts", n);
                return Err(AssemblyError::TrailConstructionExhausted { attempts: n });
            }
        }
        n += 1;
        if let Some(t) = attempt(n) {
            return Ok((t, n));
        }
    }
}

///
/// Successful result of the Eulerian trail search
///
#[derive(Debug, Clone, PartialEq)]
pub struct TourResult {
    pub tour: Tour,
    /// number of attempts including the successful one
    pub attempts: usize,
}

///
/// Search an Eulerian trail of the de Bruijn graph of `seq`.
///
/// Every attempt rebuilds the graph, shuffles all edges except the first,
/// recomputes the degree table and traverses. The attempts are repeated
/// until one uses every edge, or until `params.max_attempts` is reached.
///
pub fn find_eulerian_tour<R: Rng + ?Sized>(
    seq: &Bases,
    k: usize,
    params: &AssemblyParams,
    rng: &mut R,
) -> Result<TourResult, AssemblyError> {
    let (tour, attempts) = retry_attempts(params.max_attempts, |attempt| {
        let (edges, nodes) = DeBruijnGraph::from_seq(seq, k).into_parts();
        let edges = shuffle_except_first(edges, rng);
        let degrees = DegreeTable::from_edges(&edges, &nodes);
        let (tour, degrees) = find_tour(&edges, degrees);
        if degrees.is_drained() {
            debug_assert!(is_walk(&tour), "tour is not a walk");
            debug!("attempt#{} tour_len={}", attempt, tour.len());
            Some(tour)
        } else {
            warn!(
                "attempt#{} left {} edges unused, retrying",
                attempt,
                degrees.total() / 2
            );
            None
        }
    })?;
    info!("found Eulerian trail in {} attempt(s)", attempts);
    Ok(TourResult { tour, attempts })
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn kmer(s: &str) -> Kmer {
        Kmer::from_bases(s.as_bytes())
    }
    fn kmers(ss: &[&str]) -> Vec<Kmer> {
        ss.iter().map(|s| kmer(s)).collect()
    }
    fn edge(a: &str, b: &str) -> Edge {
        Edge::new(kmer(a), kmer(b))
    }
    fn walk(edges: &[Edge]) -> (Tour, DegreeTable) {
        let nodes = edges
            .iter()
            .flat_map(|e| vec![e.prefix.clone(), e.suffix.clone()])
            .collect();
        find_tour(edges, DegreeTable::from_edges(edges, &nodes))
    }

    #[test]
    fn tour_of_linear_graph() {
        let g = DeBruijnGraph::from_seq(b"ATGGGTCA", 2);
        let (tour, degrees) = walk(g.edges());
        assert!(degrees.is_drained());
        assert_eq!(tour, kmers(&["AT", "TG", "GG", "GG", "GT", "TC", "CA"]));
    }

    #[test]
    fn tour_with_self_loop_visited_later() {
        // GG->GT is examined before the self loop GG->GG
        let edges = vec![
            edge("AT", "TG"),
            edge("TG", "GG"),
            edge("GG", "GT"),
            edge("GT", "TC"),
            edge("GG", "GG"),
            edge("TC", "CA"),
        ];
        let (tour, degrees) = walk(&edges);
        assert!(degrees.is_drained());
        // the self loop is spliced in before leaving GG
        assert_eq!(tour, kmers(&["AT", "TG", "GG", "GG", "GT", "TC", "CA"]));
    }

    #[test]
    fn tour_of_homopolymer() {
        let g = DeBruijnGraph::from_seq(b"AAAA", 1);
        let (tour, degrees) = walk(g.edges());
        assert!(degrees.is_drained());
        assert_eq!(tour, kmers(&["A", "A", "A", "A"]));
    }

    #[test]
    fn walk_check() {
        assert!(is_walk(&kmers(&["AT", "TG", "GG", "GG", "GT"])));
        assert!(is_walk(&kmers(&["AT"])));
        assert!(is_walk(&[]));
        assert!(!is_walk(&kmers(&["AT", "TG", "GT"])));
    }

    #[test]
    fn tour_of_disconnected_edges() {
        // G->G cannot be reached from A
        let edges = vec![edge("A", "C"), edge("G", "G")];
        let (tour, degrees) = walk(&edges);
        assert_eq!(tour, kmers(&["A", "C"]));
        assert!(!degrees.is_drained());
        assert_eq!(degrees.total(), 2);
    }

    #[test]
    fn empty_edges() {
        let (tour, degrees) = walk(&[]);
        assert!(tour.is_empty());
        assert!(degrees.is_drained());
    }

    #[test]
    fn degree_sum_decreases_by_two() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let seq = b"ACGTACGGACGTTACGACGT";
        let (edges, nodes) = DeBruijnGraph::from_seq(seq, 3).into_parts();
        let edges = shuffle_except_first(edges, &mut rng);
        let degrees = DegreeTable::from_edges(&edges, &nodes);
        let mut walker = TourWalker::new(&edges, degrees);
        let mut total = walker.degrees().total();
        assert_eq!(total, 2 * edges.len());
        let mut used = vec![false; edges.len()];
        let mut n_emit = 0;
        while let Some(step) = walker.next() {
            match step {
                WalkStep::Consume { edge } => {
                    assert!(!used[edge], "edge#{} is used twice", edge);
                    used[edge] = true;
                    assert_eq!(walker.degrees().total() + 2, total);
                    total = walker.degrees().total();
                }
                WalkStep::Emit { .. } => {
                    assert_eq!(walker.degrees().total(), total);
                    n_emit += 1;
                }
            }
        }
        assert_eq!(total, 0);
        assert!(used.iter().all(|&u| u));
        assert_eq!(walker.n_consumed(), edges.len());
        assert_eq!(n_emit, edges.len() + 1);
    }

    #[test]
    fn retry_until_success() {
        let r = retry_attempts(Some(10), |i| if i == 4 { Some(i * 10) } else { None });
        assert_eq!(r.unwrap(), (40, 4));
        let r = retry_attempts(None, |i| if i == 25 { Some(()) } else { None });
        assert_eq!(r.unwrap(), ((), 25));
    }

    #[test]
    fn retry_exhausted() {
        let mut called = 0;
        let r: Result<((), usize), _> = retry_attempts(Some(3), |_| {
            called += 1;
            None
        });
        assert!(matches!(
            r,
            Err(AssemblyError::TrailConstructionExhausted { attempts: 3 })
        ));
        assert_eq!(called, 3);

        let r: Result<((), usize), _> = retry_attempts(Some(0), |_| None);
        assert!(matches!(
            r,
            Err(AssemblyError::TrailConstructionExhausted { attempts: 0 })
        ));
    }

    #[test]
    fn eulerian_tour_needs_no_retry() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let params = AssemblyParams::new(Some(1), None);
        for &(seq, k) in &[
            (&b"ATGGGTCA"[..], 2),
            (&b"AAAA"[..], 1),
            (&b"ACGTACGTTGCAACGT"[..], 2),
        ] {
            for _ in 0..20 {
                let r = find_eulerian_tour(seq, k, &params, &mut rng).unwrap();
                assert_eq!(r.attempts, 1);
                assert_eq!(r.tour.len(), seq.len() - k + 1);
                assert_eq!(r.tour[0].as_bytes(), &seq[..k]);
            }
        }
    }

    #[test]
    fn eulerian_tour_zero_budget() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let params = AssemblyParams::new(Some(0), None);
        let r = find_eulerian_tour(b"ACGT", 2, &params, &mut rng);
        assert!(matches!(
            r,
            Err(AssemblyError::TrailConstructionExhausted { attempts: 0 })
        ));
    }
}
