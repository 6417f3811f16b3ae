//!
//! Graph algorithms on the edge list of de Bruijn graph
//!
//! * `degree`: incident edge counts of nodes
//! * `shuffle`: randomized edge order
//! * `euler`: Eulerian trail search
//!
pub mod degree;
pub mod euler;
pub mod shuffle;
