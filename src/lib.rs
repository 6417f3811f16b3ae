//!
//! Reassemble a DNA sequence from its k-mers through an Eulerian trail of
//! the de Bruijn graph.
//!
pub mod assemble;
pub mod common;
pub mod dbg;
pub mod error;
pub mod graph;
pub mod kmer;
pub mod params;
pub mod random_seq;
pub mod utils;
pub mod validate;
