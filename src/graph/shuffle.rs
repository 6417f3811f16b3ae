//!
//! Randomize the order of edges
//!
use rand::prelude::*;

///
/// Shuffle all elements except the first one, which stays at index 0.
///
/// The first edge fixes the starting node of the Eulerian tour, so it should
/// not be moved. Lists shorter than two are returned as is.
///
pub fn shuffle_except_first<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    if items.len() > 1 {
        items[1..].shuffle(rng);
    }
    items
}

//
// tests
//
