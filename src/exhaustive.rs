//! Exhaustive search for a maximum independent set on small trees. Serves as a reference for the
//! dynamic program.

use crate::cust_error::ProcessingError;
use crate::mis_finder::MisResult;
use crate::tree::Tree;

/// Largest number of vertices `brute_force_mis` accepts.
pub const MAX_BRUTE_FORCE_NODES: usize = 18;

/// Tries all `2^n` vertex subsets and returns a largest independent one. Among sets of the same
/// size the one with the smallest bitmask wins, where vertex `v` is bit `v - 1`.
pub fn brute_force_mis(tree: &Tree) -> Result<MisResult, ProcessingError> {
    let n = tree.size();
    if n > MAX_BRUTE_FORCE_NODES {
        return Err(ProcessingError::InvalidParameter(
            format!("exhaustive search is limited to {} vertices, got {}", MAX_BRUTE_FORCE_NODES, n)))
    }
    let edge_masks: Vec<u32> = tree.edges()
        .map(|(u, v)| (1u32 << (u - 1)) | (1u32 << (v - 1)))
        .collect();

    let mut best_mask: u32 = 0;
    for mask in 0..(1u32 << n) {
        if mask.count_ones() <= best_mask.count_ones() {
            continue
        }
        if edge_masks.iter().all(|&e| mask & e != e) {
            best_mask = mask;
        }
    }
    let set: Vec<usize> = (1..=n).filter(|v| best_mask & (1u32 << (v - 1)) != 0).collect();
    Ok(MisResult::new(set.len(), set))
}
