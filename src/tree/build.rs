//! Level building: leaf hashing, pairing and combining

use crate::model::{DataBlock, Digest};
use log::{debug, trace};

/// Number of combination rounds needed to reduce `n` leaves to one root
///
/// This is `ceil(log2(n))`, computed on integers. `n == 0` and `n == 1`
/// both need no rounds.
pub fn rounds_for(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Height of a tree built from `n` blocks (`n >= 1`)
pub fn expected_height(n: usize) -> usize {
    rounds_for(n) + 1
}

/// Hash every block into the leaf level, preserving order
pub(crate) fn hash_leaves(blocks: &[DataBlock]) -> Vec<Digest> {
    blocks.iter().map(Digest::of).collect()
}

/// Combine one group from the pairing step
///
/// A full pair hashes `a ‖ b`. A lone tail is hashed again on its own,
/// so it is never promoted unchanged and never paired with itself.
pub(crate) fn combine(a: &Digest, b: Option<&Digest>) -> Digest {
    match b {
        Some(b) => {
            let out = Digest::of_pair(a, b);
            trace!("combine {} + {} -> {}", a.short(), b.short(), out.short());
            out
        }
        None => {
            let out = Digest::of(a);
            trace!("re-hash odd tail {} -> {}", a.short(), out.short());
            out
        }
    }
}

/// Build the next level up from `level`
pub(crate) fn next_level(level: &[Digest]) -> Vec<Digest> {
    level
        .chunks(2)
        .map(|pair| combine(&pair[0], pair.get(1)))
        .collect()
}

/// Build every level from the leaves up to the root
///
/// Level 0 is `leaves`; the last entry is the singleton root level.
/// `leaves` must not be empty.
pub(crate) fn build_levels(leaves: Vec<Digest>) -> Vec<Vec<Digest>> {
    let rounds = rounds_for(leaves.len());
    let mut levels = Vec::with_capacity(rounds + 1);
    levels.push(leaves);

    while levels[levels.len() - 1].len() > 1 {
        let next = next_level(&levels[levels.len() - 1]);
        debug!("built level {} with {} digests", levels.len(), next.len());
        levels.push(next);
    }

    // The structural stop and the integer round count must agree.
    debug_assert_eq!(levels.len() - 1, rounds);
    levels
}
