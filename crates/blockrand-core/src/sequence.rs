//! Permuted-block sequence generation.
//!
//! The output list is a concatenation of whole blocks. Each block holds every
//! integer in `[0, seq_range)` exactly once, in an order drawn independently
//! per block. Shuffling per block rather than globally is what keeps every
//! combination present exactly once in each window of `seq_range` rows.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate `reps` concatenated, independently shuffled copies of
/// `[0, seq_range)`.
///
/// The caller supplies the generator: a seeded `StdRng` for reproducible
/// output, one from OS entropy for production lists.
pub fn shuffled_sequence<R: Rng + ?Sized>(seq_range: u32, reps: usize, rng: &mut R) -> Vec<u32> {
    debug!("sequence range: {seq_range}");
    debug!("reps: {reps}");

    let mut sequence = Vec::with_capacity(reps * seq_range as usize);
    for _ in 0..reps {
        let mut block: Vec<u32> = (0..seq_range).collect();
        block.shuffle(rng);
        sequence.extend_from_slice(&block);
    }

    debug!("actual list length: {}", sequence.len());
    sequence
}
