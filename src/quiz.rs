use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a random id from `candidates` that is not in `seen`.
///
/// The candidates are shuffled once and the first unseen one wins, so every unseen candidate is
/// equally likely. `None` means the quiz ran out of questions.
pub fn pick_unseen<R: Rng + ?Sized>(
    candidates: &[i64],
    seen: &HashSet<i64>,
    rng: &mut R,
) -> Option<i64> {
    let mut order = candidates.to_vec();
    order.shuffle(rng);
    order.into_iter().find(|id| !seen.contains(id))
}
