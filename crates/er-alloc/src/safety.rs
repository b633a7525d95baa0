//! The safety oracle: Banker's-algorithm safe-state test.
//!
//! A state is *safe* when some ordering of the incidents lets each one, in
//! turn, receive the rest of its maximum claim from what is free, finish, and
//! hand back everything it held.  The scan below greedily finishes any
//! incident whose remaining need fits in `work`, and repeats until a full
//! pass finishes nothing new.  Finishing an incident only ever grows `work`,
//! so greedy order never misses a completion order that exists.
//!
//! Cost is O(n² · R): at most `n` passes, each touching `n` rows of `R`
//! columns.

use er_core::{IncidentId, Units};

use crate::UnitMatrix;

/// `true` if every incident can finish from the given state.
///
/// Pure: reads its inputs only.
pub fn is_safe(available: &[Units], allocated: &UnitMatrix, max_claim: &UnitMatrix) -> bool {
    safe_sequence(available, allocated, max_claim).is_some()
}

/// The completion order the scan found, or `None` if the state is unsafe.
///
/// Incidents appear in the order they were hypothetically finished.
pub fn safe_sequence(
    available: &[Units],
    allocated: &UnitMatrix,
    max_claim: &UnitMatrix,
) -> Option<Vec<IncidentId>> {
    let n = allocated.rows();
    debug_assert_eq!(max_claim.rows(), n);
    debug_assert_eq!(allocated.cols(), available.len());
    debug_assert_eq!(max_claim.cols(), available.len());

    // u64 so that summing released rows can never wrap.
    let mut work: Vec<u64> = available.iter().map(|&u| u as u64).collect();
    let mut finished = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let mut progress = true;
    while progress {
        progress = false;
        for i in 0..n {
            if finished[i] {
                continue;
            }
            let held = allocated.row(i);
            let fits = max_claim
                .row(i)
                .iter()
                .zip(held)
                .zip(&work)
                .all(|((&max, &have), &w)| max.saturating_sub(have) as u64 <= w);

            if fits {
                for (w, &h) in work.iter_mut().zip(held) {
                    *w += h as u64;
                }
                finished[i] = true;
                order.push(IncidentId(i as u32));
                progress = true;
            }
        }
    }

    (order.len() == n).then_some(order)
}
