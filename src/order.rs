//! Ordering of SRV records by priority and weight per RFC 2782.
//!
//! Records are grouped by priority, the groups are visited in ascending
//! priority order, and each group is ordered by weighted random selection
//! without replacement: a candidate is drawn uniformly from the records not
//! yet placed and accepted if a uniform draw from `[0, total_weight)` does not
//! exceed its weight, so records with larger weights tend to be placed
//! earlier. Rejected draws change nothing and are simply retried. A group
//! whose remaining weights are all zero is placed in uniformly random order.

use crate::SrvRecord;
use rand::Rng;
use std::collections::BTreeMap;

/// Source of uniformly distributed integers used to shuffle SRV records.
///
/// Implemented for every [`rand::Rng`], so a thread-local RNG or a seeded
/// [`StdRng`](rand::rngs::StdRng) can be passed wherever one is expected.
pub trait RandomSource {
    /// Produces an integer uniformly distributed in `[0, n)`. `n` is never 0.
    fn below(&mut self, n: u64) -> u64;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, n: u64) -> u64 {
        self.random_range(0..n)
    }
}

/// Orders SRV records by priority and weight per RFC 2782 using the
/// thread-local RNG, returning the number of records along with the records
/// in the order they should be tried.
///
/// ```
/// use srv_order::{order_records, ServiceRecord, SrvRecord};
/// let records = vec![
///     ServiceRecord::new(20, 1, 443, "c.example.com."),
///     ServiceRecord::new(10, 5, 443, "a.example.com."),
///     ServiceRecord::new(10, 5, 443, "b.example.com."),
/// ];
/// let (count, ordered) = order_records(&records);
/// assert_eq!(count, 3);
/// assert_eq!(ordered[2].target(), "c.example.com.");
/// ```
pub fn order_records<R: SrvRecord>(records: impl IntoIterator<Item = R>) -> (usize, Vec<R>) {
    order_records_with_rng(records, &mut rand::rng())
}

/// Orders SRV records by priority and weight per RFC 2782, drawing randomness
/// from `rng`.
///
/// Records of a lower priority always precede records of a higher priority.
/// The returned count always equals the number of records passed in.
pub fn order_records_with_rng<R, G>(
    records: impl IntoIterator<Item = R>,
    rng: &mut G,
) -> (usize, Vec<R>)
where
    R: SrvRecord,
    G: RandomSource + ?Sized,
{
    let records = records.into_iter().collect::<Vec<_>>();
    if records.len() < 2 {
        return (records.len(), records);
    }

    let mut groups = BTreeMap::<u16, Vec<R>>::new();
    for record in records {
        groups.entry(record.priority()).or_default().push(record);
    }

    let mut ordered = Vec::new();
    for (_priority, group) in groups {
        #[cfg(feature = "log")]
        tracing::trace!(priority = _priority, records = group.len(), "ordering priority group");
        ordered.extend(weighted_order(group, rng));
    }
    (ordered.len(), ordered)
}

/// Orders records sharing one priority by weighted random selection without
/// replacement.
///
/// The expected number of draws is proportional to the number of records, but
/// no hard bound is placed on it.
pub fn weighted_order<R, G>(mut remaining: Vec<R>, rng: &mut G) -> Vec<R>
where
    R: SrvRecord,
    G: RandomSource + ?Sized,
{
    if remaining.len() < 2 {
        return remaining;
    }

    let mut total_weight = remaining
        .iter()
        .map(|record| u64::from(record.weight()))
        .sum::<u64>();
    let mut ordered = Vec::with_capacity(remaining.len());

    while remaining.len() > 1 {
        let idx = rng.below(remaining.len() as u64) as usize;
        let weight = u64::from(remaining[idx].weight());
        // Zero total weight means every remaining record has weight zero
        let accepted = total_weight == 0 || rng.below(total_weight) <= weight;
        if accepted {
            ordered.push(remaining.swap_remove(idx));
            total_weight -= weight;
        }
    }

    // The last record is accepted by any draw
    ordered.extend(remaining.pop());
    ordered
}
