//! Point-in-time selection
//!
//! Picks "the record effective at time T" out of a key's records:
//!
//! 1. Discard records whose business time is after `as_of`.
//! 2. Keep the record with the greatest business time.
//! 3. On a tie, keep the record with the smallest sequence (earliest inserted).
//!
//! This is a single linear reduction with an explicit comparator. It does not
//! depend on the stability of any sort routine or on the order in which the
//! records are visited.

use std::cmp::Ordering;
use timemap_core::{EventRecord, Key, Timestamp};

/// Order two candidates by effectiveness
///
/// `Greater` means `a` wins over `b`: a later business time wins, and among
/// equal business times the earlier-inserted record wins.
pub fn effectiveness(a: &EventRecord, b: &EventRecord) -> Ordering {
    a.business_time
        .cmp(&b.business_time)
        .then_with(|| b.sequence.cmp(&a.sequence))
}

/// Select the record for `key` effective at `as_of`
///
/// Returns `None` when no record for `key` has `business_time <= as_of`.
pub fn select_effective<'a, I>(records: I, key: &Key, as_of: Timestamp) -> Option<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    records
        .into_iter()
        .filter(|r| &r.key == key && r.business_time <= as_of)
        .fold(None, |best, candidate| match best {
            Some(current) if effectiveness(candidate, current) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(candidate),
        })
}
