/// Organism Encounter v1 — Arithmetic Primitives
///
/// All vitality values: u64. Never subtracted, never wrapped.
/// Additions are checked or saturating, averages are overflow-free.

use crate::config::OverflowPolicy;
use crate::error::{EncounterError, EncounterResult};

/// Checked vitality addition. `Err(VitalityOverflow)` past `u64::MAX`.
pub fn checked_add(a: u64, b: u64) -> EncounterResult<u64> {
    match a.checked_add(b) {
        Some(result) => Ok(result),
        None => Err(EncounterError::VitalityOverflow { lhs: a, rhs: b }),
    }
}

/// Vitality addition under the given overflow policy.
pub fn add_with(a: u64, b: u64, policy: OverflowPolicy) -> EncounterResult<u64> {
    match policy {
        OverflowPolicy::Reject => checked_add(a, b),
        OverflowPolicy::Saturate => match a.checked_add(b) {
            Some(sum) => Ok(sum),
            None => {
                tracing::warn!(lhs = a, rhs = b, "vitality saturated at u64::MAX");
                Ok(u64::MAX)
            }
        },
    }
}

/// `floor(v / 2)`.
pub fn floor_half(v: u64) -> u64 {
    v / 2
}

/// `floor((a + b) / 2)` without forming the intermediate sum.
/// Rounds toward the smaller operand.
pub fn floor_midpoint(a: u64, b: u64) -> u64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo + (hi - lo) / 2
}
