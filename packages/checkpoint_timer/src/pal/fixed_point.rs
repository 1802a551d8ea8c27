use std::num::NonZero;

use crate::MICROS_PER_SECOND;

/// Converts a tick counter running at `ticks_per_second` into microseconds.
///
/// Whole seconds and the sub-second remainder are scaled separately so that the
/// intermediate product stays within `u64` for any counter value that itself represents
/// fewer than `u64::MAX` microseconds. No floating point is involved, so the result never
/// drifts as the counter grows.
#[cfg_attr(
    not(all(windows, not(miri))),
    allow(dead_code, reason = "only the Windows clock scales a tick counter")
)]
#[expect(
    clippy::integer_division,
    reason = "truncation to whole microseconds is intended"
)]
pub(crate) fn ticks_to_micros(ticks: u64, ticks_per_second: NonZero<u64>) -> u64 {
    let whole_seconds = ticks / ticks_per_second;
    let remainder = ticks % ticks_per_second;

    // The remainder is below the frequency, so this only overflows for counters
    // ticking faster than 18 THz.
    let sub_second_micros = remainder
        .checked_mul(MICROS_PER_SECOND)
        .expect("tick frequency is unrealistically high")
        / ticks_per_second;

    whole_seconds
        .checked_mul(MICROS_PER_SECOND)
        .and_then(|micros| micros.checked_add(sub_second_micros))
        .expect("tick counter overflows u64 microseconds - impossible with real clocks")
}
