//! Heading reconciliation and bounded turning.
//!
//! Headings live on the continuous angle line, not in a wrapped range, so
//! steering first picks the representative of the desired angle nearest to
//! the current heading, then steps toward it by a bounded amount.

use std::f64::consts::{PI, TAU};

/// Adjusts `to` by a multiple of 2π so that it is the representative
/// nearest to `from` on the continuous angle line.
///
/// The returned value `r` satisfies `|r - from| <= π` and is congruent to
/// `to` modulo 2π: turning from `from` to `r` is always the short way,
/// never more than half a turn. Exact half turns resolve to `from - π`.
pub fn nearest_rotation(from: f64, to: f64) -> f64 {
    let mut diff = (to - from).rem_euclid(TAU);
    if diff >= PI {
        diff -= TAU;
    }
    from + diff
}

/// Steps `heading` toward `target_heading` by at most `rotation_max`
/// radians, clamped so it never overshoots.
///
/// `target_heading` is expected to be a reconciled value from
/// [`nearest_rotation`]; the step is a plain scalar move toward it.
pub fn turn_towards(heading: f64, target_heading: f64, rotation_max: f64) -> f64 {
    if heading < target_heading {
        (heading + rotation_max).min(target_heading)
    } else {
        (heading - rotation_max).max(target_heading)
    }
}
