//! Shared numeric helpers for the economics math.
//!
//! All profit figures round exactly once, at per-serving granularity, using
//! round-half-away-from-zero. Intermediate values stay unrounded so the
//! ingredient/party fan-out never compounds rounding error.

/// Round half away from zero: 0.5 -> 1, -0.5 -> -1.
pub fn round_half_away(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5).floor() as i64
    } else {
        (x - 0.5).ceil() as i64
    }
}

/// Divide a total by a serving count and round once.
///
/// `servings` is validated to be >= 1 upstream; a zero anyway yields 0
/// rather than a poisoned value, since cost math never fails.
pub fn per_serving(total: i64, servings: i64) -> i64 {
    if servings == 0 {
        return 0;
    }
    round_half_away(total as f64 / servings as f64)
}

/// Like [`per_serving`], for totals that are still fractional (party
/// bonuses produce non-integer revenue). The total must stay unrounded
/// until here; rounding it first and dividing after would round twice.
pub fn per_serving_f64(total: f64, servings: i64) -> i64 {
    if servings == 0 {
        return 0;
    }
    round_half_away(total / servings as f64)
}
