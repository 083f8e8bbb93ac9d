use std::f64::consts::{PI, TAU};

pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// Wraps `rad` into (-π, π].
///
/// Both -π and π come out as π. NaN and infinities come out as NaN.
pub fn normalize_radians(rad: f64) -> f64 {
    let full_turns = (rad / TAU).floor();
    let mut normalized = rad - full_turns * TAU;
    if normalized < 0.0 {
        // Rounding in the subtraction can land just below zero. Re-derive from the input.
        normalized = rad + TAU;
        log::trace!("normalize_radians({}) fell back to {}", rad, normalized);
    }
    if normalized > PI {
        normalized -= TAU;
    }
    normalized
}
