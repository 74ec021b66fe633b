//! Money rounding helpers.
//!
//! Order totals and line amounts are plain `f64` values rounded to two
//! decimal places. `f64::round` rounds half away from zero, which is the
//! documented rounding rule for every stored total.

/// Round a monetary amount to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
