//! Currency arithmetic helpers.

/// Rounds an amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
