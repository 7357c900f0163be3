/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// New stability after applying `delta`: rounded, then clamped to `[0, 1]`.
pub fn apply_delta(stability: f64, delta: f64) -> f64 {
    round2(stability + delta).clamp(0.0, 1.0)
}
