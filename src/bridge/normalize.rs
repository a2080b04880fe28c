//! Normalization against the monitor threshold

/// Map an evaluated value onto the 0..1 fader range
///
/// Values past the critical threshold clamp to 1.0; the control surface
/// has no headroom beyond full scale.
pub fn normalize(evaluation: f64, threshold: f64) -> f64 {
    (evaluation / threshold).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_scale() {
        assert_eq!(normalize(40.0, 80.0), 0.5);
    }

    #[test]
    fn test_at_threshold() {
        assert_eq!(normalize(80.0, 80.0), 1.0);
    }

    #[test]
    fn test_past_threshold_clamps() {
        assert_eq!(normalize(75.0, 50.0), 1.0);
        assert_eq!(normalize(8000.0, 80.0), 1.0);
    }

    #[test]
    fn test_below_threshold_scales() {
        assert_eq!(normalize(25.0, 50.0), 0.5);
    }

    #[test]
    fn test_zero_evaluation() {
        assert_eq!(normalize(0.0, 80.0), 0.0);
    }

    #[test]
    fn test_fractional_threshold() {
        assert_eq!(normalize(0.25, 0.5), 0.5);
    }
}
