//! Numeric reducers over a window of values

/// Arithmetic mean; `None` for an empty window
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest non-zero value in the window
///
/// Zeroes are treated as gaps rather than samples, so a window of all
/// zeroes reduces to the `f64::MAX` seed.
pub fn minimum(values: &[f64]) -> f64 {
    let mut min = f64::MAX;
    for &value in values {
        if value == 0.0 {
            continue;
        }
        if value < min {
            min = value;
        }
    }
    min
}

/// Largest non-zero value in the window
pub fn maximum(values: &[f64]) -> f64 {
    let mut max = f64::MIN;
    for &value in values {
        if value == 0.0 {
            continue;
        }
        if value > max {
            max = value;
        }
    }
    max
}
