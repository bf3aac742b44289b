//! Small vector helpers used by the spectral routines

/// Arithmetic mean of a sequence (0.0 for an empty sequence)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Running sum: output[i] = values[0] + ... + values[i]
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Smallest power of two >= `n` (1 for n = 0)
pub fn padded_length(n: usize) -> usize {
    n.max(1).next_power_of_two()
}
