//! End-to-end checks of the public functions

use std::f64::consts::PI;

use timeseries_stats::{
    autocorrelation, periodogram, q_stat, LjungBoxFormula, QStatKind, SpectralStats, StatsConfig,
    StatsError,
};

fn pseudo_noise(n: usize, seed: u64) -> Vec<f64> {
    // xorshift64, mapped to [-1, 1)
    let mut state = seed.max(1);
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
        })
        .collect()
}

#[test]
fn acf_of_sine_matches_reference() {
    let values: Vec<f64> = (0..100).map(|i| (i as f64).sin()).collect();
    let expected = [
        1.0,
        0.53515447,
        -0.4075514,
        -0.96025719,
        -0.62773328,
        0.2691908,
        0.90248604,
        0.70133678,
        -0.13356576,
        -0.82902385,
    ];

    let acf = autocorrelation(&values, 10);
    assert_eq!(acf.len(), expected.len());
    for (a, e) in acf.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-6, "{} vs {}", a, e);
    }
}

#[test]
fn acf_first_coefficient_and_length() {
    for n in [2usize, 3, 17, 64, 100] {
        let series = pseudo_noise(n, n as u64 + 11);
        for k in [-1isize, 0, 1, 5, 200] {
            let acf = autocorrelation(&series, k);
            let expected_len = if k < 1 { n } else { n.min(k as usize) };

            assert_eq!(acf.len(), expected_len, "n = {}, k = {}", n, k);
            assert_eq!(acf[0], 1.0);
        }
    }

    assert!(autocorrelation(&[], 3).is_empty());
    assert!(autocorrelation(&[5.0], 3).is_empty());
}

#[test]
fn acf_keeps_length_for_non_finite_input() {
    let acf = autocorrelation(&[1.0, f64::NAN, 3.0, 4.0], 3);
    assert_eq!(acf.len(), 3);
    assert_eq!(acf[0], 1.0);
    assert!(acf[1..].iter().all(|c| c.is_nan()));

    let acf = autocorrelation(&[2.0, f64::INFINITY, 1.0], 0);
    assert_eq!(acf.len(), 3);
}

#[test]
fn acf_of_inexact_constant_is_zero_beyond_lag_zero() {
    assert_eq!(autocorrelation(&[0.1; 3], 0), vec![1.0, 0.0, 0.0]);
    assert_eq!(autocorrelation(&[0.7; 10], 4), vec![1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn q_stat_pvalues_in_unit_interval() {
    let series = pseudo_noise(200, 7);
    let acf = autocorrelation(&series, 21);

    let result = q_stat(&acf[1..], series.len(), QStatKind::LjungBox).unwrap();
    assert_eq!(result.statistic.len(), 20);
    assert_eq!(result.pvalue.len(), 20);
    assert!(result.pvalue.iter().all(|p| (0.0..=1.0).contains(p)));
}

#[test]
fn q_stat_rejects_zero_observations() {
    let err = q_stat(&[0.4, 0.2], 0, QStatKind::LjungBox).unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument(_)));

    let err = q_stat(&[], 0, QStatKind::LjungBox).unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument(_)));
}

#[test]
fn cumulative_test_flags_autocorrelated_series() {
    let stats = SpectralStats::new(StatsConfig {
        q_stat_formula: LjungBoxFormula::Cumulative,
        max_lag: 10,
    });

    // Strong AR(1)-like dependence
    let noise = pseudo_noise(300, 3);
    let mut ar = vec![0.0; noise.len()];
    for t in 1..noise.len() {
        ar[t] = 0.9 * ar[t - 1] + noise[t];
    }

    let result = stats.ljung_box_test_default(&ar).unwrap();
    assert_eq!(result.len(), 10);
    assert!(result.rejects_at(0.01).iter().all(|&r| r));
}

#[test]
fn periodogram_trivial_and_length() {
    assert_eq!(periodogram(&[3.25]), vec![1.0]);
    assert_eq!(periodogram(&[-8.0]), vec![1.0]);

    for n in [2usize, 5, 16, 33] {
        let series = pseudo_noise(n, 19);
        let spectrum = periodogram(&series);
        assert_eq!(spectrum.len(), n);
        assert!(spectrum.iter().all(|&p| p >= 0.0));
    }
}

#[test]
fn periodogram_peaks_at_sinusoid_frequency() {
    let n = 256;
    let period = 16.0;
    let series: Vec<f64> = (0..n).map(|i| (2.0 * PI * i as f64 / period).cos()).collect();
    let spectrum = periodogram(&series);

    let target = (n as f64 / period) as usize;
    for (k, &p) in spectrum.iter().enumerate().take(n / 2 + 1) {
        if k != target {
            assert!(p < spectrum[target], "bin {} >= peak", k);
        }
    }

    let stats = SpectralStats::default();
    assert!((stats.dominant_period(&series).unwrap() - period).abs() < 1e-9);
}

#[test]
fn engine_is_shareable_across_threads() {
    let stats = std::sync::Arc::new(SpectralStats::default());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let stats = stats.clone();
            std::thread::spawn(move || {
                let series = pseudo_noise(64, t + 1);
                stats.autocorrelation(&series, 8)
            })
        })
        .collect();

    for handle in handles {
        let acf = handle.join().unwrap();
        assert_eq!(acf.len(), 8);
        assert_eq!(acf[0], 1.0);
    }
}
