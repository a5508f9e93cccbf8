//! Z-score anomaly classification

/// Default number of standard deviations beyond which a sample is anomalous
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;

/// Result of classifying a single sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Whether the sample deviates beyond the threshold
    pub is_anomaly: bool,

    /// Standard deviations from the mean (0 when std_dev is 0)
    pub z_score: f64,
}

/// Classify a sample against the window statistics.
///
/// A zero-variance window cannot produce anomalies regardless of value:
/// when `std_dev` is 0 the result is normal with a z-score of 0, and the
/// division never happens. Otherwise the sample is anomalous iff
/// `|z| > threshold` (strict).
pub fn classify(value: f64, mean: f64, std_dev: f64, threshold: f64) -> Classification {
    if std_dev == 0.0 {
        return Classification {
            is_anomaly: false,
            z_score: 0.0,
        };
    }

    let z_score = (value - mean) / std_dev;
    Classification {
        is_anomaly: z_score.abs() > threshold,
        z_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_std_dev_is_never_anomalous() {
        let result = classify(1_000_000.0, 100.0, 0.0, DEFAULT_Z_THRESHOLD);
        assert!(!result.is_anomaly);
        assert_eq!(result.z_score, 0.0);
    }

    #[test]
    fn value_within_threshold_is_normal() {
        // z = (110 - 100) / 10 = 1.0
        let result = classify(110.0, 100.0, 10.0, DEFAULT_Z_THRESHOLD);
        assert!(!result.is_anomaly);
        assert!((result.z_score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn value_beyond_threshold_is_anomalous() {
        // z = (150 - 100) / 10 = 5.0
        let result = classify(150.0, 100.0, 10.0, DEFAULT_Z_THRESHOLD);
        assert!(result.is_anomaly);
        assert!((result.z_score - 5.0).abs() < 1e-12);
    }

    #[test]
    fn negative_deviation_is_symmetric() {
        let result = classify(50.0, 100.0, 10.0, DEFAULT_Z_THRESHOLD);
        assert!(result.is_anomaly);
        assert!((result.z_score + 5.0).abs() < 1e-12);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // z exactly at the threshold must not flag
        let result = classify(120.0, 100.0, 10.0, DEFAULT_Z_THRESHOLD);
        assert!((result.z_score - 2.0).abs() < 1e-12);
        assert!(!result.is_anomaly);
    }
}
