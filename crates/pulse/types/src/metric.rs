//! Inbound metric records

use serde::{Deserialize, Serialize};

/// A single metric submission as received from a client.
///
/// `rps` is the scalar fed to the analytics engine; the full record is
/// persisted to the metric store. A zero `timestamp` means "not provided"
/// and is stamped with the current time at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Unix timestamp in seconds
    #[serde(default)]
    pub timestamp: i64,

    /// CPU utilization sample
    #[serde(default)]
    pub cpu: f64,

    /// Requests-per-second sample
    pub rps: f64,
}

impl MetricRecord {
    /// Create a record with an explicit timestamp
    pub fn new(timestamp: i64, cpu: f64, rps: f64) -> Self {
        Self {
            timestamp,
            cpu,
            rps,
        }
    }

    /// Whether every numeric field is finite (no NaN, no infinities)
    pub fn is_finite(&self) -> bool {
        self.cpu.is_finite() && self.rps.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let record: MetricRecord = serde_json::from_str(r#"{"rps": 120.5}"#).unwrap();
        assert_eq!(record.timestamp, 0);
        assert_eq!(record.cpu, 0.0);
        assert_eq!(record.rps, 120.5);
    }

    #[test]
    fn finite_check_rejects_nan_and_infinity() {
        assert!(MetricRecord::new(1, 50.0, 100.0).is_finite());
        assert!(!MetricRecord::new(1, 50.0, f64::NAN).is_finite());
        assert!(!MetricRecord::new(1, f64::INFINITY, 100.0).is_finite());
        assert!(!MetricRecord::new(1, 50.0, f64::NEG_INFINITY).is_finite());
    }
}
