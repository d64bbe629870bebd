//! Histogram helpers

use super::labels;

/// Record how long a connect attempt took
pub fn connect_duration(outcome: &'static str, duration_ms: f64) {
    ::metrics::histogram!(labels::CONNECT_DURATION, labels::OUTCOME => outcome)
        .record(duration_ms);
}
