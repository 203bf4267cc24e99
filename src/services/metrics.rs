use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, VecDeque};
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Key/value context attached to a measured call
pub type Metadata = Map<String, Value>;

/// A single timed operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub operation: String,
    #[serde(rename = "durationMs")]
    pub duration_ms: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Aggregated timings for one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationStats {
    pub count: usize,
    #[serde(rename = "avgDurationMs")]
    pub avg_duration_ms: f64,
    #[serde(rename = "minDurationMs")]
    pub min_duration_ms: f64,
    #[serde(rename = "maxDurationMs")]
    pub max_duration_ms: f64,
    #[serde(rename = "totalDurationMs")]
    pub total_duration_ms: f64,
    /// Percentage of successful calls (0-100)
    #[serde(rename = "successRate")]
    pub success_rate: f64,
}

/// Timing recorder applied around engine calls
///
/// Keeps the most recent `max_entries` metrics. Callers wrap the work they
/// want measured; the measured code never sees the logger.
pub struct PerformanceLogger {
    metrics: Mutex<VecDeque<PerformanceMetric>>,
    max_entries: usize,
    slow_threshold: Duration,
}

impl PerformanceLogger {
    pub fn new(max_entries: usize, slow_threshold: Duration) -> Self {
        Self {
            metrics: Mutex::new(VecDeque::with_capacity(max_entries.min(1024))),
            max_entries,
            slow_threshold,
        }
    }

    /// Time an infallible call and record it as successful
    pub fn measure<T>(&self, operation: &str, metadata: Metadata, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(operation, start.elapsed(), true, None, metadata);
        result
    }

    /// Time a fallible call, recording the error text on failure
    pub fn try_measure<T, E: Display>(
        &self,
        operation: &str,
        metadata: Metadata,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => self.record(operation, elapsed, true, None, metadata),
            Err(e) => self.record(operation, elapsed, false, Some(e.to_string()), metadata),
        }

        result
    }

    /// Strictly longer than the configured threshold
    pub fn is_slow(&self, duration: Duration) -> bool {
        duration > self.slow_threshold
    }

    /// Store a metric, evicting the oldest one past capacity
    pub fn record(
        &self,
        operation: &str,
        duration: Duration,
        success: bool,
        error: Option<String>,
        metadata: Metadata,
    ) {
        let duration_ms = duration.as_secs_f64() * 1000.0;

        if self.is_slow(duration) {
            tracing::warn!(
                operation,
                duration_ms,
                ?metadata,
                "Slow operation detected"
            );
        } else {
            tracing::debug!(operation, duration_ms, success, "Operation measured");
        }

        if self.max_entries == 0 {
            return;
        }

        let metric = PerformanceMetric {
            operation: operation.to_string(),
            duration_ms,
            timestamp: chrono::Utc::now(),
            success,
            error,
            metadata,
        };

        let mut metrics = self.lock();
        metrics.push_back(metric);
        while metrics.len() > self.max_entries {
            metrics.pop_front();
        }
    }

    /// Statistics for one operation, `None` if it was never recorded
    pub fn stats(&self, operation: &str) -> Option<OperationStats> {
        let metrics = self.lock();
        compute_stats(metrics.iter().filter(|m| m.operation == operation))
    }

    /// Statistics for every recorded operation
    pub fn summary(&self) -> BTreeMap<String, OperationStats> {
        let metrics = self.lock();
        let mut grouped: BTreeMap<&str, Vec<&PerformanceMetric>> = BTreeMap::new();
        for metric in metrics.iter() {
            grouped.entry(metric.operation.as_str()).or_default().push(metric);
        }

        grouped
            .into_iter()
            .filter_map(|(operation, entries)| {
                compute_stats(entries.into_iter()).map(|stats| (operation.to_string(), stats))
            })
            .collect()
    }

    pub fn all_metrics(&self) -> Vec<PerformanceMetric> {
        self.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<PerformanceMetric>> {
        // A panic while holding the lock leaves the ring itself consistent
        self.metrics.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for PerformanceLogger {
    fn default() -> Self {
        Self::new(1000, Duration::from_secs(1))
    }
}

fn compute_stats<'a>(metrics: impl Iterator<Item = &'a PerformanceMetric>) -> Option<OperationStats> {
    let mut count = 0usize;
    let mut successes = 0usize;
    let mut total = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for metric in metrics {
        count += 1;
        if metric.success {
            successes += 1;
        }
        total += metric.duration_ms;
        min = min.min(metric.duration_ms);
        max = max.max(metric.duration_ms);
    }

    if count == 0 {
        return None;
    }

    Some(OperationStats {
        count,
        avg_duration_ms: total / count as f64,
        min_duration_ms: min,
        max_duration_ms: max,
        total_duration_ms: total,
        success_rate: successes as f64 / count as f64 * 100.0,
    })
}

/// Build a metadata bag from key/value pairs
pub fn metadata<const N: usize>(pairs: [(&str, Value); N]) -> Metadata {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn logger(max_entries: usize) -> PerformanceLogger {
        PerformanceLogger::new(max_entries, Duration::from_secs(60))
    }

    #[test]
    fn test_slow_threshold_is_strict() {
        let logger = PerformanceLogger::new(10, Duration::from_millis(1000));

        assert!(!logger.is_slow(Duration::from_millis(999)));
        assert!(!logger.is_slow(Duration::from_millis(1000)));
        assert!(logger.is_slow(Duration::from_millis(1001)));
    }

    #[test]
    fn test_measure_returns_value_and_records() {
        let logger = logger(10);

        let value = logger.measure("score", metadata([("subjectId", json!("u1"))]), || 42);

        assert_eq!(value, 42);
        let metrics = logger.all_metrics();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].operation, "score");
        assert!(metrics[0].success);
        assert_eq!(metrics[0].metadata["subjectId"], "u1");
    }

    #[test]
    fn test_try_measure_records_failure() {
        let logger = logger(10);

        let ok: Result<u8, String> = logger.try_measure("topMatches", Metadata::new(), || Ok(1));
        let err: Result<u8, String> =
            logger.try_measure("topMatches", Metadata::new(), || Err("bad limit".to_string()));

        assert_eq!(ok, Ok(1));
        assert_eq!(err, Err("bad limit".to_string()));

        let stats = logger.stats("topMatches").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.success_rate, 50.0);
        assert_eq!(logger.all_metrics()[1].error.as_deref(), Some("bad limit"));
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let logger = logger(3);

        for i in 0..5 {
            logger.record(&format!("op{}", i), Duration::from_millis(1), true, None, Metadata::new());
        }

        let operations: Vec<String> = logger.all_metrics().into_iter().map(|m| m.operation).collect();
        assert_eq!(operations, vec!["op2", "op3", "op4"]);
    }

    #[test]
    fn test_stats_aggregate_durations() {
        let logger = logger(10);
        logger.record("score", Duration::from_millis(10), true, None, Metadata::new());
        logger.record("score", Duration::from_millis(30), true, None, Metadata::new());
        logger.record("other", Duration::from_millis(5), true, None, Metadata::new());

        let stats = logger.stats("score").unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.avg_duration_ms - 20.0).abs() < 1e-9);
        assert!((stats.min_duration_ms - 10.0).abs() < 1e-9);
        assert!((stats.max_duration_ms - 30.0).abs() < 1e-9);
        assert!((stats.total_duration_ms - 40.0).abs() < 1e-9);
        assert_eq!(stats.success_rate, 100.0);

        assert!(logger.stats("missing").is_none());

        let summary = logger.summary();
        assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["other", "score"]);
    }

    #[test]
    fn test_clear() {
        let logger = logger(10);
        logger.measure("score", Metadata::new(), || ());
        logger.clear();
        assert!(logger.all_metrics().is_empty());
        assert!(logger.summary().is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = logger(0);
        logger.measure("score", Metadata::new(), || ());
        assert!(logger.all_metrics().is_empty());
    }
}
