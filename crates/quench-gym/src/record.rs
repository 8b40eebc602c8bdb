//! Benchmark records and the timing fixture.

use std::future::Future;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wall-clock statistics over the timed iterations of one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Number of timed iterations.
    pub iterations: u32,
    /// Mean iteration time.
    pub mean: Duration,
    /// Population standard deviation of iteration times.
    pub stddev: Duration,
    /// Fastest iteration.
    pub min: Duration,
    /// Slowest iteration.
    pub max: Duration,
    /// Total wall-clock time.
    pub total: Duration,
}

impl Timing {
    /// Compute statistics from per-iteration samples.
    ///
    /// Empty input yields an all-zero timing.
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self {
                iterations: 0,
                mean: Duration::ZERO,
                stddev: Duration::ZERO,
                min: Duration::ZERO,
                max: Duration::ZERO,
                total: Duration::ZERO,
            };
        }

        let total: Duration = samples.iter().sum();
        let mean_secs = total.as_secs_f64() / samples.len() as f64;
        let variance = samples
            .iter()
            .map(|s| {
                let d = s.as_secs_f64() - mean_secs;
                d * d
            })
            .sum::<f64>()
            / samples.len() as f64;

        Self {
            iterations: samples.len() as u32,
            mean: Duration::from_secs_f64(mean_secs),
            stddev: Duration::from_secs_f64(variance.sqrt()),
            min: *samples.iter().min().unwrap_or(&Duration::ZERO),
            max: *samples.iter().max().unwrap_or(&Duration::ZERO),
            total,
        }
    }
}

/// Result of one benchmarked case: timing statistics plus named extra
/// fields (`gate_count_2q`, `depth_2q`, ...) for the reporting pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Name of the case, e.g. `device_transpile/qft_100`.
    pub name: String,
    /// When the case finished.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock statistics.
    pub timing: Timing,
    /// Extra named metrics.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BenchmarkRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, timing: Timing) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            timing,
            extra: serde_json::Map::new(),
        }
    }

    /// Attach an extra named metric.
    #[must_use]
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Time an async operation over `iterations` runs (at least one).
///
/// The operation's value from the **last** iteration is returned
/// alongside the statistics, so callers extract result metrics only
/// after timing completes. The first error aborts the measurement and
/// propagates unmodified.
pub async fn measure<T, E, F, Fut>(iterations: u32, mut op: F) -> Result<(T, Timing), E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let iterations = iterations.max(1);
    let mut samples = Vec::with_capacity(iterations as usize);

    let start = Instant::now();
    let mut value = op().await?;
    samples.push(start.elapsed());

    for _ in 1..iterations {
        let start = Instant::now();
        value = op().await?;
        samples.push(start.elapsed());
    }

    Ok((value, Timing::from_samples(&samples)))
}
