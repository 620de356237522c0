use std::collections::BTreeMap;

use crate::input::BenchRecord;
use crate::report::{mean, p95, stddev_pop};

#[derive(Debug, Clone)]
pub struct ModeScore {
    pub mode: String,
    pub n_samples: usize,
    pub mean_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub stddev_latency_ms: f64,
    pub score: f64,
}

// Every mode participates here, not just fixed_* ones. Modes with no
// non-missing latency values are left out entirely rather than scored as
// zero.
pub fn run_mode_scores(records: &[&BenchRecord]) -> Vec<ModeScore> {
    let mut by_mode: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in records {
        let values = by_mode.entry(r.mode.as_str()).or_default();
        if let Some(v) = r.latency_ms {
            values.push(v);
        }
    }

    by_mode
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(mode, values)| {
            let mean_latency_ms = mean(&values);
            let p95_latency_ms = p95(&values);
            let stddev_latency_ms = stddev_pop(&values);
            ModeScore {
                mode: mode.to_string(),
                n_samples: values.len(),
                mean_latency_ms,
                p95_latency_ms,
                stddev_latency_ms,
                score: composite_score(mean_latency_ms, p95_latency_ms, stddev_latency_ms),
            }
        })
        .collect()
}

// Lower is better. The stddev term uses the population (divisor N) variant.
pub fn composite_score(mean: f64, p95: f64, stddev: f64) -> f64 {
    mean + 0.5 * p95 + 0.2 * stddev
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mode_scores.rs"]
mod tests;
