use std::collections::BTreeMap;

use crate::input::BenchRecord;
use crate::pipeline::FIXED_MODE_PREFIX;
use crate::report::{mean, p95};

#[derive(Debug, Clone)]
pub struct FixedModeStats {
    pub mode: String,
    pub avg_latency_ms: f64,
    pub p95_latency_ms: f64,
}

// Literal prefix match: "fixed_8" qualifies, "fixedX" does not. The BTreeMap
// key order gives the lexicographic mode ordering both charts share.
pub fn run_fixed_modes(records: &[&BenchRecord]) -> Vec<FixedModeStats> {
    let mut by_mode: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in records {
        if !r.mode.starts_with(FIXED_MODE_PREFIX) {
            continue;
        }
        let values = by_mode.entry(r.mode.as_str()).or_default();
        if let Some(v) = r.latency_ms {
            values.push(v);
        }
    }

    by_mode
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(mode, values)| FixedModeStats {
            mode: mode.to_string(),
            avg_latency_ms: mean(&values),
            p95_latency_ms: p95(&values),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/fixed_modes.rs"]
mod tests;
