pub mod json;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ModeSummary {
    pub mode: String,
    pub n_samples: usize,
    pub mean_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub stddev_latency_ms: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub total_records: usize,
    pub successful_records: usize,
    pub modes: Vec<ModeSummary>,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// Linear interpolation between order statistics; a single-element slice
// returns that element for any p.
pub fn quantile_linear(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let frac = pos - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

pub fn p95(values: &[f64]) -> f64 {
    quantile_linear(values, 0.95)
}

// Divisor N, not N-1.
pub fn stddev_pop(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}
