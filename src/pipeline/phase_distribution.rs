use crate::input::BenchRecord;
use crate::pipeline::ADAPTIVE_MODE;

// Unlike the step-series passes, the distribution chart uses a fixed phase
// order, not first-seen order.
pub const CANONICAL_PHASES: [&str; 3] = ["steady", "load", "recovery"];

#[derive(Debug, Clone)]
pub struct PhaseLatencies {
    pub phase: &'static str,
    pub values: Vec<f64>,
}

pub fn run_phase_distribution(records: &[&BenchRecord]) -> Vec<PhaseLatencies> {
    let adaptive: Vec<&BenchRecord> = records
        .iter()
        .copied()
        .filter(|r| r.mode == ADAPTIVE_MODE)
        .collect();

    let mut out = Vec::new();
    for phase in CANONICAL_PHASES {
        if !adaptive.iter().any(|r| r.phase == phase) {
            continue;
        }
        let values = adaptive
            .iter()
            .filter(|r| r.phase == phase)
            .filter_map(|r| r.latency_ms)
            .collect();
        out.push(PhaseLatencies { phase, values });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/phase_distribution.rs"]
mod tests;
