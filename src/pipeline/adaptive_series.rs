use crate::input::BenchRecord;
use crate::pipeline::ADAPTIVE_MODE;

#[derive(Debug, Clone)]
pub struct PhaseSeries {
    pub phase: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct AdaptiveSeries {
    pub latency: Vec<PhaseSeries>,
    pub draft_length: Vec<PhaseSeries>,
    pub n_rows: usize,
}

// One partitioning feeds both metric series: adaptive rows sorted by step,
// grouped by phase in first-seen order. Rows whose metric value is missing
// contribute no point but still establish their phase group.
pub fn run_adaptive_series(records: &[&BenchRecord]) -> AdaptiveSeries {
    let mut rows: Vec<&BenchRecord> = records
        .iter()
        .copied()
        .filter(|r| r.mode == ADAPTIVE_MODE)
        .collect();
    rows.sort_by_key(|r| r.step);

    let mut latency: Vec<PhaseSeries> = Vec::new();
    let mut draft_length: Vec<PhaseSeries> = Vec::new();
    for row in &rows {
        let idx = match latency.iter().position(|s| s.phase == row.phase) {
            Some(idx) => idx,
            None => {
                latency.push(PhaseSeries {
                    phase: row.phase.clone(),
                    points: Vec::new(),
                });
                draft_length.push(PhaseSeries {
                    phase: row.phase.clone(),
                    points: Vec::new(),
                });
                latency.len() - 1
            }
        };
        if let Some(value) = row.latency_ms {
            latency[idx].points.push((row.step as f64, value));
        }
        if let Some(value) = row.draft_length {
            draft_length[idx].points.push((row.step as f64, value));
        }
    }

    AdaptiveSeries {
        latency,
        draft_length,
        n_rows: rows.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/adaptive_series.rs"]
mod tests;
