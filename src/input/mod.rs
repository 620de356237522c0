use std::path::Path;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const PHASE_DEFAULT: &str = "steady";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] csv::Error),
}

#[derive(Debug, Clone)]
pub struct BenchRecord {
    pub step: i64,
    pub global_step: i64,
    pub mode: String,
    pub phase: String,
    pub latency_ms: Option<f64>,
    pub tokens: Option<f64>,
    pub draft_length: Option<f64>,
    pub success: i64,
}

#[derive(Debug, Clone)]
pub struct ResultsTable {
    pub records: Vec<BenchRecord>,
}

impl ResultsTable {
    // All aggregation consumes this view; the unfiltered records stay
    // available on the table itself.
    pub fn successful(&self) -> Vec<&BenchRecord> {
        self.records.iter().filter(|r| r.success == 1).collect()
    }
}

// Raw row as it appears in the CSV. Structural columns (`step`,
// `global_step`, `draft_length`) deserialize strictly and fail the run on
// malformed input; the metric columns coerce leniently.
#[derive(Debug, Deserialize)]
struct RawRecord {
    step: i64,
    global_step: i64,
    mode: String,
    #[serde(default)]
    phase: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    latency_ms: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    tokens: Option<f64>,
    draft_length: Option<f64>,
    #[serde(deserialize_with = "success_flag")]
    success: i64,
}

pub fn load_results(path: &Path) -> Result<ResultsTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "{} not found in the working directory",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let has_phase_column = reader.headers()?.iter().any(|h| h == "phase");

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let raw: RawRecord = result?;
        let phase = match raw.phase {
            Some(value) => value,
            // An empty cell in an existing phase column stays empty; only a
            // fully absent column gets the synthesized default.
            None if has_phase_column => String::new(),
            None => PHASE_DEFAULT.to_string(),
        };
        records.push(BenchRecord {
            step: raw.step,
            global_step: raw.global_step,
            mode: raw.mode,
            phase,
            latency_ms: raw.latency_ms,
            tokens: raw.tokens,
            draft_length: raw.draft_length,
            success: raw.success,
        });
    }

    Ok(ResultsTable { records })
}

fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan()))
}

// Unparseable or missing success values count as failures, unlike the
// latency/tokens columns where they become missing-but-kept.
fn success_flag<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    let parsed = raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite());
    Ok(parsed.map(|v| v as i64).unwrap_or(0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
