mod input;
mod pipeline;
mod render;
mod report;
mod tracing;

use std::path::Path;

use crate::input::{ResultsTable, load_results};
use crate::pipeline::adaptive_series::run_adaptive_series;
use crate::pipeline::fixed_modes::run_fixed_modes;
use crate::pipeline::mode_scores::{ModeScore, run_mode_scores};
use crate::pipeline::phase_distribution::run_phase_distribution;
use crate::render::bars::draw_bar_chart;
use crate::render::boxplot::draw_boxplot;
use crate::render::ensure_out_dir;
use crate::render::series::draw_line_chart;
use crate::report::{ModeSummary, RunSummary};

const CSV_PATH: &str = "results_phase0.csv";
const OUT_DIR: &str = "docs/graphs";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // The existence check happens inside load_results; on a missing input
    // the process exits before the output directory is created.
    let table = load_results(Path::new(CSV_PATH)).map_err(|e| e.to_string())?;
    let ok_rows = table.successful();
    crate::info!(
        "loaded {} records from {} ({} successful)",
        table.records.len(),
        CSV_PATH,
        ok_rows.len()
    );

    let out_dir = Path::new(OUT_DIR);
    ensure_out_dir(out_dir).map_err(|e| e.to_string())?;

    let adaptive = run_adaptive_series(&ok_rows);
    if adaptive.n_rows == 0 {
        crate::warn!(
            "no adaptive rows found in {}; skipping adaptive charts",
            CSV_PATH
        );
    } else {
        draw_line_chart(
            &out_dir.join("adaptive_latency_by_step.png"),
            "Adaptive latency vs step (colored by phase)",
            "step (adaptive)",
            "latency (ms)",
            &adaptive.latency,
        )
        .map_err(|e| e.to_string())?;

        draw_line_chart(
            &out_dir.join("adaptive_draft_length_by_step.png"),
            "Adaptive draft_length vs step (colored by phase)",
            "step (adaptive)",
            "draft_length",
            &adaptive.draft_length,
        )
        .map_err(|e| e.to_string())?;

        let distribution = run_phase_distribution(&ok_rows);
        if !distribution.is_empty() {
            draw_boxplot(
                &out_dir.join("adaptive_latency_by_phase_boxplot.png"),
                "Adaptive latency distribution by phase",
                "phase",
                "latency (ms)",
                &distribution,
            )
            .map_err(|e| e.to_string())?;
        }
    }

    let fixed = run_fixed_modes(&ok_rows);
    if fixed.is_empty() {
        crate::warn!("no fixed_* rows found; skipping fixed-mode charts");
    } else {
        let avg = fixed
            .iter()
            .map(|s| (s.mode.clone(), s.avg_latency_ms))
            .collect::<Vec<_>>();
        draw_bar_chart(
            &out_dir.join("fixed_avg_latency.png"),
            "Fixed modes: average latency",
            "mode",
            "avg latency (ms)",
            &avg,
        )
        .map_err(|e| e.to_string())?;

        let p95 = fixed
            .iter()
            .map(|s| (s.mode.clone(), s.p95_latency_ms))
            .collect::<Vec<_>>();
        draw_bar_chart(
            &out_dir.join("fixed_p95_latency.png"),
            "Fixed modes: p95 latency",
            "mode",
            "p95 latency (ms)",
            &p95,
        )
        .map_err(|e| e.to_string())?;
    }

    let scores = run_mode_scores(&ok_rows);
    if scores.is_empty() {
        crate::warn!("no scores computed; skipping score chart");
    } else {
        let bars = scores
            .iter()
            .map(|s| (s.mode.clone(), s.score))
            .collect::<Vec<_>>();
        draw_bar_chart(
            &out_dir.join("score_by_mode.png"),
            "SLO-aware score by mode",
            "mode",
            "score (lower is better)",
            &bars,
        )
        .map_err(|e| e.to_string())?;

        let summary = build_summary(&table, ok_rows.len(), &scores);
        let summary_path = out_dir.join("summary.json");
        report::json::write_summary(&summary_path, &summary).map_err(|e| e.to_string())?;
        crate::info!("wrote run summary {}", summary_path.display());
    }

    println!("\nDone.");
    Ok(())
}

fn build_summary(table: &ResultsTable, successful: usize, scores: &[ModeScore]) -> RunSummary {
    RunSummary {
        tool: "halospec-graphs".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        input: CSV_PATH.to_string(),
        total_records: table.records.len(),
        successful_records: successful,
        modes: scores
            .iter()
            .map(|s| ModeSummary {
                mode: s.mode.clone(),
                n_samples: s.n_samples,
                mean_latency_ms: s.mean_latency_ms,
                p95_latency_ms: s.p95_latency_ms,
                stddev_latency_ms: s.stddev_latency_ms,
                score: s.score,
            })
            .collect(),
    }
}
