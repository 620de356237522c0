use super::*;

fn rec(step: i64, mode: &str, phase: &str, latency: Option<f64>, draft: Option<f64>) -> BenchRecord {
    BenchRecord {
        step,
        global_step: step,
        mode: mode.to_string(),
        phase: phase.to_string(),
        latency_ms: latency,
        tokens: Some(32.0),
        draft_length: draft,
        success: 1,
    }
}

#[test]
fn test_rows_sorted_by_step_within_phase_groups() {
    let rows = vec![
        rec(3, "adaptive", "steady", Some(13.0), Some(4.0)),
        rec(1, "adaptive", "steady", Some(11.0), Some(2.0)),
        rec(2, "adaptive", "steady", Some(12.0), Some(3.0)),
    ];
    let refs: Vec<&BenchRecord> = rows.iter().collect();
    let out = run_adaptive_series(&refs);

    assert_eq!(out.n_rows, 3);
    assert_eq!(out.latency.len(), 1);
    assert_eq!(
        out.latency[0].points,
        vec![(1.0, 11.0), (2.0, 12.0), (3.0, 13.0)]
    );
    assert_eq!(
        out.draft_length[0].points,
        vec![(1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]
    );
}

#[test]
fn test_phase_groups_in_first_seen_order_after_sorting() {
    // "load" appears first in the file but "steady" owns the lowest step,
    // so after sorting "steady" is first seen.
    let rows = vec![
        rec(5, "adaptive", "load", Some(20.0), Some(2.0)),
        rec(1, "adaptive", "steady", Some(10.0), Some(4.0)),
        rec(6, "adaptive", "recovery", Some(15.0), Some(3.0)),
        rec(2, "adaptive", "load", Some(21.0), Some(2.0)),
    ];
    let refs: Vec<&BenchRecord> = rows.iter().collect();
    let out = run_adaptive_series(&refs);

    let phases: Vec<&str> = out.latency.iter().map(|s| s.phase.as_str()).collect();
    assert_eq!(phases, vec!["steady", "load", "recovery"]);
}

#[test]
fn test_missing_values_drop_points_but_keep_group() {
    let rows = vec![
        rec(1, "adaptive", "steady", None, None),
        rec(2, "adaptive", "steady", Some(12.0), None),
    ];
    let refs: Vec<&BenchRecord> = rows.iter().collect();
    let out = run_adaptive_series(&refs);

    assert_eq!(out.latency.len(), 1);
    assert_eq!(out.latency[0].points, vec![(2.0, 12.0)]);
    assert_eq!(out.draft_length.len(), 1);
    assert!(out.draft_length[0].points.is_empty());
}

#[test]
fn test_non_adaptive_rows_ignored() {
    let rows = vec![
        rec(1, "fixed_4", "steady", Some(10.0), None),
        rec(2, "fixed_8", "steady", Some(11.0), None),
    ];
    let refs: Vec<&BenchRecord> = rows.iter().collect();
    let out = run_adaptive_series(&refs);

    assert_eq!(out.n_rows, 0);
    assert!(out.latency.is_empty());
    assert!(out.draft_length.is_empty());
}
