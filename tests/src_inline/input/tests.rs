use super::*;

use std::fs;
use std::path::PathBuf;

fn temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "halospec_graphs_{}_{}.csv",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_input_is_reported() {
    let path = std::env::temp_dir().join("halospec_graphs_does_not_exist.csv");
    let err = load_results(&path).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
    assert!(err.to_string().contains("missing input"));
}

#[test]
fn test_success_coercion_defaults_to_failure() {
    let path = temp_csv(
        "success",
        "step,global_step,mode,phase,latency_ms,tokens,success,draft_length\n\
         0,0,adaptive,steady,10.0,40,1,4\n\
         1,1,adaptive,steady,11.0,41,0,4\n\
         2,2,adaptive,steady,12.0,42,,4\n\
         3,3,adaptive,steady,13.0,43,oops,4\n\
         4,4,adaptive,steady,14.0,44,1.0,4\n",
    );
    let table = load_results(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let success: Vec<i64> = table.records.iter().map(|r| r.success).collect();
    assert_eq!(success, vec![1, 0, 0, 0, 1]);

    let ok = table.successful();
    assert_eq!(ok.len(), 2);
    assert!(ok.iter().all(|r| r.success == 1));
}

#[test]
fn test_metric_columns_coerce_to_missing() {
    let path = temp_csv(
        "metrics",
        "step,global_step,mode,phase,latency_ms,tokens,success,draft_length\n\
         0,0,adaptive,steady,not-a-number,40,1,4\n\
         1,1,adaptive,steady,,xyz,1,4\n\
         2,2,adaptive,steady,12.5,42,1,4\n",
    );
    let table = load_results(&path).unwrap();
    fs::remove_file(&path).unwrap();

    // Unparseable values become missing; the rows survive.
    assert_eq!(table.records.len(), 3);
    assert_eq!(table.records[0].latency_ms, None);
    assert_eq!(table.records[1].latency_ms, None);
    assert_eq!(table.records[1].tokens, None);
    assert_eq!(table.records[2].latency_ms, Some(12.5));
}

#[test]
fn test_phase_synthesized_when_column_absent() {
    let path = temp_csv(
        "no_phase",
        "step,global_step,mode,latency_ms,tokens,success,draft_length\n\
         0,0,adaptive,10.0,40,1,4\n\
         1,1,fixed_4,11.0,41,1,\n",
    );
    let table = load_results(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(table.records.iter().all(|r| r.phase == PHASE_DEFAULT));
    assert_eq!(table.records[1].draft_length, None);
}

#[test]
fn test_phase_preserved_when_column_present() {
    let path = temp_csv(
        "with_phase",
        "step,global_step,mode,phase,latency_ms,tokens,success,draft_length\n\
         0,0,adaptive,load,10.0,40,1,4\n\
         1,1,adaptive,,11.0,41,1,4\n",
    );
    let table = load_results(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(table.records[0].phase, "load");
    assert_eq!(table.records[1].phase, "");
}

#[test]
fn test_malformed_structural_column_is_fatal() {
    let path = temp_csv(
        "bad_step",
        "step,global_step,mode,phase,latency_ms,tokens,success,draft_length\n\
         zero,0,adaptive,steady,10.0,40,1,4\n",
    );
    let err = load_results(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, InputError::Parse(_)));
}
