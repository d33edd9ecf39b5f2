// tests/unit_history.rs
use sensei_core::analysis::analyze;
use sensei_core::history::HistoryStore;
use sensei_core::types::{AnalysisSummary, NO_ANALYSIS_HEADLINE};
use tempfile::TempDir;

fn summary(source: &str) -> AnalysisSummary {
    let findings = analyze(source);
    AnalysisSummary::of(source, &findings)
}

#[test]
fn missing_file_reads_as_empty_history() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::in_dir(dir.path());
    assert!(store.sessions().unwrap().is_empty());
}

#[test]
fn record_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::in_dir(dir.path());

    let first = store.record(&summary("x = 5")).unwrap();
    let second = store.record(&summary("fun main() { println(\"Hello\") }")).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[test]
fn sessions_come_back_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::in_dir(dir.path());
    for source in ["x = 5", "foo", "fun main() { println(\"Hello\") }"] {
        store.record(&summary(source)).unwrap();
    }

    let sessions = store.sessions().unwrap();
    let ids: Vec<u64> = sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn record_carries_summary_fields() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::in_dir(dir.path());

    let source = "x = 5";
    let record = store.record(&summary(source)).unwrap();
    assert_eq!(record.code_length, 5);
    // Missing main plus the undeclared assignment.
    assert_eq!(record.issue_count, 2);
    assert_eq!(record.headline, "Missing main() Function");
}

#[test]
fn empty_analysis_records_the_placeholder_headline() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::in_dir(dir.path());

    let record = store.record(&summary("   ")).unwrap();
    assert_eq!(record.headline, NO_ANALYSIS_HEADLINE);
    assert_eq!(record.issue_count, 0);
    assert_eq!(record.code_length, 3);
}

#[test]
fn history_survives_reopening_the_store() {
    let dir = TempDir::new().unwrap();
    HistoryStore::in_dir(dir.path())
        .record(&summary("foo"))
        .unwrap();

    let reopened = HistoryStore::in_dir(dir.path());
    let sessions = reopened.sessions().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].headline, "Missing main() Function");
}
