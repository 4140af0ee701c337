use optview::application::reporting::{DEFAULT_HISTORY_LIMIT, ReportPrinter, ReportSelection};
use optview::domain::errors::{DataError, ReportError};
use optview::infrastructure::JsonFileStore;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

// --- Fixtures ---

struct DataDir {
    path: PathBuf,
}

impl DataDir {
    fn new() -> Self {
        let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "optview_it_{}_{}",
            std::process::id(),
            unique_id
        ));
        fs::create_dir_all(&path).expect("Failed to create test data dir");
        Self { path }
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.path.join(name), content).expect("Failed to write fixture");
    }

    fn write_json(&self, name: &str, value: serde_json::Value) {
        self.write(name, &serde_json::to_string_pretty(&value).unwrap());
    }

    fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.path)
    }
}

impl Drop for DataDir {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.path).ok();
    }
}

fn run_reports(
    store: &JsonFileStore,
    selection: ReportSelection,
    limit: usize,
) -> (String, Result<(), ReportError>) {
    let mut printer = ReportPrinter::new(store, Vec::new());
    let result = printer.run(selection, limit);
    (String::from_utf8(printer.into_inner()).unwrap(), result)
}

fn optimization_log(count: usize) -> serde_json::Value {
    let runs: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "timestamp": format!("2025-01-{:02}T12:00:00.000001", n),
                "total_trades": n * 5,
                "analysis": {"patterns": [], "recommendations": [], "priority_actions": []},
                "application": {"applied": 0, "skipped": 0}
            })
        })
        .collect();
    json!(runs)
}

// --- Tests ---

#[test]
fn test_all_reports_with_no_files() {
    let dir = DataDir::new();
    let (out, result) = run_reports(
        &dir.store(),
        ReportSelection::default(),
        DEFAULT_HISTORY_LIMIT,
    );

    assert!(result.is_ok());
    assert!(out.contains("No parameters file found"));
    assert!(out.contains("No optimization history found"));
    assert!(out.contains("Run: python strategy_optimizer.py --run-once"));
    assert!(out.contains("No parameter history found"));
    assert!(out.contains("Need both trading journal and optimization log"));
}

#[test]
fn test_history_of_fifteen_limited_to_ten() {
    let dir = DataDir::new();
    dir.write_json("optimization_log.json", optimization_log(15));

    let selection = ReportSelection {
        history: true,
        ..Default::default()
    };
    let (out, result) = run_reports(&dir.store(), selection, 10);

    assert!(result.is_ok());
    assert!(out.contains("OPTIMIZATION HISTORY (Last 10 of 15)"));
    assert_eq!(out.matches("Total Trades:").count(), 10);

    // Newest first: Jan 15 down to Jan 6.
    let positions: Vec<usize> = (6..=15)
        .rev()
        .map(|day| {
            out.find(&format!("2025-01-{:02} 12:00:00", day))
                .unwrap_or_else(|| panic!("missing day {}", day))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!out.contains("2025-01-05 12:00:00"));
}

#[test]
fn test_empty_log_files() {
    let dir = DataDir::new();
    dir.write("optimization_log.json", "[]");
    dir.write("parameter_history.json", "[]");
    dir.write_json("trading_journal.json", json!({"win_rate": 0.5}));

    let (out, result) = run_reports(
        &dir.store(),
        ReportSelection::all(),
        DEFAULT_HISTORY_LIMIT,
    );

    assert!(result.is_ok());
    assert!(out.contains("Optimization history is empty"));
    assert!(out.contains("Parameter history is empty"));
    assert!(out.contains("No optimizations yet"));
    assert_eq!(out.matches("Total Trades:").count(), 0);
}

#[test]
fn test_partial_parameters_file() {
    let dir = DataDir::new();
    dir.write_json(
        "strategy_parameters.json",
        json!({"stop_loss": {"high_risk_pct": 0.1}}),
    );

    let selection = ReportSelection {
        parameters: true,
        ..Default::default()
    };
    let (out, result) = run_reports(&dir.store(), selection, DEFAULT_HISTORY_LIMIT);

    assert!(result.is_ok());
    assert!(out.contains("CURRENT STRATEGY PARAMETERS"));
    assert!(out.contains("High Risk (7-10):  10.0%"));
    assert!(out.contains("Tech Multiplier:   1.00x"));
    assert!(out.contains("Version: 1"));
}

#[test]
fn test_filter_numbers_render_as_written_in_file() {
    let dir = DataDir::new();
    dir.write(
        "strategy_parameters.json",
        r#"{"filters": {"max_risk_score": 8, "min_liquidity_sol": 5.0}}"#,
    );

    let selection = ReportSelection {
        parameters: true,
        ..Default::default()
    };
    let (out, result) = run_reports(&dir.store(), selection, DEFAULT_HISTORY_LIMIT);

    assert!(result.is_ok());
    assert!(out.contains("Max Risk Score:     8/10"));
    assert!(out.contains("Min Liquidity:      5.0 SOL"));
}

#[test]
fn test_performance_comparison_from_files() {
    let dir = DataDir::new();
    dir.write_json(
        "trading_journal.json",
        json!({"win_rate": 0.55, "total_trades": 120, "total_pnl": 340.5}),
    );
    dir.write_json(
        "optimization_log.json",
        json!([{"timestamp": "2025-01-01T00:00:00", "total_trades": 80,
                "analysis": {}, "application": {"applied": 1, "skipped": 0}}]),
    );

    let selection = ReportSelection {
        performance: true,
        ..Default::default()
    };
    let (out, result) = run_reports(&dir.store(), selection, DEFAULT_HISTORY_LIMIT);

    assert!(result.is_ok());
    assert!(out.contains("Total Trades: 120"));
    assert!(out.contains("Current Win Rate: 55.0%"));
    assert!(out.contains("Total P&L: $340.50"));
    assert!(out.contains("Trades Since Last: 40"));
}

#[test]
fn test_performance_figures_are_rounded() {
    let dir = DataDir::new();
    dir.write_json(
        "trading_journal.json",
        json!({"win_rate": 0.6667, "total_trades": 3, "total_pnl": 0.129}),
    );
    dir.write_json("optimization_log.json", optimization_log(1));

    let selection = ReportSelection {
        performance: true,
        ..Default::default()
    };
    let (out, result) = run_reports(&dir.store(), selection, DEFAULT_HISTORY_LIMIT);

    assert!(result.is_ok());
    assert!(out.contains("Current Win Rate: 66.7%"));
    assert!(out.contains("Total P&L: $0.13"));
}

#[test]
fn test_huge_win_rate_fails_without_stopping_other_reports() {
    let dir = DataDir::new();
    dir.write(
        "trading_journal.json",
        r#"{"win_rate": 1e27, "total_trades": 3, "total_pnl": 0}"#,
    );
    dir.write_json("optimization_log.json", optimization_log(1));

    let (out, result) = run_reports(
        &dir.store(),
        ReportSelection::all(),
        DEFAULT_HISTORY_LIMIT,
    );

    assert!(matches!(result, Err(ReportError::OutOfRange(_))));
    assert!(out.contains("OPTIMIZATION HISTORY (Last 1 of 1)"));
    assert!(out.contains("❌ Trading journal value out of range: win_rate\n"));
    assert!(!out.contains("PERFORMANCE COMPARISON"));
}

#[test]
fn test_malformed_file_fails_without_stopping_other_reports() {
    let dir = DataDir::new();
    dir.write("strategy_parameters.json", "{ this is not json");
    dir.write_json(
        "parameter_history.json",
        json!([{"timestamp": "2025-01-01T08:00:00", "reason": "Before applying AI recommendations"}]),
    );

    let (out, result) = run_reports(
        &dir.store(),
        ReportSelection::all(),
        DEFAULT_HISTORY_LIMIT,
    );

    match result {
        Err(ReportError::Data(DataError::Malformed { path, .. })) => {
            assert_eq!(path, dir.path.join("strategy_parameters.json"));
        }
        other => panic!("expected malformed error, got {:?}", other),
    }

    let notice = out
        .lines()
        .find(|line| line.contains("Could not parse"))
        .expect("missing parse notice");
    assert!(notice.starts_with("❌ Could not parse "));
    assert!(notice.contains("strategy_parameters.json"));

    assert!(!out.contains("CURRENT STRATEGY PARAMETERS"));
    assert!(out.contains("No optimization history found"));
    assert!(out.contains("Reason: Before applying AI recommendations"));
}

#[test]
fn test_wrong_shape_is_reported_as_malformed() {
    let dir = DataDir::new();
    dir.write_json("optimization_log.json", json!({"runs": []}));

    let selection = ReportSelection {
        history: true,
        ..Default::default()
    };
    let (out, result) = run_reports(&dir.store(), selection, DEFAULT_HISTORY_LIMIT);

    assert!(matches!(
        result,
        Err(ReportError::Data(DataError::Malformed { .. }))
    ));
    assert!(out.contains("Could not parse"));
}

#[test]
fn test_reports_never_modify_data_dir() {
    let dir = DataDir::new();
    dir.write_json("optimization_log.json", optimization_log(2));
    dir.write_json("trading_journal.json", json!({"total_trades": 12}));

    let mut before: Vec<_> = fs::read_dir(&dir.path)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    let log_before = fs::read_to_string(dir.path.join("optimization_log.json")).unwrap();

    let (_, result) = run_reports(
        &dir.store(),
        ReportSelection::all(),
        DEFAULT_HISTORY_LIMIT,
    );
    assert!(result.is_ok());

    let mut after: Vec<_> = fs::read_dir(&dir.path)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(
        fs::read_to_string(dir.path.join("optimization_log.json")).unwrap(),
        log_before
    );
}
