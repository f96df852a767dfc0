//! End-to-end tests of the report pipeline through the library API

mod utils;

use qicompare::cli::OutputFormat;
use qicompare::comparison::{compare, Attribute, Magnitude};
use qicompare::config::ReportConfig;
use qicompare::error::LoadError;
use qicompare::indicator::Indicator;
use qicompare::loader::load_indicator;
use qicompare::pipeline::{run, RunOptions};
use utils::{file_names, three_budget_hv, Workspace};

fn config_for(ws: &Workspace) -> ReportConfig {
    ReportConfig {
        data_dir: ws.data_dir(),
        tables_dir: ws.tables_dir(),
        ..ReportConfig::default()
    }
}

fn options(indicators: &[Indicator]) -> RunOptions {
    RunOptions {
        indicators: indicators.to_vec(),
        with_comparisons: true,
        format: OutputFormat::Text,
    }
}

#[test]
fn test_three_budgets_grouped_by_algorithm() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    let config = config_for(&ws);

    let runs = load_indicator(&ws.data_dir(), Indicator::Hv, &config).unwrap();
    assert_eq!(runs.len(), 3);

    let rows = compare(
        &runs,
        Attribute::Algorithm,
        Attribute::Budget,
        &config.effect_size_thresholds,
    )
    .unwrap();

    let pairs: Vec<(String, String, String)> = rows
        .iter()
        .map(|r| (r.group.to_string(), r.first.to_string(), r.second.to_string()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("\\nsga".to_string(), "1 min".to_string(), "2 min".to_string()),
            ("\\nsga".to_string(), "1 min".to_string(), "3 min".to_string()),
            ("\\nsga".to_string(), "2 min".to_string(), "3 min".to_string()),
        ]
    );

    // Shorter budgets are completely dominated
    for row in &rows {
        assert_eq!(row.a12, 0.0);
        assert_eq!(row.magnitude, Magnitude::Large);
        assert!((row.p_value - 2.0 / 252.0).abs() < 1e-12);
    }
}

#[test]
fn test_pesa2_igd_file_is_labeled_and_negated() {
    let ws = Workspace::new();
    ws.write_result("pesa2", "train-ticket", 300_000, "IGD", &[1.0, 2.0, 3.0]);
    let config = config_for(&ws);

    let runs = load_indicator(&ws.data_dir(), Indicator::Igd, &config).unwrap();
    assert_eq!(runs.len(), 1);

    let m = &runs[0];
    assert_eq!(m.time(), "5 min");
    assert_eq!(m.algorithm(), "\\pesa");
    assert_eq!(m.case_study(), "train-ticket");
    assert_eq!(m.values(), &[-1.0, -2.0, -3.0]);
}

#[test]
fn test_igd_request_ignores_igd_plus_files() {
    let ws = Workspace::new();
    ws.write_result("nsgaii", "train-ticket", 60_000, "IGD", &[0.5, 0.6]);
    ws.write_result("nsgaii", "train-ticket", 60_000, "IGD+", &[0.1, 0.2]);
    let config = config_for(&ws);

    let igd = load_indicator(&ws.data_dir(), Indicator::Igd, &config).unwrap();
    let igd_plus = load_indicator(&ws.data_dir(), Indicator::IgdPlus, &config).unwrap();

    assert_eq!(igd.len(), 1);
    assert_eq!(igd[0].indicator(), Indicator::Igd);
    assert_eq!(igd_plus.len(), 1);
    assert_eq!(igd_plus[0].indicator(), Indicator::IgdPlus);
}

#[test]
fn test_unparseable_names_are_skipped() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    ws.write_raw("qi__nsgaii-train-ticket-bytime-soon__HV.csv", "0.1\n");
    ws.write_raw("notes.txt", "not a result");

    let runs = load_indicator(&ws.data_dir(), Indicator::Hv, &config_for(&ws)).unwrap();
    assert_eq!(runs.len(), 3);
}

#[test]
fn test_unknown_algorithm_is_fatal() {
    let ws = Workspace::new();
    ws.write_result("moead", "train-ticket", 60_000, "HV", &[0.1, 0.2]);

    let err = load_indicator(&ws.data_dir(), Indicator::Hv, &config_for(&ws)).unwrap_err();
    match err {
        LoadError::UnknownAlgorithm { token, .. } => assert_eq!(token, "moead"),
        other => panic!("expected UnknownAlgorithm, got {other:?}"),
    }
}

#[test]
fn test_run_writes_all_tables() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    let config = config_for(&ws);

    let summary = run(&config, &options(&[Indicator::Hv])).unwrap();

    assert_eq!(summary.files_written.len(), 3);
    assert_eq!(summary.measurements_loaded, 3);
    assert_eq!(summary.comparisons, 3);
    assert_eq!(
        file_names(&ws.tables_dir()),
        vec!["HV_mean_std.tex", "HV_test_algo.tex", "HV_test_time.tex"]
    );
}

#[test]
fn test_mean_std_table_content() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    run(&config_for(&ws), &options(&[Indicator::Hv])).unwrap();

    let table = ws.read_table("HV_mean_std.tex");
    assert!(table.starts_with("\\begin{table}[ht]\n\\centering\n\\begin{tabular}{lccr}\n\\toprule\n"));
    assert!(table.contains("Algor. &  Budget & HV Avg & HV Stdev \\\\\n"));
    assert!(table.contains("\\multicolumn{4}{c}{\\textbf{\\ttbs}} \\\\"));
    assert!(table.contains("\\nsga & 1 min & 0.3000 & 0.1414 \\\\\n"));
    assert!(table.contains("\\nsga & 2 min & 1.3000 & 0.1414 \\\\\n"));
    assert!(table.contains("\\nsga & 3 min & 2.3000 & 0.1414 \\\\\n"));
    assert!(table.contains("\\label{tab:HV_mean_std}"));
    assert!(table.ends_with("\\end{table}\n"));

    let first = table.find("1 min").unwrap();
    let second = table.find("2 min").unwrap();
    let third = table.find("3 min").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_time_table_highlights_longer_budget() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    run(&config_for(&ws), &options(&[Indicator::Hv])).unwrap();

    let table = ws.read_table("HV_test_time.tex");
    assert!(table.contains(
        "\\nsga & 1 min & \\underline{2 min} & \\textbf{0.0079} & (L) \\ebar{0.0000}{0.5000} \\\\\n"
    ));
    assert!(table.contains("\\label{tab:HV_test_time}"));
}

#[test]
fn test_minimized_indicator_means_keep_raw_polarity() {
    let ws = Workspace::new();
    ws.write_result("nsgaii", "train-ticket", 60_000, "IGD", &[0.4, 0.6]);
    ws.write_result("spea2", "train-ticket", 60_000, "IGD", &[0.1, 0.3]);
    run(&config_for(&ws), &options(&[Indicator::Igd])).unwrap();

    let table = ws.read_table("IGD_mean_std.tex");
    assert!(table.contains("\\nsga & 1 min & 0.5000 & 0.1000 \\\\\n"));
    assert!(table.contains("\\spea & 1 min & 0.2000 & 0.1000 \\\\\n"));

    let table = ws.read_table("IGD_test_algo.tex");
    assert!(table.contains("1 min & \\nsga & \\spea & 0.3333"));
}

#[test]
fn test_case_study_sections_sorted_with_fallback_label() {
    let ws = Workspace::new();
    ws.write_result("nsgaii", "train-ticket", 60_000, "EP", &[0.1, 0.2]);
    ws.write_result("nsgaii", "cocome", 60_000, "EP", &[0.3, 0.4]);
    run(&config_for(&ws), &options(&[Indicator::Ep])).unwrap();

    let table = ws.read_table("EP_mean_std.tex");
    let ccm = table.find("\\textbf{\\ccm}").unwrap();
    let ttbs = table.find("\\textbf{\\ttbs}").unwrap();
    assert!(ccm < ttbs);
}

#[test]
fn test_no_comparisons_writes_only_mean_std() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    let mut opts = options(&[Indicator::Hv]);
    opts.with_comparisons = false;

    let summary = run(&config_for(&ws), &opts).unwrap();
    assert_eq!(summary.comparisons, 0);
    assert_eq!(file_names(&ws.tables_dir()), vec!["HV_mean_std.tex"]);
}

#[test]
fn test_bad_value_aborts_without_partial_table() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    ws.write_raw("qi__spea2-train-ticket-bytime-60000__HV.csv", "0.1\n\nNaNx\n");

    let err = run(&config_for(&ws), &options(&[Indicator::Hv])).unwrap_err();
    assert!(format!("{:#}", err).contains("__HV.csv:3"));
    assert!(!ws.table_exists("HV_mean_std.tex"));
}

#[test]
fn test_empty_result_file_is_fatal() {
    let ws = Workspace::new();
    ws.write_raw("qi__nsgaii-train-ticket-bytime-60000__HV.csv", "\n\n");

    assert!(run(&config_for(&ws), &options(&[Indicator::Hv])).is_err());
}

#[test]
fn test_constant_runs_have_zero_stdev() {
    let ws = Workspace::new();
    ws.write_result("nsgaii", "train-ticket", 60_000, "HV", &[0.7; 30]);
    ws.write_result("pesa2", "train-ticket", 60_000, "HV", &[1.7; 30]);
    run(&config_for(&ws), &options(&[Indicator::Hv])).unwrap();

    let table = ws.read_table("HV_mean_std.tex");
    assert!(table.contains("\\nsga & 1 min & 0.7000 & 0.0000 \\\\\n"));
    assert!(table.contains("\\pesa & 1 min & 1.7000 & 0.0000 \\\\\n"));
    assert!(!table.contains("NaN"));
}

#[test]
fn test_non_finite_value_is_fatal() {
    let ws = Workspace::new();
    three_budget_hv(&ws);
    ws.write_raw("qi__spea2-train-ticket-bytime-60000__HV.csv", "0.1\n\nNaN\n");

    let err = load_indicator(&ws.data_dir(), Indicator::Hv, &config_for(&ws)).unwrap_err();
    match err {
        LoadError::InvalidValue { line, value, .. } => {
            assert_eq!(line, 3);
            assert_eq!(value, "NaN");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}
