//! LaTeX table output
//!
//! Three table fragments per indicator:
//! - `<QI>_mean_std.tex`: mean and stdev per algorithm and budget
//! - `<QI>_test_time.tex`: budgets compared within each algorithm
//! - `<QI>_test_algo.tex`: algorithms compared within each budget
//!
//! Each table has one `\multicolumn` section per case study.

use crate::aggregate::AggregateRow;
use crate::comparison::AttributeComparison;
use crate::config::ReportConfig;
use crate::indicator::Indicator;
use crate::report::IndicatorReport;
use crate::significance::{Favored, Significance};

/// A `table`/`tabular` fragment with case-study sections
#[derive(Debug)]
pub struct LatexTable {
    columns: String,
    header: String,
    caption: String,
    label: String,
    body: String,
}

impl LatexTable {
    /// Create an empty table; `columns` is the tabular spec (e.g. `lccr`)
    pub fn new(columns: &str, header: &str, caption: &str, label: &str) -> Self {
        Self {
            columns: columns.to_string(),
            header: header.to_string(),
            caption: caption.to_string(),
            label: label.to_string(),
            body: String::new(),
        }
    }

    fn column_count(&self) -> usize {
        self.columns.chars().filter(char::is_ascii_alphabetic).count()
    }

    /// Start a section spanning all columns
    pub fn add_section(&mut self, title: &str) {
        self.body.push_str("\n\\midrule\n");
        self.body.push_str(&format!(
            "\\multicolumn{{{}}}{{c}}{{\\textbf{{{}}}}} \\\\",
            self.column_count(),
            title
        ));
        self.body.push_str("\n\\midrule\n");
    }

    /// Append a row of already-formatted cells
    pub fn add_row(&mut self, cells: &[String]) {
        self.body.push_str(&cells.join(" & "));
        self.body.push_str(" \\\\\n");
    }

    pub fn to_latex(&self) -> String {
        let mut output = String::new();

        output.push_str("\\begin{table}[ht]\n");
        output.push_str("\\centering\n");
        output.push_str(&format!("\\begin{{tabular}}{{{}}}\n", self.columns));
        output.push_str("\\toprule\n");
        output.push_str(&format!("{} \\\\\n", self.header));
        output.push_str(&self.body);
        output.push_str("\n\\bottomrule\n");
        output.push_str("\\end{tabular}\n");
        output.push_str(&format!("\\caption{{{}}}\n", self.caption));
        output.push_str(&format!("\\label{{{}}}\n", self.label));
        output.push_str("\\end{table}\n");

        output
    }
}

/// Format a p-value with significance highlighting
///
/// Strong: bold scientific notation. Significant: bold, 4 decimals.
/// Otherwise: 4 decimals.
pub fn format_p_value(p_value: f64, config: &ReportConfig) -> String {
    match Significance::classify(p_value, config) {
        Significance::Strong => format!("\\textbf{{{:.1e}}}", p_value),
        Significance::Significant => format!("\\textbf{{{:.4}}}", p_value),
        Significance::NotSignificant => format!("{:.4}", p_value),
    }
}

/// Magnitude letter followed by an effect bar: `(L) \ebar{0.9600}{0.4600}`
pub fn format_effect_size(comparison: &AttributeComparison) -> String {
    format!(
        "({}) \\ebar{{{:.4}}}{{{:.4}}}",
        comparison.magnitude,
        comparison.a12,
        (0.5 - comparison.a12).abs()
    )
}

fn underline(label: String) -> String {
    format!("\\underline{{{}}}", label)
}

/// Cells of one comparison row: group, both sides, p-value, effect size
///
/// When significant, the favored side is underlined.
pub fn comparison_cells(comparison: &AttributeComparison, config: &ReportConfig) -> Vec<String> {
    let mut first = comparison.first.to_string();
    let mut second = comparison.second.to_string();
    match Favored::of(comparison, config) {
        Favored::First => first = underline(first),
        Favored::Second => second = underline(second),
        Favored::Neither => {}
    }

    vec![
        comparison.group.to_string(),
        first,
        second,
        format_p_value(comparison.p_value, config),
        format_effect_size(comparison),
    ]
}

/// Cells of one mean/stdev row
pub fn aggregate_cells(row: &AggregateRow) -> Vec<String> {
    vec![
        row.algorithm.clone(),
        row.budget.to_string(),
        format!("{:.4}", row.mean),
        format!("{:.4}", row.stdev),
    ]
}

const MAGNITUDE_LEGEND: &str = "Magnitude interpretation: negligible (N), small (S), medium (M), large (L). The magnitude of the effect size is also represented by bars.";

/// `<QI>_mean_std.tex`
pub fn mean_std_table(report: &IndicatorReport) -> String {
    let qi = report.indicator;
    let mut table = LatexTable::new(
        "lccr",
        &format!("Algor. &  Budget & {} Avg & {} Stdev", qi, qi),
        &format!(
            "Average {} quality indicator and its standard deviation over \\independentRun runs, listed by algorithm and search budget.",
            qi
        ),
        &format!("tab:{}_mean_std", qi),
    );

    for section in &report.sections {
        table.add_section(&section.label);
        for row in &section.aggregates {
            table.add_row(&aggregate_cells(row));
        }
    }

    table.to_latex()
}

/// `<QI>_test_time.tex`
pub fn time_test_table(report: &IndicatorReport, config: &ReportConfig) -> String {
    let qi = report.indicator;
    let mut table = LatexTable::new(
        "llllll",
        "Algor & Budget 1 & Budget 2 & MWU p & \\multicolumn{2}{c}{Effect Size}",
        &format!(
            "\\mwu test and \\vda effect sizes comparing the {} achieved with different time budgets in \\independentRun runs. {}",
            qi, MAGNITUDE_LEGEND
        ),
        &format!("tab:{}_test_time", qi),
    );

    for section in &report.sections {
        table.add_section(&section.label);
        for comparison in &section.time_comparisons {
            table.add_row(&comparison_cells(comparison, config));
        }
    }

    table.to_latex()
}

/// `<QI>_test_algo.tex`
pub fn algorithm_test_table(report: &IndicatorReport, config: &ReportConfig) -> String {
    let qi = report.indicator;
    let mut table = LatexTable::new(
        "llllll",
        "Budget & Algor. 1 & Algor. 2 & MWU p & \\multicolumn{2}{c}{Effect Size}",
        &format!(
            "\\mwu test and \\vda effect sizes comparing the {} achieved by different algorithms in \\independentRun runs. {}",
            qi, MAGNITUDE_LEGEND
        ),
        &format!("tab:{}_test_algo", qi),
    );

    for section in &report.sections {
        table.add_section(&section.label);
        for comparison in &section.algorithm_comparisons {
            table.add_row(&comparison_cells(comparison, config));
        }
    }

    table.to_latex()
}

/// Output file name for a table kind (`mean_std`, `test_time`, `test_algo`)
pub fn table_file_name(indicator: Indicator, kind: &str) -> String {
    format!("{}_{}.tex", indicator, kind)
}
