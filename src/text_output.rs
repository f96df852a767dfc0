//! Plain-text comparison summaries for the terminal

use crate::comparison::{Attribute, AttributeComparison};
use crate::config::ReportConfig;
use crate::report::IndicatorReport;
use crate::significance::{Favored, Significance};

/// Pipe-separated table of comparisons with aligned columns
///
/// Significant rows are flagged with `*` (strong: `**`); the favored side
/// is wrapped in brackets.
pub fn comparison_table(
    rows: &[AttributeComparison],
    group_by: Attribute,
    varying: Attribute,
    config: &ReportConfig,
) -> String {
    let header = vec![
        group_by.name().to_string(),
        format!("{} 1", varying.name()),
        format!("{} 2", varying.name()),
        "MWU p".to_string(),
        "A12".to_string(),
        "magn.".to_string(),
    ];

    let mut lines = vec![header];
    for row in rows {
        let mark = match Significance::classify(row.p_value, config) {
            Significance::Strong => "**",
            Significance::Significant => "*",
            Significance::NotSignificant => "",
        };
        let (first, second) = match Favored::of(row, config) {
            Favored::First => (format!("[{}]", row.first), row.second.to_string()),
            Favored::Second => (row.first.to_string(), format!("[{}]", row.second)),
            Favored::Neither => (row.first.to_string(), row.second.to_string()),
        };

        lines.push(vec![
            row.group.to_string(),
            first,
            second,
            format!("{:.4}{}", row.p_value, mark),
            format!("{:.4}", row.a12),
            row.magnitude.to_string(),
        ]);
    }

    let widths: Vec<usize> = (0..lines[0].len())
        .map(|col| lines.iter().map(|l| l[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut output = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        output.push_str(&format!("| {} |\n", cells.join(" | ")));

        if idx == 0 {
            let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            output.push_str(&format!("|-{}-|\n", rule.join("-|-")));
        }
    }

    output
}

/// Full terminal summary for one indicator
pub fn render_summary(report: &IndicatorReport, config: &ReportConfig) -> String {
    let mut output = String::new();

    for section in &report.sections {
        if !section.time_comparisons.is_empty() {
            output.push_str(&format!(
                "{} / {}: budgets within each algorithm\n",
                report.indicator, section.case_study
            ));
            output.push_str(&comparison_table(
                &section.time_comparisons,
                Attribute::Algorithm,
                Attribute::Budget,
                config,
            ));
            output.push('\n');
        }

        if !section.algorithm_comparisons.is_empty() {
            output.push_str(&format!(
                "{} / {}: algorithms within each budget\n",
                report.indicator, section.case_study
            ));
            output.push_str(&comparison_table(
                &section.algorithm_comparisons,
                Attribute::Budget,
                Attribute::Algorithm,
                config,
            ));
            output.push('\n');
        }
    }

    output
}
