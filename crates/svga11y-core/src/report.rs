//! Text report aggregation.
//!
//! Turns per-file result sets into the final report: one PASSED/FAILED line
//! plus message per evaluated rule, a score per file, and an overall score
//! across the run. Output is deterministic for identical inputs.

use crate::rules::ResultSet;

/// Results for one analyzed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file_path: String,
    pub results: ResultSet,
}

/// Per-file outcome of a batch run.
///
/// Read or parse failures become report lines instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Analyzed(FileResult),
    Failed { file_path: String, error: String },
}

/// Report for a single document with one overall score.
pub fn file_report(file: &FileResult) -> String {
    let mut report = format!("Accessibility Report for {}\n\n", file.file_path);
    push_results(&mut report, &file.results);
    report.push_str(&score_line(
        "Overall Score",
        file.results.passed_count(),
        file.results.len(),
    ));
    report
}

/// Report for a batch of documents: a section and score per file, then an
/// overall score.
///
/// The overall denominator is the sum of every file's evaluated-rule count,
/// so a file with more enabled rules weighs proportionally more.
pub fn batch_report(outcomes: &[FileOutcome]) -> String {
    let mut report = String::new();
    let mut passed_total = 0;
    let mut evaluated_total = 0;

    for outcome in outcomes {
        match outcome {
            FileOutcome::Analyzed(file) => {
                report.push_str(&format!("Accessibility Report for {}\n\n", file.file_path));
                push_results(&mut report, &file.results);
                report.push_str(&score_line(
                    "Score",
                    file.results.passed_count(),
                    file.results.len(),
                ));
                report.push_str("\n\n");
                passed_total += file.results.passed_count();
                evaluated_total += file.results.len();
            }
            FileOutcome::Failed { file_path, error } => {
                report.push_str(&format!("Error analyzing {file_path}: {error}\n\n"));
            }
        }
    }

    report.push_str(&score_line("Overall Score", passed_total, evaluated_total));
    report
}

fn push_results(report: &mut String, results: &ResultSet) {
    for (key, result) in results.iter() {
        let verdict = if result.passed { "PASSED" } else { "FAILED" };
        report.push_str(&format!("{key}: {verdict}\n  {}\n\n", result.message));
    }
}

fn score_line(label: &str, passed: usize, total: usize) -> String {
    if total == 0 {
        // An all-disabled run is not a clean bill of health; avoid both a
        // misleading 100% and a NaN.
        return format!("{label}: N/A (no checks evaluated)");
    }
    let score = passed as f64 / total as f64 * 100.0;
    format!("{label}: {score:.2}% ({passed}/{total} checks passed)")
}
