//! Check command - analyzes SVG files for accessibility issues

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use svga11y_core::analysis::AnalysisEngine;
use svga11y_core::config::load_config_or_default_with_warnings;
use svga11y_core::parser::parse_svg;
use svga11y_core::report::{batch_report, file_report, FileOutcome, FileResult};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// SVG file to analyze
    #[arg(value_name = "FILE", required_unless_present = "directory")]
    pub path: Option<PathBuf>,

    /// Directory to scan recursively for SVG files
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        self.configure_colors();

        let config_result = load_config_or_default_with_warnings(&self.start_dir());
        for warning in &config_result.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
        let config = config_result.config;

        let engine = AnalysisEngine::with_config(&config);

        if let Some(dir) = &self.directory {
            let ignore = compile_ignore_patterns(&config.ignore);
            let files = discover_files(dir, &ignore)?;
            if files.is_empty() {
                println!("No SVG files found.");
                return Ok(());
            }
            tracing::debug!(count = files.len(), "analyzing files");

            // Analyses are independent; par_iter keeps input order in the
            // collected outcomes, so the report stays deterministic.
            let outcomes: Vec<FileOutcome> = files
                .par_iter()
                .map(|file| analyze_file(&engine, file))
                .collect();

            println!("{}", batch_report(&outcomes));
        } else if let Some(file) = &self.path {
            match analyze_file(&engine, file) {
                FileOutcome::Analyzed(result) => println!("{}", file_report(&result)),
                FileOutcome::Failed { file_path, error } => {
                    eprintln!("{} analyzing {}: {}", "error".red().bold(), file_path, error);
                }
            }
        }

        Ok(())
    }

    /// Directory the config discovery walk starts from.
    fn start_dir(&self) -> PathBuf {
        if let Some(dir) = &self.directory {
            return dir.clone();
        }
        self.path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn configure_colors(&self) {
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        if self.no_color || no_color_env {
            colored::control::set_override(false);
        }
    }
}

/// Reads, parses and analyzes one file; failures become report outcomes
/// rather than errors so one bad file never aborts a batch.
fn analyze_file(engine: &AnalysisEngine, path: &Path) -> FileOutcome {
    let file_path = path.to_string_lossy().to_string();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            return FileOutcome::Failed {
                file_path,
                error: e.to_string(),
            };
        }
    };

    match parse_svg(&source) {
        Ok(doc) => FileOutcome::Analyzed(FileResult {
            file_path,
            results: engine.analyze(&doc),
        }),
        Err(e) => FileOutcome::Failed {
            file_path,
            error: e.to_string(),
        },
    }
}

fn discover_files(dir: &Path, ignore: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        anyhow::bail!("Path does not exist: {}", dir.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_svg_file(e.path()))
        .filter(|e| !is_ignored(e.path(), ignore))
        .map(|e| e.path().to_path_buf())
        .collect();

    // Walk order is platform-dependent; sort for a stable report.
    files.sort();
    Ok(files)
}

fn compile_ignore_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                eprintln!(
                    "{} invalid ignore pattern '{}': {}",
                    "warning:".yellow().bold(),
                    p,
                    e
                );
                None
            }
        })
        .collect()
}

fn is_svg_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name == "node_modules")
        .unwrap_or(false)
}

fn is_ignored(path: &Path, ignore: &[Pattern]) -> bool {
    ignore.iter().any(|pattern| pattern.matches_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn discover_files_finds_svg_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.svg")).unwrap();
        File::create(dir.path().join("b.svg")).unwrap();
        File::create(dir.path().join("readme.md")).unwrap();

        let files = discover_files(dir.path(), &[]).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn discover_files_is_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("icons");
        fs::create_dir(&sub).unwrap();
        File::create(dir.path().join("z.svg")).unwrap();
        File::create(sub.join("a.svg")).unwrap();

        let files = discover_files(dir.path(), &[]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("icons/a.svg"));
        assert!(files[1].ends_with("z.svg"));
    }

    #[test]
    fn discover_files_skips_hidden_and_node_modules() {
        let dir = tempdir().unwrap();
        let hidden = dir.path().join(".hidden");
        let nm = dir.path().join("node_modules");
        fs::create_dir(&hidden).unwrap();
        fs::create_dir(&nm).unwrap();
        File::create(hidden.join("h.svg")).unwrap();
        File::create(nm.join("dep.svg")).unwrap();
        File::create(dir.path().join("visible.svg")).unwrap();

        let files = discover_files(dir.path(), &[]).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("visible.svg"));
    }

    #[test]
    fn discover_files_applies_ignore_patterns() {
        let dir = tempdir().unwrap();
        let build = dir.path().join("build");
        fs::create_dir(&build).unwrap();
        File::create(build.join("out.svg")).unwrap();
        File::create(dir.path().join("src.svg")).unwrap();

        let ignore = compile_ignore_patterns(&["**/build/**".to_string()]);
        let files = discover_files(dir.path(), &ignore).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src.svg"));
    }

    #[test]
    fn discover_files_errors_on_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(discover_files(&missing, &[]).is_err());
    }

    #[test]
    fn is_svg_file_checks_extension_case_insensitively() {
        assert!(is_svg_file(Path::new("a.svg")));
        assert!(is_svg_file(Path::new("a.SVG")));
        assert!(!is_svg_file(Path::new("a.png")));
        assert!(!is_svg_file(Path::new("svg")));
    }

    #[test]
    fn analyze_file_produces_results_for_valid_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "<svg><title>Chart</title></svg>").unwrap();

        let outcome = analyze_file(&AnalysisEngine::new(), &path);

        match outcome {
            FileOutcome::Analyzed(result) => {
                assert_eq!(result.results.len(), 12);
            }
            FileOutcome::Failed { error, .. } => panic!("Unexpected failure: {error}"),
        }
    }

    #[test]
    fn analyze_file_reports_parse_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "<svg><unclosed>").unwrap();

        let outcome = analyze_file(&AnalysisEngine::new(), &path);

        assert!(matches!(outcome, FileOutcome::Failed { .. }));
    }

    #[test]
    fn analyze_file_reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.svg");

        let outcome = analyze_file(&AnalysisEngine::new(), &path);

        assert!(matches!(outcome, FileOutcome::Failed { .. }));
    }

    #[test]
    fn invalid_ignore_patterns_are_dropped() {
        let patterns = compile_ignore_patterns(&["ok/**".to_string(), "[".to_string()]);

        assert_eq!(patterns.len(), 1);
    }

    #[test]
    fn start_dir_prefers_directory_flag() {
        let args = CheckArgs {
            path: Some(PathBuf::from("a/b/chart.svg")),
            directory: Some(PathBuf::from("icons")),
            no_color: false,
        };

        assert_eq!(args.start_dir(), PathBuf::from("icons"));
    }

    #[test]
    fn start_dir_falls_back_to_file_parent() {
        let args = CheckArgs {
            path: Some(PathBuf::from("a/b/chart.svg")),
            directory: None,
            no_color: false,
        };

        assert_eq!(args.start_dir(), PathBuf::from("a/b"));
    }

    #[test]
    fn start_dir_defaults_to_current_dir_for_bare_filename() {
        let args = CheckArgs {
            path: Some(PathBuf::from("chart.svg")),
            directory: None,
            no_color: false,
        };

        assert_eq!(args.start_dir(), PathBuf::from("."));
    }
}
