//! CLI module for Repoatlas

mod args;

pub use args::{Args, Command};

use crate::analysis::{AnalysisResult, Analyzer};
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Analyze {
            path,
            config,
            ignore,
            scan_window,
            format,
            output,
            verbose,
        } => {
            // Load config file if it exists
            let mut cfg = if let Some(config_path) = &config {
                Config::load_or_default(config_path)
            } else {
                Config::load_or_default(Path::new("repoatlas.toml"))
            };

            // Merge CLI arguments (CLI takes precedence)
            cfg.merge_cli(ignore, scan_window);

            if verbose {
                println!("Analyzing: {}", path.display());
                println!("Scan window: {}", cfg.extract.method_scan_window);
                if !cfg.scan.ignore.is_empty() {
                    println!("Extra ignores: {:?}", cfg.scan.ignore);
                }
            }

            if !path.exists() {
                return Err(crate::error::Error::PathNotFound(path));
            }

            let analyzer = Analyzer::new(cfg)?.with_verbose(verbose);

            println!("Analyzing codebase...");
            let analysis = analyzer.analyze(&path)?;
            let stats = analysis.stats();

            let langs: Vec<String> = stats
                .by_language
                .iter()
                .map(|(lang, count)| format!("{} {}", count, lang))
                .collect();
            if langs.is_empty() {
                println!("Found no supported files");
            } else {
                println!("Found {} files ({})", stats.files, langs.join(", "));
            }
            println!(
                "Analysis complete: {} dependency edges, {} classes",
                stats.dependency_edges, stats.classes
            );

            match format.as_str() {
                "text" => write_output(output, &render_text(&analysis)),
                "json" => {
                    let report = JsonReport::from_analysis(&analysis);
                    let json = serde_json::to_string_pretty(&report)?;
                    write_output(output, &json)
                }
                _ => Err(crate::error::Error::other(format!(
                    "Unknown format: {}",
                    format
                ))),
            }
        }
    }
}

/// JSON payload handed to downstream renderers
#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [crate::scanner::FileRecord],
    dependencies: &'a crate::analysis::DependencyGraph,
    reverse_dependencies: crate::analysis::ReverseDependencyGraph,
    classes: &'a crate::analysis::ClassHierarchy,
}

impl<'a> JsonReport<'a> {
    fn from_analysis(analysis: &'a AnalysisResult) -> Self {
        Self {
            files: &analysis.files,
            dependencies: &analysis.graph,
            reverse_dependencies: analysis.graph.reverse(),
            classes: &analysis.hierarchy,
        }
    }
}

fn write_output(output: Option<PathBuf>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, contents)?;
            println!("Report written to: {}", path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}

fn render_text(analysis: &AnalysisResult) -> String {
    let mut out = String::new();

    for (file, dependencies) in analysis.graph.iter() {
        if dependencies.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", file));
        for dep in dependencies {
            out.push_str(&format!("  -> {}\n", dep));
        }
    }

    if !analysis.hierarchy.is_empty() {
        out.push_str("\nClasses:\n");
        for info in analysis.hierarchy.all_classes() {
            if info.parents.is_empty() {
                out.push_str(&format!("  {} ({}:{})\n", info.name, info.file, info.line));
            } else {
                out.push_str(&format!(
                    "  {} : {} ({}:{})\n",
                    info.name,
                    info.parents.join(", "),
                    info.file,
                    info.line
                ));
            }
        }
    }

    out
}
