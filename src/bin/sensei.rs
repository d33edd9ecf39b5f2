// src/bin/sensei.rs
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use sensei_core::analysis;
use sensei_core::cli::{Cli, Commands};
use sensei_core::history::HistoryStore;
use sensei_core::reporting;
use sensei_core::rewards::PointsStore;
use sensei_core::store;
use sensei_core::types::AnalysisSummary;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = store::data_dir(cli.data_dir.as_deref())?;
    match cli.command {
        Commands::Analyze {
            snippet,
            file,
            json,
            no_save,
        } => run_analyze(&data_dir, snippet.as_deref(), file.as_deref(), json, no_save),
        Commands::History { limit, json } => run_history(&data_dir, limit, json),
        Commands::Points { reset, json } => run_points(&data_dir, reset, json),
    }
}

fn run_analyze(
    data_dir: &Path,
    snippet: Option<&str>,
    file: Option<&Path>,
    json: bool,
    no_save: bool,
) -> Result<()> {
    let source = read_source(snippet, file)?;
    let findings = analysis::analyze(&source);
    reporting::print_findings(&findings, json)?;

    // History and points are best-effort; a failed store never changes the
    // printed result or the exit code.
    if !no_save {
        let summary = AnalysisSummary::of(&source, &findings);
        if let Err(e) = HistoryStore::in_dir(data_dir).record(&summary) {
            eprintln!("{} could not save history: {e}", "warning:".yellow().bold());
        }
        if let Err(e) = PointsStore::in_dir(data_dir).add_point() {
            eprintln!(
                "{} could not update points: {e}",
                "warning:".yellow().bold()
            );
        }
    }

    if findings.iter().any(|f| f.is_issue) {
        process::exit(1);
    }
    Ok(())
}

/// The snippet argument wins over --file, which wins over stdin. An
/// unreadable file fails closed to an empty snippet.
fn read_source(snippet: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = snippet {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return Ok(match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!(
                    "{} could not read {}: {e}",
                    "warning:".yellow().bold(),
                    path.display()
                );
                String::new()
            }
        });
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run_history(data_dir: &Path, limit: Option<usize>, json: bool) -> Result<()> {
    let mut records = HistoryStore::in_dir(data_dir).sessions()?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    reporting::print_history(&records, json)?;
    Ok(())
}

fn run_points(data_dir: &Path, reset: bool, json: bool) -> Result<()> {
    let points_store = PointsStore::in_dir(data_dir);
    if reset {
        points_store.reset()?;
    }
    reporting::print_points(points_store.points()?, json)?;
    Ok(())
}
