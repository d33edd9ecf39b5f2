// src/reporting.rs
//! Console output for findings, history, and points.
//!
//! Every printer has a JSON mode that emits the same data via `serde_json`.
//! An empty finding sequence means there was nothing to analyze; it is
//! rendered as a note and never conflated with a clean result.

use crate::error::Result;
use crate::history::SessionRecord;
use crate::rewards::Level;
use crate::types::Finding;
use colored::Colorize;

/// Prints a finding sequence.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_findings(findings: &[Finding], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(findings)?);
        return Ok(());
    }
    if findings.is_empty() {
        eprintln!(
            "{} nothing to analyze (empty snippet)",
            "note:".yellow().bold()
        );
        return Ok(());
    }
    for finding in findings {
        if finding.is_issue {
            println!("{} {}", "x".red().bold(), finding.title.red().bold());
        } else {
            println!("{} {}", "+".green().bold(), finding.title.green().bold());
        }
        println!("  {}", finding.explanation);
        if !finding.fix.is_empty() {
            println!("  {} {}", "fix:".cyan().bold(), finding.fix);
        }
    }
    let issues = findings.iter().filter(|f| f.is_issue).count();
    if issues > 0 {
        println!("\n{} issue(s) found", issues.to_string().red().bold());
    }
    Ok(())
}

/// Prints stored sessions, assumed already newest first.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_history(records: &[SessionRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("No stored sessions yet.");
        return Ok(());
    }
    for record in records {
        println!("{} {}", format!("#{}", record.id).bold(), record.headline);
        println!(
            "  {} | {} chars | {} issue(s)",
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
            record.code_length,
            record.issue_count
        );
    }
    Ok(())
}

/// Prints the points total and the level it maps to.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_points(points: u64, json: bool) -> Result<()> {
    let level = Level::for_points(points);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "points": points,
                "level": level,
            }))?
        );
        return Ok(());
    }
    println!(
        "{} point(s), level: {}",
        points.to_string().bold(),
        level.to_string().green().bold()
    );
    Ok(())
}
