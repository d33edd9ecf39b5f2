// src/analysis/mod.rs
//! Core analysis logic (the rule engine).
//!
//! `analyze` evaluates a fixed table of whole-text rules, then makes one
//! pass over the snippet's lines evaluating the line rule table, and falls
//! back to a single informational finding when nothing fired. The rule
//! tables are process-wide constants; the function is pure with respect to
//! its input and safe to call from concurrent threads.

pub mod line_rules;
pub mod text_rules;

use crate::types::Finding;
use line_rules::LINE_RULES;
use text_rules::TEXT_RULES;

/// Analyzes a source snippet and returns findings in a deterministic order:
/// whole-text rules first (table order), then line rules top to bottom.
///
/// Blank input (empty or all-whitespace) returns an empty vector. This is a
/// distinct signal from the non-empty "clean" result, which is exactly one
/// informational finding.
#[must_use]
pub fn analyze(source: &str) -> Vec<Finding> {
    if source.trim().is_empty() {
        return Vec::new();
    }

    let mut findings: Vec<Finding> = TEXT_RULES
        .iter()
        .filter_map(|rule| (rule.check)(source))
        .collect();

    // `once` rules stay suppressed after their first hit, scoped to this
    // call only. A terminal rule ends evaluation for its line.
    let mut fired = vec![false; LINE_RULES.len()];
    for raw in split_lines(source) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        for (idx, rule) in LINE_RULES.iter().enumerate() {
            if rule.once && fired[idx] {
                continue;
            }
            let Some(finding) = (rule.check)(line, source) else {
                continue;
            };
            fired[idx] = true;
            findings.push(finding);
            if rule.terminal {
                break;
            }
        }
    }

    if findings.is_empty() {
        findings.push(Finding::info(
            "No Issues Found",
            "No common beginner mistakes detected.",
            "Nice work!",
        ));
    }
    findings
}

/// Splits on `\r\n`, `\n`, or bare `\r`. `str::lines` ignores a lone `\r`,
/// which would fold classic-Mac-terminated input into one line.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_short_circuits() {
        assert!(analyze("").is_empty());
        assert!(analyze("   \n\t\r\n  ").is_empty());
    }

    #[test]
    fn clean_snippet_yields_single_info() {
        let findings = analyze("fun main() { println(\"Hello\") }");
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].is_issue);
        assert_eq!(findings[0].title, "No Issues Found");
    }

    #[test]
    fn split_lines_handles_every_newline_encoding() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn whole_text_findings_precede_line_findings() {
        // Missing main is a whole-text rule; the bare identifier is a line
        // rule. Table order puts the former first.
        let findings = analyze("foo");
        assert_eq!(findings[0].title, "Missing main() Function");
        assert_eq!(findings[1].title, "Unresolved identifier");
    }
}
