// src/types.rs
use serde::Serialize;

/// Headline stored for a run that produced no findings at all.
pub const NO_ANALYSIS_HEADLINE: &str = "No analysis";

/// One reported result of an analysis run: an issue, or the informational
/// entry emitted when the snippet is clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub title: String,
    pub explanation: String,
    /// Suggested remediation; empty when no fix is offered.
    pub fix: String,
    pub is_issue: bool,
}

impl Finding {
    /// Creates a finding for an actual problem.
    #[must_use]
    pub fn issue(
        title: impl Into<String>,
        explanation: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
            fix: fix.into(),
            is_issue: true,
        }
    }

    /// Creates an informational finding (e.g., the clean-snippet message).
    #[must_use]
    pub fn info(
        title: impl Into<String>,
        explanation: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
            fix: fix.into(),
            is_issue: false,
        }
    }
}

/// Summary fields handed to the history store after an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub code_length: usize,
    pub issue_count: usize,
    /// Title of the first finding, or [`NO_ANALYSIS_HEADLINE`] when the
    /// sequence is empty.
    pub headline: String,
}

impl AnalysisSummary {
    #[must_use]
    pub fn of(source: &str, findings: &[Finding]) -> Self {
        Self {
            code_length: source.chars().count(),
            issue_count: findings.iter().filter(|f| f.is_issue).count(),
            headline: findings
                .first()
                .map_or_else(|| NO_ANALYSIS_HEADLINE.to_string(), |f| f.title.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_chars_not_bytes() {
        let summary = AnalysisSummary::of("héllo", &[]);
        assert_eq!(summary.code_length, 5);
    }

    #[test]
    fn summary_headline_falls_back_to_placeholder() {
        let summary = AnalysisSummary::of("", &[]);
        assert_eq!(summary.headline, NO_ANALYSIS_HEADLINE);
        assert_eq!(summary.issue_count, 0);
    }

    #[test]
    fn summary_uses_first_finding_title() {
        let findings = vec![
            Finding::issue("First", "a", "b"),
            Finding::issue("Second", "c", ""),
        ];
        let summary = AnalysisSummary::of("x = 5", &findings);
        assert_eq!(summary.headline, "First");
        assert_eq!(summary.issue_count, 2);
    }
}
