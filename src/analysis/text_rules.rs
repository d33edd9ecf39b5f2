// src/analysis/text_rules.rs
//! Whole-text rules: each is evaluated once against the entire snippet,
//! independent of line boundaries, in table order.

use crate::types::Finding;

/// A rule evaluated once against the whole snippet. Contributes at most one
/// finding per analysis run.
pub struct TextRule {
    pub name: &'static str,
    pub check: fn(&str) -> Option<Finding>,
}

/// Fixed evaluation order.
pub static TEXT_RULES: &[TextRule] = &[
    TextRule {
        name: "typo-pritn",
        check: typo_pritn,
    },
    TextRule {
        name: "missing-main",
        check: missing_main,
    },
    TextRule {
        name: "paren-balance",
        check: paren_balance,
    },
    TextRule {
        name: "brace-balance",
        check: brace_balance,
    },
    TextRule {
        name: "print-without-parens",
        check: print_without_parens,
    },
    TextRule {
        name: "println-without-parens",
        check: println_without_parens,
    },
];

fn typo_pritn(text: &str) -> Option<Finding> {
    text.contains("pritn").then(|| {
        Finding::issue(
            "Possible Typo: 'pritn'",
            "It looks like you meant 'print'. Typographical errors cause unresolved reference errors.",
            "Replace 'pritn' with 'print'.",
        )
    })
}

fn missing_main(text: &str) -> Option<Finding> {
    (!text.contains("fun main")).then(|| {
        Finding::issue(
            "Missing main() Function",
            "A Kotlin console program usually starts with `fun main()`.",
            "Add `fun main() { ... }` to make the program executable.",
        )
    })
}

fn paren_balance(text: &str) -> Option<Finding> {
    balance(text, '(', ')', "Unmatched Parentheses")
}

fn brace_balance(text: &str) -> Option<Finding> {
    balance(text, '{', '}', "Unmatched Braces")
}

fn balance(text: &str, open: char, close: char, title: &str) -> Option<Finding> {
    let opens = text.chars().filter(|&c| c == open).count();
    let closes = text.chars().filter(|&c| c == close).count();
    (opens != closes).then(|| {
        Finding::issue(
            title,
            format!("There are {opens} '{open}' but {closes} '{close}'."),
            format!("Make sure every '{open}' has a matching '{close}'."),
        )
    })
}

fn print_without_parens(text: &str) -> Option<Finding> {
    call_without_parens(text, "print")
}

fn println_without_parens(text: &str) -> Option<Finding> {
    call_without_parens(text, "println")
}

/// Fires when `keyword ` appears but `keyword(` never does. The trailing
/// space keeps `print ` from matching inside `println `.
fn call_without_parens(text: &str, keyword: &str) -> Option<Finding> {
    let spaced = format!("{keyword} ");
    let called = format!("{keyword}(");
    (text.contains(&spaced) && !text.contains(&called)).then(|| {
        Finding::issue(
            format!("Suspicious {keyword} usage"),
            format!("`{keyword}` was used without parentheses."),
            format!("Use {keyword}(\"text\") or {keyword}(variable)."),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typo_matches_substring() {
        assert!(typo_pritn("pritn(\"hi\")").is_some());
        assert!(typo_pritn("print(\"hi\")").is_none());
    }

    #[test]
    fn missing_main_requires_literal_marker() {
        assert!(missing_main("val x = 1").is_some());
        assert!(missing_main("fun main() {}").is_none());
    }

    #[test]
    fn balance_reports_both_counts() {
        let finding = paren_balance("((())").unwrap();
        assert_eq!(finding.explanation, "There are 3 '(' but 2 ')'.");
        assert!(paren_balance("(()())").is_none());
    }

    #[test]
    fn print_space_does_not_match_inside_println() {
        // `println 5` contains `println ` but not `print `.
        assert!(print_without_parens("println 5").is_none());
        assert!(println_without_parens("println 5").is_some());
        assert!(println_without_parens("println(\"hi\")").is_none());
    }
}
