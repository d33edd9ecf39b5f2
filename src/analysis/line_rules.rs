// src/analysis/line_rules.rs
//! Line rules: each is evaluated once per non-blank trimmed line, in table
//! order. Rules receive the whole snippet alongside the line so that
//! declaration lookups can span the full text.

use crate::types::Finding;
use regex::Regex;
use std::sync::LazyLock;

static BARE_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());
static IDENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").unwrap());
static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=").unwrap());
static TRIPLE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*///").unwrap());

/// Keywords that legitimately precede or follow an identifier. Excluded
/// from the adjacent-identifier heuristic so `fun main` and `val x` do not
/// trip it.
const KEYWORDS: &[&str] = &[
    "fun", "val", "var", "return", "if", "else", "when", "for", "while", "in", "is", "class",
    "object", "import", "package",
];

/// A rule evaluated per line. `line` is already trimmed and non-empty.
pub struct LineRule {
    pub name: &'static str,
    /// Suppresses the remaining rules for this line when it fires.
    pub terminal: bool,
    /// Fires at most once across the whole scan.
    pub once: bool,
    pub check: fn(line: &str, source: &str) -> Option<Finding>,
}

/// Fixed per-line evaluation order.
pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "triple-slash",
        terminal: false,
        once: false,
        check: triple_slash,
    },
    LineRule {
        name: "bare-identifier",
        terminal: true,
        once: false,
        check: bare_identifier,
    },
    LineRule {
        name: "adjacent-identifiers",
        terminal: false,
        once: false,
        check: adjacent_identifiers,
    },
    LineRule {
        name: "undeclared-assignment",
        terminal: false,
        once: false,
        check: undeclared_assignment,
    },
    LineRule {
        name: "fun-missing-parens",
        terminal: false,
        once: false,
        check: fun_missing_parens,
    },
    LineRule {
        name: "incomplete-material-theme",
        terminal: false,
        once: true,
        check: incomplete_material_theme,
    },
];

fn triple_slash(line: &str, _source: &str) -> Option<Finding> {
    TRIPLE_SLASH.is_match(line).then(|| {
        Finding::issue(
            "Suspicious '///' in code",
            "Triple slashes likely mean you accidentally commented out part of this line.",
            "Use '//' for comments; avoid '///' inside code.",
        )
    })
}

fn bare_identifier(line: &str, _source: &str) -> Option<Finding> {
    BARE_IDENT.is_match(line).then(|| {
        Finding::issue(
            "Unresolved identifier",
            format!("`{line}` looks like a variable or function but is not declared."),
            format!("Declare it with `val`, `var`, or call it like `{line}()`."),
        )
    })
}

fn adjacent_identifiers(line: &str, _source: &str) -> Option<Finding> {
    let tokens: Vec<_> = IDENT_TOKEN.find_iter(line).collect();
    let suspicious = tokens.windows(2).any(|pair| {
        let gap = &line[pair[0].end()..pair[1].start()];
        !gap.is_empty()
            && gap.chars().all(char::is_whitespace)
            && !KEYWORDS.contains(&pair[0].as_str())
            && !KEYWORDS.contains(&pair[1].as_str())
    });
    suspicious.then(|| {
        Finding::issue(
            "Possible missing '=' or comma",
            "Two identifiers appear next to each other (e.g., `content  content`).",
            "Check that you wrote `name = value` and separated parameters with commas.",
        )
    })
}

fn undeclared_assignment(line: &str, source: &str) -> Option<Finding> {
    let caps = ASSIGNMENT.captures(line)?;
    let name = caps.get(1).map_or("", |m| m.as_str());
    let declared = source.contains(&format!("val {name} ")) || source.contains(&format!("var {name} "));
    (!declared).then(|| {
        Finding::issue(
            "Assignment without declaration",
            format!("`{name}` is assigned a value but never declared."),
            format!("Add `val {name} = ...` or `var {name} = ...` before using it."),
        )
    })
}

fn fun_missing_parens(line: &str, _source: &str) -> Option<Finding> {
    (line.starts_with("fun ") && line.contains('{') && !line.contains('(')).then(|| {
        Finding::issue(
            "Function missing parentheses",
            "This function declaration is missing `()` after its name.",
            "Write: fun name() { ... }",
        )
    })
}

fn incomplete_material_theme(line: &str, source: &str) -> Option<Finding> {
    (line.contains("MaterialTheme(") && !source.contains("colorScheme")).then(|| {
        Finding::issue(
            "Incomplete MaterialTheme call",
            "MaterialTheme is missing `colorScheme = ...`.",
            "Add `colorScheme = lightColorScheme()` or your custom scheme.",
        )
    })
}
