//! Clause builder: turns comma-separated user input into quoted OR-groups.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BOOLEAN_SYNTAX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)[()"']|\b(?:AND|OR|NOT)\b"#).expect("valid boolean syntax regex")
});

/// Splits on commas, trims each piece and drops empties. Order is kept, duplicates are not removed.
pub fn split_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Wraps a term in double quotes when it contains whitespace.
///
/// Embedded quotes are not escaped.
pub fn quote_if_multiword(term: &str) -> String {
    if term.chars().any(char::is_whitespace) {
        format!("\"{term}\"")
    } else {
        term.to_string()
    }
}

/// Builds `(t1 OR t2 ... OR tn)`, a bare single term, or `""` for no terms.
pub fn build_or_clause<S: AsRef<str>>(terms: &[S]) -> String {
    match terms {
        [] => String::new(),
        [single] => quote_if_multiword(single.as_ref()),
        many => {
            let quoted: Vec<String> = many
                .iter()
                .map(|t| quote_if_multiword(t.as_ref()))
                .collect();
            format!("({})", quoted.join(" OR "))
        }
    }
}

/// True when the input already carries Boolean syntax: parentheses, a quote,
/// or a whole-word AND / OR / NOT in any case.
pub fn looks_like_boolean_expression(input: &str) -> bool {
    BOOLEAN_SYNTAX_RE.is_match(input)
}

/// How a raw skills field is treated when building a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SkillsInput {
    /// Plain comma-separated terms, OR-joined into a clause.
    RawTerms(Vec<String>),
    /// Already-valid Boolean syntax pasted by the user; used verbatim.
    PreformedExpression(String),
}

impl SkillsInput {
    /// Classifies a raw skills field once.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if looks_like_boolean_expression(trimmed) {
            SkillsInput::PreformedExpression(trimmed.to_string())
        } else {
            SkillsInput::RawTerms(split_terms(trimmed))
        }
    }

    pub fn clause(&self) -> String {
        match self {
            SkillsInput::RawTerms(terms) => build_or_clause(terms),
            SkillsInput::PreformedExpression(expr) => expr.clone(),
        }
    }
}

impl Default for SkillsInput {
    fn default() -> Self {
        SkillsInput::RawTerms(Vec::new())
    }
}
