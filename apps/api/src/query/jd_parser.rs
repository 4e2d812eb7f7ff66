//! JD Parser: rule-based extraction of titles, skills, locations and seniority
//! from a pasted job description.
//!
//! Each field is driven by an ordered rule table. The first rule that fires wins,
//! so precedence is read straight off the table.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::clause::split_terms;

/// Skills beyond this many are dropped (first-seen order).
pub const MAX_SKILLS: usize = 40;

/// A first line at or above this many characters is treated as prose, not a title.
const TITLE_LINE_MAX_CHARS: usize = 80;

const BULLET: char = '•';

static TITLE_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)title[:\-]\s*(.+)").expect("valid title regex"));

static LOCATION_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)location[:\-]\s*([^\n\r]+)").expect("valid location regex")
});

static SKILL_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)skills?:|requirements?|technolog|stack:").expect("valid heading regex")
});

// Plain substring match, no word boundaries: "go" also fires on "good".
static TECH_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)javascript|python|java|react|node|sql|aws|docker|kubernetes|django|flask|scala|ruby|php|go|c\+\+|c#",
    )
    .expect("valid tech token regex")
});

const CITY_GAZETTEER: &[&str] = &[
    "hyderabad",
    "bengaluru",
    "bangalore",
    "mumbai",
    "chennai",
    "delhi",
    "new york",
    "london",
    "berlin",
    "san francisco",
    "seattle",
    "boston",
    "toronto",
];

/// Coarse experience level inferred from JD text. `Unspecified` serializes as `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Intern,
    Junior,
    Mid,
    Senior,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Unspecified => "",
            Seniority::Intern => "intern",
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
        }
    }
}

/// Scan order is priority order.
const SENIORITY_LABELS: &[(Seniority, &[&str])] = &[
    (Seniority::Intern, &["intern", "internship"]),
    (
        Seniority::Junior,
        &["junior", "jr", "entry-level", "entry level"],
    ),
    (Seniority::Mid, &["mid", "associate", "2+ years", "3+ years"]),
    (
        Seniority::Senior,
        &["senior", "lead", "principal", "5+ years", "7+ years"],
    ),
];

/// Structured fields pulled from one job description.
///
/// `ParsedJD::default()` is the cleared state; every analysis builds a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedJD {
    pub titles: Vec<String>,
    /// Deduplicated, first-seen order, at most `MAX_SKILLS`.
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub seniority: Seniority,
}

impl ParsedJD {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
            && self.skills.is_empty()
            && self.locations.is_empty()
            && self.seniority == Seniority::Unspecified
    }
}

/// Pluggable extraction backend. Carried in `AppState` as `Arc<dyn JdExtractor>`.
pub trait JdExtractor: Send + Sync {
    fn extract(&self, jd_text: &str) -> ParsedJD;

    /// Short label reported alongside results, e.g. "heuristic".
    fn backend(&self) -> &'static str;
}

/// The rule-based extractor. Deterministic, no external calls.
pub struct HeuristicExtractor;

impl JdExtractor for HeuristicExtractor {
    fn extract(&self, jd_text: &str) -> ParsedJD {
        extract_fields(jd_text)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

/// JD text prepared once for all rules.
struct JdDocument<'a> {
    text: &'a str,
    lower: String,
    lines: Vec<&'a str>,
}

impl<'a> JdDocument<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            lines: text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}

/// A document-level rule: `Some` ends the scan for that field, even when the list is empty.
struct FieldRule {
    name: &'static str,
    apply: fn(&JdDocument) -> Option<Vec<String>>,
}

const TITLE_RULES: &[FieldRule] = &[
    FieldRule {
        name: "explicit_title_field",
        apply: explicit_title_field,
    },
    FieldRule {
        name: "short_first_line",
        apply: short_first_line,
    },
];

const LOCATION_RULES: &[FieldRule] = &[
    FieldRule {
        name: "explicit_location_field",
        apply: explicit_location_field,
    },
    FieldRule {
        name: "city_gazetteer",
        apply: city_gazetteer,
    },
];

/// A per-line rule: when `matches` fires, `body` selects the text that gets comma-split.
struct SkillLineRule {
    name: &'static str,
    matches: fn(&str) -> bool,
    body: fn(&str) -> &str,
}

const SKILL_LINE_RULES: &[SkillLineRule] = &[
    SkillLineRule {
        name: "skills_heading",
        matches: is_skills_heading,
        body: after_first_colon,
    },
    // Over-captures: every comma piece on the line is kept, not just the token.
    SkillLineRule {
        name: "tech_token_line",
        matches: has_tech_token,
        body: whole_line,
    },
];

fn explicit_title_field(doc: &JdDocument) -> Option<Vec<String>> {
    TITLE_FIELD_RE
        .captures(doc.text)
        .map(|caps| split_terms(&caps[1]))
}

fn short_first_line(doc: &JdDocument) -> Option<Vec<String>> {
    doc.lines
        .first()
        .filter(|line| line.chars().count() < TITLE_LINE_MAX_CHARS)
        .map(|line| vec![line.to_string()])
}

fn explicit_location_field(doc: &JdDocument) -> Option<Vec<String>> {
    LOCATION_FIELD_RE
        .captures(doc.text)
        .map(|caps| split_terms(&caps[1]))
}

fn city_gazetteer(doc: &JdDocument) -> Option<Vec<String>> {
    Some(
        CITY_GAZETTEER
            .iter()
            .filter(|city| doc.lower.contains(*city))
            .map(|city| city.to_string())
            .collect(),
    )
}

fn is_skills_heading(line: &str) -> bool {
    SKILL_HEADING_RE.is_match(line)
}

fn has_tech_token(line: &str) -> bool {
    TECH_TOKEN_RE.is_match(line)
}

fn whole_line(line: &str) -> &str {
    line
}

fn after_first_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, rest)| rest).unwrap_or(line)
}

fn run_field_rules(rules: &[FieldRule], doc: &JdDocument) -> Vec<String> {
    for rule in rules {
        if let Some(values) = (rule.apply)(doc) {
            debug!(rule = rule.name, count = values.len(), "field rule matched");
            return values;
        }
    }
    Vec::new()
}

fn skill_candidates(doc: &JdDocument) -> Vec<String> {
    let mut candidates = Vec::new();
    for line in doc.lines.iter().copied() {
        let Some(rule) = SKILL_LINE_RULES.iter().find(|r| (r.matches)(line)) else {
            continue;
        };
        let body = (rule.body)(line).replace(BULLET, ",");
        let pieces = split_terms(&body);
        debug!(rule = rule.name, pieces = pieces.len(), "skill line matched");
        candidates.extend(pieces);
    }
    candidates
}

/// Strips `()[].`, trims, drops empties, dedupes case-sensitively and caps at `MAX_SKILLS`.
fn clean_skills(candidates: Vec<String>) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for raw in candidates {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(*c, '(' | ')' | '[' | ']' | '.'))
            .collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() || skills.iter().any(|s| s == cleaned) {
            continue;
        }
        skills.push(cleaned.to_string());
        if skills.len() == MAX_SKILLS {
            break;
        }
    }
    skills
}

fn detect_seniority(lower: &str) -> Seniority {
    SENIORITY_LABELS
        .iter()
        .find(|(_, labels)| labels.iter().any(|label| lower.contains(label)))
        .map(|(tag, _)| *tag)
        .unwrap_or_default()
}

/// Extracts structured fields from a raw job description.
///
/// Never fails: empty or odd input yields an empty (or partially empty) result.
pub fn extract_fields(jd_text: &str) -> ParsedJD {
    if jd_text.trim().is_empty() {
        return ParsedJD::default();
    }

    let doc = JdDocument::new(jd_text);

    let parsed = ParsedJD {
        titles: run_field_rules(TITLE_RULES, &doc),
        skills: clean_skills(skill_candidates(&doc)),
        locations: run_field_rules(LOCATION_RULES, &doc),
        seniority: detect_seniority(&doc.lower),
    };

    debug!(
        lines = doc.lines.len(),
        titles = parsed.titles.len(),
        skills = parsed.skills.len(),
        locations = parsed.locations.len(),
        seniority = parsed.seniority.as_str(),
        "JD extraction complete"
    );

    parsed
}
