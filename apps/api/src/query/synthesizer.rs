//! Query synthesizer: combines field clauses with a platform scope into one
//! Boolean / X-ray string.
//!
//! Every function here is a pure function of its inputs, so callers may
//! recompute on each keystroke.

use serde::{Deserialize, Serialize};

use crate::query::clause::{build_or_clause, split_terms, SkillsInput};
use crate::query::jd_parser::ParsedJD;
use crate::query::platforms::{self, RESUME_SITE_CLAUSE};

/// Raw form input, each field comma-separated as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFields {
    pub title: String,
    /// Comma-separated terms, or a Boolean expression passed through as-is.
    pub skills: String,
    pub locations: String,
    pub exclude_terms: String,
    /// Pre-written query that replaces clause construction entirely.
    pub advanced: Option<String>,
}

/// Which query to derive from a parsed JD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JdQueryVariant {
    /// Field clauses only, no site scope.
    Boolean,
    LinkedinXray,
    WebResume,
}

/// The three JD-derived queries shown after an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdQueries {
    pub boolean: String,
    pub linkedin_xray: String,
    pub web_resume: String,
}

impl JdQueries {
    pub fn from_parsed(parsed: &ParsedJD) -> Self {
        Self {
            boolean: synthesize_jd_query(parsed, JdQueryVariant::Boolean),
            linkedin_xray: synthesize_jd_query(parsed, JdQueryVariant::LinkedinXray),
            web_resume: synthesize_jd_query(parsed, JdQueryVariant::WebResume),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly helpers
// ────────────────────────────────────────────────────────────────────────────

/// AND-joins the non-empty clauses.
fn and_join(clauses: &[String]) -> String {
    clauses
        .iter()
        .filter(|c| !c.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn exclude_suffix(exclude_terms: &str) -> String {
    split_terms(exclude_terms)
        .iter()
        .map(|t| format!(" -{t}"))
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn scoped(core: &str, scope: &str, suffix: &str) -> String {
    collapse_whitespace(&format!("{core} {scope}{suffix}"))
}

fn fields_core(fields: &QueryFields) -> String {
    and_join(&[
        build_or_clause(&split_terms(&fields.title)),
        SkillsInput::from_raw(&fields.skills).clause(),
        build_or_clause(&split_terms(&fields.locations)),
    ])
}

/// Non-blank advanced text wins over everything else.
fn advanced_override(fields: &QueryFields) -> Option<&str> {
    fields
        .advanced
        .as_deref()
        .filter(|adv| !adv.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Public synthesis operations
// ────────────────────────────────────────────────────────────────────────────

/// Profile (X-ray) search scoped to one platform. Unknown keys fall back to LinkedIn.
pub fn synthesize_profile_query(fields: &QueryFields, platform_key: &str) -> String {
    if let Some(adv) = advanced_override(fields) {
        return adv.to_string();
    }
    let platform = platforms::lookup_or_default(platform_key);
    scoped(
        &fields_core(fields),
        platform.site_clause,
        &exclude_suffix(&fields.exclude_terms),
    )
}

/// Open-web resume search using the fixed resume-detection template.
pub fn synthesize_web_query(fields: &QueryFields) -> String {
    if let Some(adv) = advanced_override(fields) {
        return adv.to_string();
    }
    scoped(
        &fields_core(fields),
        RESUME_SITE_CLAUSE,
        &exclude_suffix(&fields.exclude_terms),
    )
}

/// Query built from extracted JD fields. Skills are always OR-joined here.
pub fn synthesize_jd_query(parsed: &ParsedJD, variant: JdQueryVariant) -> String {
    let core = and_join(&[
        build_or_clause(&parsed.titles),
        build_or_clause(&parsed.skills),
        build_or_clause(&parsed.locations),
    ]);
    match variant {
        JdQueryVariant::Boolean => core.trim().to_string(),
        JdQueryVariant::LinkedinXray => {
            scoped(&core, platforms::lookup_or_default(platforms::LINKEDIN).site_clause, "")
        }
        JdQueryVariant::WebResume => scoped(&core, RESUME_SITE_CLAUSE, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::jd_parser::{extract_fields, Seniority};

    const LINKEDIN_SITE: &str =
        r#"(site:linkedin.com/in OR site:linkedin.com/pub) -intitle:"profiles" -inurl:"dir/""#;

    fn fields(title: &str, skills: &str, locations: &str, exclude: &str) -> QueryFields {
        QueryFields {
            title: title.to_string(),
            skills: skills.to_string(),
            locations: locations.to_string(),
            exclude_terms: exclude.to_string(),
            advanced: None,
        }
    }

    #[test]
    fn test_profile_query_linkedin() {
        let q = synthesize_profile_query(&fields("Data Engineer", "python, sql", "Remote", ""), "linkedin");
        assert_eq!(
            q,
            format!(r#""Data Engineer" AND (python OR sql) AND Remote {LINKEDIN_SITE}"#)
        );
        assert!(!q.contains("  "));
        assert_eq!(q, q.trim());
    }

    #[test]
    fn test_profile_query_omits_empty_clauses() {
        let q = synthesize_profile_query(&fields("", "rust", "", ""), "github");
        assert_eq!(
            q,
            r#"rust site:github.com ("repositories" OR "profile" OR "users") -"jobs" -"hiring""#
        );
    }

    #[test]
    fn test_profile_query_all_empty_is_just_the_site_clause() {
        let q = synthesize_profile_query(&QueryFields::default(), "angellist");
        assert_eq!(q, "site:angel.co/u OR site:wellfound.com/u");
    }

    #[test]
    fn test_profile_query_exclude_suffix_in_order() {
        let q = synthesize_profile_query(&fields("SRE", "", "", "intern, junior"), "kaggle");
        assert!(q.ends_with(" -intern -junior"), "got: {q}");
        assert!(q.starts_with("SRE site:kaggle.com"));
    }

    #[test]
    fn test_profile_query_preformed_skills_pass_through() {
        let q = synthesize_profile_query(
            &fields("Backend Engineer", r#"("python" OR "go") AND NOT php"#, "", ""),
            "stackoverflow",
        );
        assert!(q.starts_with(r#""Backend Engineer" AND ("python" OR "go") AND NOT php site:stackoverflow.com/users"#));
    }

    #[test]
    fn test_profile_query_single_skill_unparenthesized() {
        let q = synthesize_profile_query(&fields("", "kubernetes", "Berlin, Munich", ""), "linkedin");
        assert!(q.starts_with("kubernetes AND (Berlin OR Munich) (site:linkedin.com/in"));
    }

    #[test]
    fn test_profile_query_collapses_whitespace() {
        let q = synthesize_profile_query(&fields("  QA   Lead ", "", "", ""), "dribbble");
        assert!(q.starts_with(r#""QA Lead" site:dribbble.com"#), "got: {q}");
        assert!(!q.contains("  "));
    }

    #[test]
    fn test_unknown_platform_falls_back_to_linkedin() {
        let f = fields("PM", "", "", "");
        assert_eq!(
            synthesize_profile_query(&f, "myspace"),
            synthesize_profile_query(&f, "linkedin")
        );
    }

    #[test]
    fn test_web_query_uses_resume_template() {
        let q = synthesize_web_query(&fields("Data Engineer", "python, sql", "Remote", "recruiter"));
        assert_eq!(
            q,
            format!(r#""Data Engineer" AND (python OR sql) AND Remote {RESUME_SITE_CLAUSE} -recruiter"#)
        );
    }

    #[test]
    fn test_web_query_empty_fields_is_template() {
        assert_eq!(synthesize_web_query(&QueryFields::default()), RESUME_SITE_CLAUSE);
    }

    #[test]
    fn test_advanced_override_returned_unmodified() {
        let mut f = fields("Data Engineer", "python", "", "");
        f.advanced = Some(r#"site:linkedin.com/in  "Python" AND "Django" "#.to_string());
        assert_eq!(
            synthesize_profile_query(&f, "github"),
            r#"site:linkedin.com/in  "Python" AND "Django" "#
        );
        assert_eq!(
            synthesize_web_query(&f),
            r#"site:linkedin.com/in  "Python" AND "Django" "#
        );
    }

    #[test]
    fn test_blank_advanced_is_ignored() {
        let mut f = fields("PM", "", "", "");
        f.advanced = Some("   ".to_string());
        assert!(synthesize_profile_query(&f, "linkedin").starts_with("PM (site:linkedin.com/in"));
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let f = fields("Data Engineer, ML Engineer", "python, spark", "Remote", "intern");
        assert_eq!(synthesize_profile_query(&f, "github"), synthesize_profile_query(&f, "github"));
        assert_eq!(synthesize_web_query(&f), synthesize_web_query(&f));
    }

    #[test]
    fn test_jd_boolean_variant_is_bare() {
        let parsed = ParsedJD {
            titles: vec!["Backend Engineer".to_string()],
            skills: vec!["Python".to_string(), "AND".to_string()],
            locations: vec![],
            seniority: Seniority::Senior,
        };
        // JD skills are never treated as preformed Boolean
        assert_eq!(
            synthesize_jd_query(&parsed, JdQueryVariant::Boolean),
            r#""Backend Engineer" AND (Python OR AND)"#
        );
    }

    #[test]
    fn test_jd_variants_from_extracted_fields() {
        let parsed = extract_fields(
            "Title: Backend Engineer\nSkills: Python, Django, AWS\nLocation: Hyderabad, Remote\n5+ years required",
        );
        let queries = JdQueries::from_parsed(&parsed);
        let core = r#""Backend Engineer" AND (Python OR Django OR AWS) AND (Hyderabad OR Remote)"#;
        assert_eq!(queries.boolean, core);
        assert_eq!(queries.linkedin_xray, format!("{core} {LINKEDIN_SITE}"));
        assert_eq!(queries.web_resume, format!("{core} {RESUME_SITE_CLAUSE}"));
    }

    #[test]
    fn test_jd_queries_for_empty_parse() {
        let queries = JdQueries::from_parsed(&ParsedJD::default());
        assert_eq!(queries.boolean, "");
        assert_eq!(queries.linkedin_xray, LINKEDIN_SITE);
        assert_eq!(queries.web_resume, RESUME_SITE_CLAUSE);
    }

    #[test]
    fn test_query_fields_deserialize_with_defaults() {
        let f: QueryFields = serde_json::from_str(r#"{"title": "SRE"}"#).unwrap();
        assert_eq!(f.title, "SRE");
        assert!(f.skills.is_empty());
        assert!(f.advanced.is_none());
    }
}
