//! Platform recommendations: maps detected skills and seniority to the
//! sourcing platforms worth searching first.
//!
//! Advisory only: suggestions never change the generated query text.

use crate::query::jd_parser::{ParsedJD, Seniority};
use crate::query::platforms::{DRIBBBLE, GITHUB, KAGGLE, LINKEDIN};

/// What has to be true of a parsed JD for a rule to fire.
enum Trigger {
    /// Any skill contains any of these keywords (case-insensitive).
    SkillKeywords(&'static [&'static str]),
    Seniority(Seniority),
}

struct PlatformRule {
    name: &'static str,
    trigger: Trigger,
    platforms: &'static [&'static str],
}

/// Evaluated in order; keys keep their first-appearance position.
const RULES: &[PlatformRule] = &[
    PlatformRule {
        name: "web_stack",
        trigger: Trigger::SkillKeywords(&[
            "javascript",
            "react",
            "node",
            "webpack",
            "typescript",
            "vue",
            "angular",
        ]),
        platforms: &[GITHUB, LINKEDIN],
    },
    PlatformRule {
        name: "design",
        trigger: Trigger::SkillKeywords(&[
            "ui",
            "ux",
            "figma",
            "adobe",
            "illustrator",
            "photoshop",
            "dribbble",
        ]),
        platforms: &[DRIBBBLE, LINKEDIN],
    },
    PlatformRule {
        name: "data_science",
        trigger: Trigger::SkillKeywords(&[
            "data science",
            "pandas",
            "numpy",
            "scikit",
            "kaggle",
            "notebook",
        ]),
        platforms: &[KAGGLE, GITHUB, LINKEDIN],
    },
    PlatformRule {
        name: "senior_hire",
        trigger: Trigger::Seniority(Seniority::Senior),
        platforms: &[LINKEDIN],
    },
];

impl Trigger {
    fn fires(&self, parsed: &ParsedJD) -> bool {
        match self {
            Trigger::SkillKeywords(keywords) => parsed.skills.iter().any(|skill| {
                let lower = skill.to_lowercase();
                keywords.iter().any(|kw| lower.contains(kw))
            }),
            Trigger::Seniority(level) => parsed.seniority == *level,
        }
    }
}

/// Suggests platform keys for a parsed JD, deduplicated in first-seen order.
pub fn suggest_platforms(parsed: &ParsedJD) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();
    for rule in RULES.iter().filter(|r| r.trigger.fires(parsed)) {
        tracing::trace!(rule = rule.name, "platform rule fired");
        for &key in rule.platforms {
            if !suggestions.contains(&key) {
                suggestions.push(key);
            }
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(skills: &[&str], seniority: Seniority) -> ParsedJD {
        ParsedJD {
            titles: vec![],
            skills: skills.iter().map(|s| s.to_string()).collect(),
            locations: vec![],
            seniority,
        }
    }

    #[test]
    fn test_no_signals_no_suggestions() {
        assert!(suggest_platforms(&ParsedJD::default()).is_empty());
        assert!(suggest_platforms(&parsed(&["COBOL"], Seniority::Mid)).is_empty());
    }

    #[test]
    fn test_web_stack_suggests_github_then_linkedin() {
        assert_eq!(
            suggest_platforms(&parsed(&["React"], Seniority::Unspecified)),
            vec!["github", "linkedin"]
        );
    }

    #[test]
    fn test_design_keywords() {
        assert_eq!(
            suggest_platforms(&parsed(&["Figma"], Seniority::Junior)),
            vec!["dribbble", "linkedin"]
        );
    }

    #[test]
    fn test_data_science_keywords_match_inside_skill_text() {
        assert_eq!(
            suggest_platforms(&parsed(&["Experience with Pandas"], Seniority::Unspecified)),
            vec!["kaggle", "github", "linkedin"]
        );
    }

    #[test]
    fn test_senior_alone_suggests_linkedin() {
        assert_eq!(
            suggest_platforms(&parsed(&[], Seniority::Senior)),
            vec!["linkedin"]
        );
    }

    #[test]
    fn test_combined_rules_deduplicate_in_first_seen_order() {
        let p = parsed(&["TypeScript", "Figma", "NumPy"], Seniority::Senior);
        assert_eq!(
            suggest_platforms(&p),
            vec!["github", "linkedin", "dribbble", "kaggle"]
        );
    }

    #[test]
    fn test_ui_keyword_is_a_substring_match() {
        // "Build" contains "ui"
        assert_eq!(
            suggest_platforms(&parsed(&["Build tooling"], Seniority::Unspecified)),
            vec!["dribbble", "linkedin"]
        );
    }
}
