//! Static platform registry and the resume-detection template.

use serde::Serialize;

/// One sourcing platform and the clause that scopes a search engine to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformConfig {
    pub key: &'static str,
    pub label: &'static str,
    pub site_clause: &'static str,
}

pub const LINKEDIN: &str = "linkedin";
pub const GITHUB: &str = "github";
pub const STACKOVERFLOW: &str = "stackoverflow";
pub const DRIBBBLE: &str = "dribbble";
pub const ANGELLIST: &str = "angellist";
pub const KAGGLE: &str = "kaggle";

/// Appended in place of a site clause for web/resume searches.
pub const RESUME_SITE_CLAUSE: &str = r#"(inurl:resume OR intitle:resume OR "resume.pdf" OR "cv.pdf") (filetype:pdf OR filetype:doc OR filetype:docx OR filetype:txt) -job -jobs -template -sample -apply"#;

const PLATFORMS: &[PlatformConfig] = &[
    PlatformConfig {
        key: LINKEDIN,
        label: "LinkedIn",
        site_clause: r#"(site:linkedin.com/in OR site:linkedin.com/pub) -intitle:"profiles" -inurl:"dir/""#,
    },
    PlatformConfig {
        key: GITHUB,
        label: "GitHub",
        site_clause: r#"site:github.com ("repositories" OR "profile" OR "users") -"jobs" -"hiring""#,
    },
    PlatformConfig {
        key: STACKOVERFLOW,
        label: "StackOverflow",
        site_clause: r#"site:stackoverflow.com/users ("developer" OR "engineer") -"jobs""#,
    },
    PlatformConfig {
        key: DRIBBBLE,
        label: "Dribbble",
        site_clause: r#"site:dribbble.com ("UI" OR "UX" OR "Designer") -"jobs" -"hiring""#,
    },
    PlatformConfig {
        key: ANGELLIST,
        label: "AngelList / Wellfound",
        site_clause: "site:angel.co/u OR site:wellfound.com/u",
    },
    PlatformConfig {
        key: KAGGLE,
        label: "Kaggle",
        site_clause: r#"site:kaggle.com ("notebooks" OR "competitions" OR "profile")"#,
    },
];

/// All platforms in display order.
pub fn registry() -> &'static [PlatformConfig] {
    PLATFORMS
}

pub fn lookup(key: &str) -> Option<&'static PlatformConfig> {
    PLATFORMS.iter().find(|p| p.key == key)
}

/// Like `lookup`, but unknown keys resolve to LinkedIn.
pub fn lookup_or_default(key: &str) -> &'static PlatformConfig {
    lookup(key).unwrap_or(&PLATFORMS[0])
}
