//! Starter queries a caller can load straight into the advanced override.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryTemplate {
    pub title: &'static str,
    pub query: &'static str,
}

const STARTER_TEMPLATES: &[QueryTemplate] = &[
    QueryTemplate {
        title: "Backend Developer",
        query: r#""Node.js" OR "Python" AND "PostgreSQL" AND "Remote""#,
    },
    QueryTemplate {
        title: "Frontend React",
        query: r#""React" OR "TypeScript" AND "CSS" AND "Remote""#,
    },
    QueryTemplate {
        title: "LLM Engineer",
        query: r#""Python" OR "PyTorch" AND "Vector DB" AND "Remote""#,
    },
];

pub fn starter_templates() -> &'static [QueryTemplate] {
    STARTER_TEMPLATES
}
