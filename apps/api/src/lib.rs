//! SourceSmart: Boolean and X-ray query builder for recruiters.
//!
//! The `query` module is the engine (JD extraction, clause building, platform
//! synthesis, recommendations). The rest serves it over HTTP.

pub mod config;
pub mod errors;
pub mod query;
pub mod routes;
pub mod state;

pub use query::clause::{
    build_or_clause, looks_like_boolean_expression, quote_if_multiword, split_terms, SkillsInput,
};
pub use query::engines::{search_url, SearchEngine};
pub use query::jd_parser::{extract_fields, HeuristicExtractor, JdExtractor, ParsedJD, Seniority};
pub use query::platforms::PlatformConfig;
pub use query::recommend::suggest_platforms;
pub use query::synthesizer::{
    synthesize_jd_query, synthesize_profile_query, synthesize_web_query, JdQueries,
    JdQueryVariant, QueryFields,
};
pub use query::templates::{starter_templates, QueryTemplate};
