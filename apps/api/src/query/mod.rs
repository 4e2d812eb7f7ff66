// Query engine: JD extraction, clause building, per-platform synthesis, recommendations.
// Everything outside `handlers` is pure and synchronous; handlers only adapt it to HTTP.

pub mod clause;
pub mod engines;
pub mod handlers;
pub mod jd_parser;
pub mod platforms;
pub mod recommend;
pub mod synthesizer;
pub mod templates;
