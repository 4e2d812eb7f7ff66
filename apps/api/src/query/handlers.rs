//! Axum route handlers for the query API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::query::engines::{search_url, SearchEngine};
use crate::query::jd_parser::ParsedJD;
use crate::query::platforms::{self, PlatformConfig};
use crate::query::recommend::suggest_platforms;
use crate::query::synthesizer::{
    synthesize_profile_query, synthesize_web_query, JdQueries, QueryFields,
};
use crate::query::templates::{starter_templates, QueryTemplate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeJdRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJdResponse {
    pub parsed_jd: ParsedJD,
    pub suggested_platforms: Vec<&'static str>,
    pub queries: JdQueries,
    pub extractor: &'static str,
}

fn default_platform() -> String {
    platforms::LINKEDIN.to_string()
}

#[derive(Debug, Deserialize)]
pub struct ProfileQueryRequest {
    #[serde(flatten)]
    pub fields: QueryFields,
    #[serde(default = "default_platform")]
    pub platform: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileQueryResponse {
    pub query: String,
    pub platform: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchUrlRequest {
    pub query: String,
    #[serde(default)]
    pub engine: SearchEngine,
}

#[derive(Debug, Serialize)]
pub struct SearchUrlResponse {
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/platforms
pub async fn handle_list_platforms() -> Json<&'static [PlatformConfig]> {
    Json(platforms::registry())
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [QueryTemplate]> {
    Json(starter_templates())
}

/// POST /api/v1/jd/analyze
///
/// Extracts fields from a pasted JD and returns the derived queries plus platform suggestions.
/// Each call is a fresh analysis; nothing from earlier requests is merged in.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJdRequest>,
) -> Result<Json<AnalyzeJdResponse>, AppError> {
    let chars = request.jd_text.chars().count();
    if chars > state.config.max_jd_chars {
        return Err(AppError::Validation(format!(
            "jd_text is {chars} characters; the limit is {}",
            state.config.max_jd_chars
        )));
    }

    let parsed_jd = state.extractor.extract(&request.jd_text);
    let suggested_platforms = suggest_platforms(&parsed_jd);
    let queries = JdQueries::from_parsed(&parsed_jd);

    info!(
        chars,
        skills = parsed_jd.skills.len(),
        seniority = parsed_jd.seniority.as_str(),
        suggestions = suggested_platforms.len(),
        "Analyzed JD"
    );

    Ok(Json(AnalyzeJdResponse {
        parsed_jd,
        suggested_platforms,
        queries,
        extractor: state.extractor.backend(),
    }))
}

/// POST /api/v1/query/profile
pub async fn handle_profile_query(
    Json(request): Json<ProfileQueryRequest>,
) -> Result<Json<ProfileQueryResponse>, AppError> {
    let platform = platforms::lookup(&request.platform)
        .ok_or_else(|| AppError::NotFound(format!("Unknown platform '{}'", request.platform)))?;

    let query = synthesize_profile_query(&request.fields, platform.key);

    Ok(Json(ProfileQueryResponse {
        query,
        platform: platform.key,
    }))
}

/// POST /api/v1/query/web
pub async fn handle_web_query(Json(fields): Json<QueryFields>) -> Json<QueryResponse> {
    Json(QueryResponse {
        query: synthesize_web_query(&fields),
    })
}

/// POST /api/v1/query/search-url
pub async fn handle_search_url(
    Json(request): Json<SearchUrlRequest>,
) -> Result<Json<SearchUrlResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation(
            "Generate a query first (title/skills/location)".to_string(),
        ));
    }

    Ok(Json(SearchUrlResponse {
        url: search_url(request.engine, &request.query),
    }))
}
