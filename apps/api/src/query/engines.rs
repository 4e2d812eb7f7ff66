//! Search engine links for a generated query.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
}

impl SearchEngine {
    fn base_url(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
        }
    }
}

/// Builds the results-page URL for `query`, percent-encoding the whole query string.
pub fn search_url(engine: SearchEngine, query: &str) -> String {
    format!("{}{}", engine.base_url(), urlencoding::encode(query))
}
