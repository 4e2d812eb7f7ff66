use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Longest JD (in characters) the analyze endpoint accepts.
    pub max_jd_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_jd_chars: std::env::var("MAX_JD_CHARS")
                .unwrap_or_else(|_| "20000".to_string())
                .parse::<usize>()
                .context("MAX_JD_CHARS must be a positive integer")?,
        })
    }

    /// Request body cap: worst-case UTF-8 width of the JD plus room for the JSON envelope.
    pub fn body_limit_bytes(&self) -> usize {
        self.max_jd_chars.saturating_mul(4).saturating_add(4096)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_limit_covers_four_byte_chars() {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_jd_chars: 1000,
        };
        assert_eq!(config.body_limit_bytes(), 8096);
    }

    #[test]
    fn test_body_limit_saturates() {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_jd_chars: usize::MAX,
        };
        assert_eq!(config.body_limit_bytes(), usize::MAX);
    }
}
