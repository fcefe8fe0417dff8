use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Mediguide";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info,tower_http=info", env!("CARGO_PKG_NAME"))
}

/// Runtime settings, read once at startup from the environment.
///
/// Every variable has a documented default so the service starts with no
/// configuration at all (classifier and AI enhancement then run in their
/// degraded modes).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to (`MEDIGUIDE_BIND`).
    pub bind_addr: String,
    /// Directory holding the reference dataset CSV files (`MEDIGUIDE_DATASETS_DIR`).
    pub datasets_dir: PathBuf,
    /// Path to the classifier weight artifact (`MEDIGUIDE_MODEL_PATH`).
    pub model_path: PathBuf,
    /// Gemini API key (`GOOGLE_GENERATIVE_AI_API_KEY`). Empty disables enhancement.
    pub gemini_api_key: String,
    /// Base URL of the generation endpoint (`MEDIGUIDE_GEMINI_URL`).
    pub gemini_base_url: String,
    /// Generation model name (`MEDIGUIDE_GEMINI_MODEL`).
    pub gemini_model: String,
    /// Outbound call timeout in seconds (`MEDIGUIDE_AI_TIMEOUT_SECS`).
    pub ai_timeout_secs: u64,
    /// Rate limit: admitted requests per window (`MEDIGUIDE_RATE_QUOTA`).
    pub rate_quota: u32,
    /// Rate limit: window length in seconds (`MEDIGUIDE_RATE_WINDOW_SECS`).
    pub rate_window_secs: u64,
    /// Comma-separated CORS origins (`MEDIGUIDE_ALLOWED_ORIGINS`); empty = any.
    pub allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("MEDIGUIDE_BIND", "127.0.0.1:8000"),
            datasets_dir: PathBuf::from(env_or("MEDIGUIDE_DATASETS_DIR", "datasets")),
            model_path: PathBuf::from(env_or("MEDIGUIDE_MODEL_PATH", "models/classifier.json")),
            gemini_api_key: env_or("GOOGLE_GENERATIVE_AI_API_KEY", ""),
            gemini_base_url: env_or(
                "MEDIGUIDE_GEMINI_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            gemini_model: env_or("MEDIGUIDE_GEMINI_MODEL", "gemini-2.0-flash-exp"),
            ai_timeout_secs: env_parse("MEDIGUIDE_AI_TIMEOUT_SECS", 30),
            rate_quota: env_parse("MEDIGUIDE_RATE_QUOTA", 100),
            rate_window_secs: env_parse("MEDIGUIDE_RATE_WINDOW_SECS", 60),
            allowed_origins: env_or("MEDIGUIDE_ALLOWED_ORIGINS", "")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let settings = Settings::from_env();
        assert_eq!(settings.rate_quota, 100);
        assert_eq!(settings.rate_window_secs, 60);
        assert_eq!(settings.ai_timeout_secs, 30);
        assert!(settings.gemini_base_url.starts_with("https://"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_names_crate() {
        assert!(default_log_filter().contains("mediguide"));
    }
}
