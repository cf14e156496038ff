use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Completion service settings read from the environment (or `.env` in development).
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let api_key = env_opt("OPENAI_KEY").or_else(|| env_opt("OPENAI_API_KEY"));
        Self {
            api_key,
            base_url: normalize_base_url(env_string("OPENAI_BASE_URL", DEFAULT_BASE_URL)),
            model: env_string("OPENAI_MODEL", DEFAULT_MODEL),
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_string(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

// the openai crate appends routes directly to the base url
fn normalize_base_url(value: String) -> String {
    if value.ends_with('/') {
        value
    } else {
        format!("{value}/")
    }
}
