use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub firestore_base_url: String,
    pub firestore_project_id: String,
    pub firestore_api_key: String,
    pub anthropic_api_key: String,
    pub civic_api_base_url: String,
    pub civic_api_key: String,
    /// Collection holding the zip-keyed representative documents.
    pub reps_collection: String,
    /// Collection holding uploaded contact lists and their manifest.
    pub contacts_collection: String,
    /// Timeout applied to store and civic-API requests.
    pub request_timeout_secs: u64,
    /// Timeout applied to LLM calls, which run much longer.
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            firestore_base_url: std::env::var("FIRESTORE_BASE_URL")
                .unwrap_or_else(|_| "https://firestore.googleapis.com/v1".to_string()),
            firestore_project_id: require_env("FIRESTORE_PROJECT_ID")?,
            firestore_api_key: require_env("FIRESTORE_API_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            civic_api_base_url: std::env::var("CIVIC_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/civicinfo/v2".to_string()),
            civic_api_key: require_env("CIVIC_API_KEY")?,
            reps_collection: std::env::var("REPS_COLLECTION")
                .unwrap_or_else(|_| "zip_representatives".to_string()),
            contacts_collection: std::env::var("CONTACTS_COLLECTION")
                .unwrap_or_else(|_| "contact_lists".to_string()),
            request_timeout_secs: env_u64("REQUEST_TIMEOUT_SECS", 30)?,
            llm_timeout_secs: env_u64("LLM_TIMEOUT_SECS", 120)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Metadata collection paired with a data collection, following the
    /// `<collection>_metadata` convention used by the import scripts.
    pub fn metadata_collection(collection: &str) -> String {
        format!("{collection}_metadata")
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a positive integer")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_collection_convention() {
        assert_eq!(
            Config::metadata_collection("zip_representatives"),
            "zip_representatives_metadata"
        );
        assert_eq!(
            Config::metadata_collection("contact_lists"),
            "contact_lists_metadata"
        );
    }
}
