use std::env;
use std::path::PathBuf;

use tracing::info;

const DEFAULT_LISTINGS_URL: &str = "http://localhost:8000";
const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:5000";

/// Runtime configuration, environment overrides with logged defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the listing-collection service
    pub listings_url: String,
    /// Base URL of the authentication service
    pub auth_url: String,
    /// Where the signed-in session is persisted between runs
    pub session_file: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            listings_url: try_load("NYUMBA_LISTINGS_URL", DEFAULT_LISTINGS_URL),
            auth_url: try_load("NYUMBA_AUTH_URL", DEFAULT_AUTH_URL),
            session_file: env::var("NYUMBA_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        }
    }
}

fn try_load(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

/// Per-user data dir, the client-side analog of origin-scoped storage
fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nyumba")
        .join("session.json")
}
