//! Configuration for the external AI boundary.
//!
//! Settings resolve from two sources, in priority order:
//! 1. the `CAREBOT_GEMINI_API_KEY` environment variable (key only)
//! 2. `~/.config/carebot/secret.json`
//!
//! Model name and request timeout default when unspecified, so a bare API key
//! is a complete configuration.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Model used when secret.json does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Request timeout used when secret.json does not set one. Upstream latency
/// past this point reads as a failure and the caller substitutes the
/// fallback lookup.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Environment variable that overrides the file-based API key.
const API_KEY_ENV: &str = "CAREBOT_GEMINI_API_KEY";

/// On-disk shape of secret.json.
#[derive(Debug, Clone, Default, Deserialize)]
struct SecretFile {
    #[serde(default)]
    gemini: Option<GeminiSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GeminiSection {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    model_name: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

/// Fully resolved settings for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    /// Resolves settings from the environment and secret.json.
    ///
    /// A missing secret.json is not an error as long as the environment
    /// provides the API key; a present but unparseable file is.
    pub fn resolve() -> Result<Self, String> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        let file = load_secret_file()?;
        Self::from_sources(env_key, file)
    }

    fn from_sources(env_key: Option<String>, file: SecretFile) -> Result<Self, String> {
        let section = file.gemini.unwrap_or_default();

        let api_key = env_key
            .filter(|k| !k.trim().is_empty())
            .or(section.api_key)
            .ok_or_else(|| {
                format!(
                    "No Gemini API key: set {API_KEY_ENV} or add gemini.api_key to secret.json"
                )
            })?;

        Ok(Self {
            api_key,
            model: section
                .model_name
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(section.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

fn load_secret_file() -> Result<SecretFile, String> {
    let path = secret_file_path()?;
    if !path.exists() {
        return Ok(SecretFile::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Returns the path to the secret file: ~/.config/carebot/secret.json
fn secret_file_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;
    Ok(home.join(".config").join("carebot").join("secret.json"))
}
