//! Access-token resolution for the document services.
//!
//! The interactive OAuth flow lives outside this tool; runs consume a token
//! from `GOOGLE_ACCESS_TOKEN` and keep it cached in `token.json` so later
//! runs in the same session work without the variable.

use crate::utils::error::{InvoiceError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const TOKEN_CACHE_FILE: &str = "token.json";

const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";

#[derive(Debug, Serialize, Deserialize)]
struct CachedToken {
    access_token: String,
}

/// JSON token cache next to the binary, surviving between runs.
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the cached token. A file that cannot be parsed (interrupted
    /// write, hand-edited) is removed and treated as absent.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<CachedToken>(&raw) {
            Ok(cached) if !cached.access_token.trim().is_empty() => Ok(Some(cached.access_token)),
            _ => {
                tracing::warn!("Discarding unreadable token cache at {}", self.path.display());
                std::fs::remove_file(&self.path)?;
                Ok(None)
            }
        }
    }

    /// Persist the token for the next run, overwriting any previous cache.
    pub fn store(&self, access_token: &str) -> Result<()> {
        let payload = serde_json::to_string_pretty(&CachedToken {
            access_token: access_token.to_string(),
        })?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(TOKEN_CACHE_FILE)
    }
}

/// Resolve the access token: the environment wins and refreshes the cache,
/// otherwise the cache is used, otherwise the run cannot proceed.
pub fn resolve_access_token(cache: &TokenCache) -> Result<String> {
    let env_token = std::env::var(ACCESS_TOKEN_ENV)
        .ok()
        .filter(|token| !token.trim().is_empty());
    resolve_with(cache, env_token)
}

fn resolve_with(cache: &TokenCache, env_token: Option<String>) -> Result<String> {
    if let Some(token) = env_token {
        cache.store(&token)?;
        return Ok(token);
    }

    if let Some(token) = cache.load()? {
        tracing::debug!("Using cached access token");
        return Ok(token);
    }

    Err(InvoiceError::MissingConfigError {
        field: ACCESS_TOKEN_ENV.to_string(),
    })
}
