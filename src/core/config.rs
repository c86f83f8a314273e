//! Store connection settings resolved from CLI flags and the environment.

use crate::{error::LeagueError, Result, API_KEY_ENV_VAR, STORE_URL_ENV_VAR};

/// Where the league database lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Publishable (anon) API key.
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve settings from explicit values, falling back to the
    /// `DYNASTY_FFL_STORE_URL` and `DYNASTY_FFL_API_KEY` env vars.
    ///
    /// Blank values count as missing.
    pub fn resolve(store_url: Option<String>, api_key: Option<String>) -> Result<Self> {
        let base_url = resolve_setting(store_url, STORE_URL_ENV_VAR, "Store URL")?;
        let api_key = resolve_setting(api_key, API_KEY_ENV_VAR, "API key")?;
        Ok(Self::new(base_url.trim_end_matches('/'), api_key))
    }
}

fn resolve_setting(
    explicit: Option<String>,
    env_var: &str,
    what: &'static str,
) -> Result<String> {
    explicit
        .or_else(|| std::env::var(env_var).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LeagueError::MissingConfig {
            what,
            env_var: env_var.to_string(),
        })
}
