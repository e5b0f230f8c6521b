//! Configuration loading
//!
//! Precedence for the database URL: `--database-url` flag (which clap also
//! fills from `DATABASE_URL`), then `DATABASE_URL` loaded from `./.env` or
//! `~/.elections/.env`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Per-user config directory, `~/.elections`
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".elections"))
}

/// Load `.env` files without overriding variables already set.
///
/// Missing or unparsable files are skipped.
pub fn load_env_files() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            tracing::debug!(path = %env_file.display(), "loaded .env");
        }
    }
}

/// Resolve the database URL from the flag or the environment.
pub fn database_url(flag: Option<String>) -> Result<String> {
    resolve_database_url(flag, std::env::var("DATABASE_URL").ok())
}

fn resolve_database_url(flag: Option<String>, env: Option<String>) -> Result<String> {
    flag.or(env)
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            anyhow!(
                "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.elections/.env"
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let url = resolve_database_url(
            Some("postgres://flag/db".into()),
            Some("postgres://env/db".into()),
        )
        .unwrap();
        assert_eq!(url, "postgres://flag/db");
    }

    #[test]
    fn falls_back_to_env() {
        let url = resolve_database_url(None, Some("postgres://env/db".into())).unwrap();
        assert_eq!(url, "postgres://env/db");
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = resolve_database_url(None, None).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));

        assert!(resolve_database_url(Some("  ".into()), None).is_err());
    }

    #[test]
    fn config_dir_is_under_home() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(".elections"));
        }
    }
}
