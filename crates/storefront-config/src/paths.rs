//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/storefront/`, `~/.cache/storefront/`
//! - macOS: `~/Library/Application Support/storefront/`, `~/Library/Caches/storefront/`
//! - Windows: `%APPDATA%\storefront\`, `%LOCALAPPDATA%\storefront\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "storefront";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_app_config_path() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
