use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".storefront.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for `.storefront.toml` in:
/// 1. Current working directory
/// 2. The platform config directory as `config.toml`
/// 3. Home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Ok(app_config) = crate::app_config_path() {
        if let Ok(content) = std::fs::read_to_string(&app_config) {
            log::debug!("Loaded config from {}", app_config.display());
            return Some(content);
        }
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    None
}

/// Returns ~/.storefront.toml if the home directory is known.
fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir()
        .or_else(|| env::var_os("HOME").map(PathBuf::from))
        .map(|home| home.join(CONFIG_FILE))
}
