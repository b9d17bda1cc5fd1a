use std::path::PathBuf;

use crate::error::{Error, Result};

/// File name of the corpus store inside the data directory.
pub const STORE_FILE: &str = "corpus.db";

/// Resolve the data directory that holds the corpus store, by priority:
/// 1. Explicit path (with tilde expansion)
/// 2. UTTERBANK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.utterbank (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: UTTERBANK_PATH environment variable
    if let Ok(env_path) = std::env::var("UTTERBANK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("utterbank"));
    }

    // Priority 4: Fallback to ~/.utterbank (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".utterbank"));
    }

    Err(Error::Internal(anyhow::anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    )))
}

/// Default on-disk location of the corpus store.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(resolve_data_dir(None)?.join(STORE_FILE))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
