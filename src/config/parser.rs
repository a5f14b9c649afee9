use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads, parses, and validates a TOML configuration file
///
/// Missing keys fall back to the built-in defaults, so an empty file is a
/// valid configuration.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes the hex-encoded SHA-256 hash of a file
///
/// Used on the config file and on the URL list. Sequence identifiers are
/// positional, so the URL list hash is what tells an operator whether the
/// resume guarantee still holds between two runs.
pub fn compute_file_hash(path: &Path) -> Result<String, ConfigError> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}

/// Loads a configuration and returns it together with its file hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_file_hash(path)?;
    Ok((config, hash))
}
