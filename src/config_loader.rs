// Configuration loader for the transcription API
//
// This module handles loading configuration from the TOML configuration file
// and environment variables with appropriate precedence.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use toml::Value;

const CONFIG_FILE_PATH: &str = "transcript_api.conf";

/// Loads configuration from the TOML file into environment variables
///
/// Configuration precedence (highest to lowest):
/// 1. Environment variables
/// 2. Configuration file values
/// 3. Default values (application defaults, not handled here)
///
/// Nested tables are flattened: `[server] port = 8000` becomes the
/// `SERVER_PORT` variable. Keys are uppercased to match the env var names.
///
/// # Returns
///
/// Returns true if the config file was successfully loaded, false otherwise
pub fn load_config() -> bool {
    let config_path = Path::new(CONFIG_FILE_PATH);

    if !config_path.exists() {
        debug!("Configuration file not found at: {}", CONFIG_FILE_PATH);
        return false;
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read configuration file: {}", e);
            return false;
        }
    };

    let config_values: Value = match config_content.parse() {
        Ok(values) => values,
        Err(e) => {
            warn!("Failed to parse configuration file: {}", e);
            return false;
        }
    };

    let mut config_map = HashMap::new();
    flatten_into(&mut config_map, "", &config_values);

    // Only set variables the environment doesn't already define
    for (key, value) in config_map {
        if env::var(&key).is_err() {
            debug!("Setting env var from config file: {} = {}", key, value);
            env::set_var(key, value);
        } else {
            debug!("Env var already exists, skipping: {}", key);
        }
    }

    info!("Configuration loaded from {}", CONFIG_FILE_PATH);
    true
}

/// Flatten a TOML value tree into uppercased KEY or PREFIX_KEY entries
fn flatten_into(map: &mut HashMap<String, String>, prefix: &str, value: &Value) {
    match value {
        Value::Table(table) => {
            for (key, nested) in table {
                let flat_key = if prefix.is_empty() {
                    key.to_uppercase()
                } else {
                    format!("{}_{}", prefix, key.to_uppercase())
                };
                flatten_into(map, &flat_key, nested);
            }
        }
        Value::String(s) => {
            map.insert(prefix.to_string(), s.clone());
        }
        Value::Integer(i) => {
            map.insert(prefix.to_string(), i.to_string());
        }
        Value::Float(f) => {
            map.insert(prefix.to_string(), f.to_string());
        }
        Value::Boolean(b) => {
            map.insert(prefix.to_string(), b.to_string());
        }
        _ => {
            warn!("Skipping unsupported TOML value type for key: {}", prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_tables() {
        let parsed: Value = "max_file_size = 1024\n[server]\nhost = \"0.0.0.0\"\nport = 8000\n"
            .parse()
            .expect("valid toml");

        let mut map = HashMap::new();
        flatten_into(&mut map, "", &parsed);

        assert_eq!(map.get("MAX_FILE_SIZE").map(String::as_str), Some("1024"));
        assert_eq!(map.get("SERVER_HOST").map(String::as_str), Some("0.0.0.0"));
        assert_eq!(map.get("SERVER_PORT").map(String::as_str), Some("8000"));
    }
}
