//! Bot Configuration
//!
//! Saves and loads the bot's configuration at `./config/djs_config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::types::BotConfig;

/// Directory the config file lives in. It must already exist; the setup
/// tool never creates it.
const CONFIG_DIR: &str = "config";

/// Config file name within the config directory.
const CONFIG_FILENAME: &str = "djs_config.json";

/// Errors from persisting the bot config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config file")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config")]
    Serialize(#[from] serde_json::Error),
}

/// Returns the path to the bot config file: `./config/djs_config.json`.
pub fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Serialize a value as JSON indented with four spaces.
/// `serde_json::to_string_pretty` indents with two.
fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

fn write_config(path: &Path, config: &BotConfig) -> Result<(), ConfigError> {
    let json = to_json_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save the bot config to `./config/djs_config.json`.
///
/// Any existing file is fully overwritten. A missing or unwritable
/// `config/` directory surfaces as the underlying I/O error.
pub fn save_config(config: &BotConfig) -> Result<(), ConfigError> {
    let path = config_path();
    write_config(&path, config)?;
    debug!(path = %path.display(), admins = config.admin_id.len(), "config written");
    Ok(())
}

/// Load the bot config from disk.
///
/// Returns `None` if the config file does not exist or cannot be parsed.
pub fn load_config() -> Option<BotConfig> {
    let config_path = config_path();
    if !config_path.exists() {
        return None;
    }

    let contents = fs::read_to_string(&config_path).ok()?;
    serde_json::from_str(&contents).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("djs-setup-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_config_path_is_fixed() {
        assert_eq!(config_path(), PathBuf::from("config/djs_config.json"));
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let config = BotConfig::from_answers("111 222", "tok");
        let json = String::from_utf8(to_json_pretty(&config).unwrap()).unwrap();
        assert!(json.contains("\n    \"adminID\""));
        assert!(json.contains("\n        \"111\""));
        assert!(!json.contains("\n  \""));
    }

    #[test]
    fn test_json_has_exactly_three_keys_in_order() {
        let config = BotConfig::from_answers("id1 id2", "token-string");
        let json = String::from_utf8(to_json_pretty(&config).unwrap()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["adminID"], serde_json::json!(["id1", "id2"]));
        assert_eq!(object["botToken"], "token-string");
        assert_eq!(object["defaultDataFile"], "beemovie");

        let admin = json.find("\"adminID\"").unwrap();
        let token = json.find("\"botToken\"").unwrap();
        let data_file = json.find("\"defaultDataFile\"").unwrap();
        assert!(admin < token && token < data_file);
    }

    #[test]
    fn test_write_config_overwrites_previous_content() {
        let path = temp_path("overwrite.json");

        write_config(&path, &BotConfig::from_answers("111 222 333", "first")).unwrap();
        write_config(&path, &BotConfig::from_answers("9", "second")).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["adminID"], serde_json::json!(["9"]));
        assert_eq!(parsed["botToken"], "second");
        assert_eq!(parsed.as_object().unwrap().len(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_config_fails_when_directory_is_missing() {
        let path = temp_path("no-such-dir").join("djs_config.json");

        let err = write_config(&path, &BotConfig::from_answers("", "")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_saved_config_round_trips() {
        let path = temp_path("roundtrip.json");

        write_config(&path, &BotConfig::from_answers("42", "  tok ")).unwrap();
        let loaded: BotConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.admin_id, vec!["42"]);
        assert_eq!(loaded.bot_token, "tok");
        assert_eq!(loaded.default_data_file, "beemovie");

        fs::remove_file(&path).unwrap();
    }
}
