//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly via figment and validated once at
//! startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("dispatcher model name cannot be empty")]
    EmptyModelName,

    #[error("max_tool_turns cannot be 0")]
    InvalidMaxToolTurns,
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub datasets: FileDatasetsConfig,
    pub dispatcher: FileDispatcherConfig,
    pub conversation: FileConversationConfig,
}

impl FileConfig {
    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dispatcher.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.dispatcher.max_tool_turns == 0 {
            return Err(ConfigValidationError::InvalidMaxToolTurns);
        }
        Ok(())
    }
}

/// Paths to the three JSON data sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetsConfig {
    pub catalog: PathBuf,
    pub orders: PathBuf,
    pub faqs: PathBuf,
}

impl Default for FileDatasetsConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/product_catalog.json"),
            orders: PathBuf::from("data/order_database.json"),
            faqs: PathBuf::from("data/product_faqs.json"),
        }
    }
}

/// Hosted-model dispatcher settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatcherConfig {
    /// Model name passed to the dispatcher API
    pub model: String,
    /// API key; the GEMINI_API environment variable takes precedence
    pub api_key: Option<String>,
    /// Upper bound on tool round-trips per user turn
    pub max_tool_turns: usize,
}

impl Default for FileDispatcherConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            max_tool_turns: 8,
        }
    }
}

/// Conversation transcript settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Where to write the JSONL transcript; disabled when unset
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dispatcher.model, "gemini-2.5-flash");
        assert_eq!(config.dispatcher.max_tool_turns, 8);
        assert!(config.conversation.log_file.is_none());
    }

    #[test]
    fn empty_model_name_is_rejected() {
        let mut config = FileConfig::default();
        config.dispatcher.model = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn zero_tool_turns_is_rejected() {
        let mut config = FileConfig::default();
        config.dispatcher.max_tool_turns = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxToolTurns)
        ));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: FileConfig = toml_from_str(
            r#"
            [dispatcher]
            model = "gemini-2.0-pro"
            "#,
        );
        assert_eq!(config.dispatcher.model, "gemini-2.0-pro");
        assert_eq!(config.dispatcher.max_tool_turns, 8);
        assert_eq!(
            config.datasets.catalog,
            PathBuf::from("data/product_catalog.json")
        );
    }

    fn toml_from_str(raw: &str) -> FileConfig {
        use figment::{Figment, providers::{Format, Serialized, Toml}};
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(raw))
            .extract()
            .unwrap()
    }
}
