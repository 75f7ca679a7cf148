//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use catedral_commerce::config::StoreConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["catedral.toml", ".catedral.toml", "catedral.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store the storefront sells for.
    #[serde(default)]
    pub store: StoreConfig,

    /// How links are opened.
    #[serde(default)]
    pub opener: OpenerConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// How the CLI hands links to other applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenerMode {
    /// Run the configured command with the link as last argument.
    #[default]
    System,
    /// Print the link.
    Print,
}

/// Opener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenerConfig {
    #[serde(default)]
    pub mode: OpenerMode,

    /// Program that opens a URI.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before the URI.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_command() -> String {
    if cfg!(target_os = "macos") {
        "open".to_string()
    } else if cfg!(windows) {
        "rundll32".to_string()
    } else {
        "xdg-open".to_string()
    }
}

fn default_args() -> Vec<String> {
    if cfg!(windows) {
        vec!["url.dll,FileProtocolHandler".to_string()]
    } else {
        Vec::new()
    }
}

impl Default for OpenerConfig {
    fn default() -> Self {
        Self {
            mode: OpenerMode::default(),
            command: default_command(),
            args: default_args(),
        }
    }
}

/// Generate a default catedral.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Catedral storefront configuration

[store]
store_name = "La Catedral Airsoft"
# Messaging destination, E.164 digits
phone = "5531998331464"
messaging_base_url = "https://api.whatsapp.com/send"
# "always" empties the cart after every checkout attempt,
# "on_success" only when the messaging app opened
clear_policy = "always"
currency = "BRL"

[store.templates]
greeting = "Olá, La Catedral!"
single_item_intent = "Gostaria de comprar o seguinte item"
multi_item_intent = "Gostaria de comprar os seguintes itens"
quick_buy_intent = "Eu gostaria de comprar o item"

[store.contact]
phone_display = "31 99833-1464"
phone_dial = "31998331464"
email = "contato@lacatedralairsoft.com"

[opener]
# "system" runs the command below, "print" only prints links
mode = "system"
command = "{command}"
"#,
        command = default_command()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catedral_commerce::checkout::ClearPolicy;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.store.store_name, "La Catedral Airsoft");
        assert_eq!(config.store.clear_policy, ClearPolicy::Always);
        assert_eq!(config.opener.mode, OpenerMode::System);
        assert_eq!(config.opener.command, default_command());
        assert!(config.store.checkout().is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("catedral.toml");
        std::fs::write(&toml_path, "[opener]\nmode = \"print\"\n").unwrap();
        assert_eq!(CliConfig::load(&toml_path).unwrap().opener.mode, OpenerMode::Print);

        let json_path = dir.path().join("catedral.json");
        std::fs::write(&json_path, r#"{"store": {"store_name": "JSON"}}"#).unwrap();
        assert_eq!(CliConfig::load(&json_path).unwrap().store.store_name, "JSON");
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catedral.toml");
        std::fs::write(&path, "[store\n").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("catedral.toml"));
    }
}
