use std::{fs, path::Path};

use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "openloodb.toml";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db_url: Option<String>,
    pub db_pool_size: Option<u32>,
    #[serde(default)]
    pub enable_cors: bool,
    // E-mail addresses of accounts that are promoted
    // to admins at startup.
    #[serde(default)]
    pub bootstrap_admins: Vec<String>,
}

impl Config {
    pub fn try_load_from_file(file_path: &str) -> Result<Option<Self>> {
        if !Path::new(file_path).exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(file_path)?;
        let config = toml::from_str(&contents)?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let config: Config = toml::from_str(
            r#"
db_url = "test.db"
enable_cors = true
bootstrap_admins = ["admin@example.com"]
"#,
        )
        .unwrap();
        assert_eq!(Some("test.db".to_string()), config.db_url);
        assert!(config.enable_cors);
        assert_eq!(vec!["admin@example.com".to_string()], config.bootstrap_admins);
        assert_eq!(None, config.db_pool_size);
    }

    #[test]
    fn reject_unknown_fields() {
        assert!(toml::from_str::<Config>("unknown = 1").is_err());
    }
}
