//! Configuration file loading and error types.

use std::{fs, path::Path};

use crate::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format")]
    UnsupportedFormat,
    #[error("validation: {0}")]
    Validation(String),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
        "json" => Ok(serde_json::from_str(&data)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
        "toml" => Ok(toml::from_str(&data)?),
        _ => Err(ConfigError::UnsupportedFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("silo-config-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_toml() {
        let path = write_temp("basic.toml", "[server]\nlisten = \"0.0.0.0:8000\"\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    }

    #[test]
    fn load_json() {
        let path = write_temp("basic.json", r#"{"server": {"listen": "0.0.0.0:8001"}}"#);
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.server.listen, "0.0.0.0:8001");
    }

    #[test]
    fn load_yaml() {
        let path = write_temp("basic.yaml", "server:\n  listen: 0.0.0.0:8002\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.server.listen, "0.0.0.0:8002");
    }

    #[test]
    fn unsupported_extension() {
        let path = write_temp("basic.ini", "listen = nope");
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::UnsupportedFormat)
        ));
    }
}
