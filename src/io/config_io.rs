use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read config.toml from the data directory. A missing file means
/// defaults; a malformed file is treated the same way rather than
/// blocking startup.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join("config.toml");
    let Ok(content) = fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&content).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn malformed_config_is_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[ui.colors\nbroken").unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn overrides_are_read() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ui.colors]\nhighlight = \"#ffffff\"\n",
        )
        .unwrap();
        let config = read_config(dir.path());
        assert_eq!(config.ui.colors["highlight"], "#ffffff");
    }
}
