use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration from config.toml in the data directory. Everything is
/// optional; a missing or empty file means defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name, e.g.
    /// `background = "#0d0d14"` or `urgent = "#ff4d4d"` under [ui.colors]
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn color_overrides_parse() {
        let config: Config = toml::from_str(
            r##"
[ui.colors]
background = "#000000"
urgent = "#ff0000"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.colors["background"], "#000000");
        assert_eq!(config.ui.colors["urgent"], "#ff0000");
    }
}
