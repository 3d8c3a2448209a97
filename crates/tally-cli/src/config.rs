use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tally_account::AccountTransformer;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

/// Settings for the `tally` binary, read from an optional TOML file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Validate every input account before operating on it.
    pub strict: bool,
    /// Separator used by `render` and `parse` in place of `:`.
    pub render_separator: Option<String>,
}

impl CliConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: CliConfig = toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Config file values, or defaults, with command-line flags applied on
    /// top.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(format) = cli.format {
            config.format = format;
        }
        config.strict |= cli.strict;
        Ok(config)
    }

    pub fn transformer(&self) -> AccountTransformer {
        AccountTransformer::new(self.render_separator.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config() {
        let c = CliConfig::default();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(!c.strict);
        assert!(c.render_separator.is_none());
        assert_eq!(c.transformer(), AccountTransformer::default());
    }

    #[test]
    fn load_full_config() {
        let file = write_config("format = \"json\"\nstrict = true\nrender_separator = \".\"\n");
        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
        assert!(c.strict);
        assert_eq!(c.transformer().render("Assets:Cash"), "Assets.Cash");
    }

    #[test]
    fn load_partial_config_keeps_defaults() {
        let file = write_config("strict = true\n");
        let c = CliConfig::load(file.path()).unwrap();
        assert!(c.strict);
        assert_eq!(c.format, OutputFormat::Text);
    }

    #[test]
    fn load_rejects_bad_toml() {
        let file = write_config("format = \"yaml\"\n");
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn flags_override_file() {
        let file = write_config("format = \"json\"\n");
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "tally", "leaf", "Assets:Cash", "--config", path, "--format", "text", "--strict",
        ])
        .unwrap();
        let c = CliConfig::resolve(&cli).unwrap();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(c.strict);
    }
}
