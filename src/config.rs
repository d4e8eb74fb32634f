// Configuration for pdfvocab - optional TOML file, CLI flags win
use crate::page_range::{ParsePolicy, RangeParser};
use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PDFVOCAB_CONFIG";
pub const LOCAL_CONFIG: &str = "pdfvocab.toml";
pub const DEFAULT_SPLIT_DIR: &str = "./split_pages";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where `split` writes page files when `--output-dir` is not given
    pub split_dir: PathBuf,
    /// Reject malformed page tokens instead of dropping them
    pub strict_ranges: bool,
    pub pretty_json: bool,
    /// Vocabulary pattern used when `--pattern` is not given
    pub pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_dir: PathBuf::from(DEFAULT_SPLIT_DIR),
            strict_ranges: false,
            pretty_json: true,
            pattern: None,
        }
    }
}

impl Config {
    /// First config file found: `$PDFVOCAB_CONFIG`, `./pdfvocab.toml`,
    /// then `<config dir>/pdfvocab/config.toml`. Defaults if none exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn range_parser(&self, strict_flag: bool) -> RangeParser {
        if strict_flag || self.strict_ranges {
            RangeParser::new(ParsePolicy::Strict)
        } else {
            RangeParser::new(ParsePolicy::Permissive)
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("pdfvocab").join("config.toml"))
        .filter(|path| path.is_file())
}
