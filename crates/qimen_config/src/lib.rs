//! Board defaults and deity tables loaded from TOML.
//!
//! ```toml
//! [board]
//! style = "flying"   # "rotary" | "flying" (aliases "zhuan" | "fei")
//! dun = "yin"
//! method = 9
//!
//! [deities]
//! flying_variant = "ten"   # "nine" | "ten"
//! # Optional custom orderings, by glyph or pinyin name:
//! # rotary = ["值符", "腾蛇", "太阴", "六合", "白虎", "玄武", "九地", "九天"]
//! # flying = ["Zhifu", "Tengshe", ...]
//! ```
//!
//! Every section and key is optional; missing values take the defaults of
//! [`QimenConfig::default`].

use std::path::{Path, PathBuf};

use qimen_base::{
    BoardRequest, BoardStyle, Branch, Deity, DeityTable, DunType, FlyingDeityVariant, QimenError,
    Stem,
};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the config file read by [`QimenConfig::load`].
pub const CONFIG_ENV: &str = "QIMEN_CONFIG";

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Engine(#[from] QimenError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QimenConfig {
    pub board: BoardDefaults,
    pub deities: DeityConfig,
}

/// `[board]`: defaults for requests that leave fields unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardDefaults {
    pub style: BoardStyle,
    pub dun: DunType,
    pub method: u8,
}

impl Default for BoardDefaults {
    fn default() -> Self {
        Self {
            style: BoardStyle::Rotary,
            dun: DunType::Yang,
            method: 1,
        }
    }
}

impl BoardDefaults {
    /// A validated request for one hour using these defaults.
    pub fn request(
        &self,
        time_stem: Stem,
        time_branch: Branch,
    ) -> Result<BoardRequest, QimenError> {
        BoardRequest::new(self.style, self.dun, self.method, time_stem, time_branch)
    }
}

/// `[deities]`: which deity orderings the deity layer uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeityConfig {
    pub flying_variant: FlyingDeityVariant,
    /// Custom rotary ordering; overrides the built-in one.
    pub rotary: Option<Vec<String>>,
    /// Custom flying ordering; overrides `flying_variant`.
    pub flying: Option<Vec<String>>,
}

impl QimenConfig {
    /// Load from the file named by [`CONFIG_ENV`], or defaults when it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(path.as_deref())
    }

    /// Load from `path` if given, otherwise defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                tracing::debug!("no config file given; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: QimenConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=9).contains(&self.board.method) {
            return Err(ConfigError::Invalid(format!(
                "board.method must be in 1..=9, got {}",
                self.board.method
            )));
        }
        self.deity_table()?;
        Ok(())
    }

    /// Deity table described by `[deities]`.
    pub fn deity_table(&self) -> Result<DeityTable, ConfigError> {
        let base = DeityTable::with_flying_variant(self.deities.flying_variant);
        if self.deities.rotary.is_none() && self.deities.flying.is_none() {
            return Ok(base);
        }

        let rotary = match &self.deities.rotary {
            Some(labels) => parse_deities(labels)?,
            None => base.rotary().to_vec(),
        };
        let flying = match &self.deities.flying {
            Some(labels) => parse_deities(labels)?,
            None => base.flying().to_vec(),
        };
        Ok(DeityTable::new(&rotary, &flying)?)
    }
}

fn parse_deities(labels: &[String]) -> Result<Vec<Deity>, QimenError> {
    labels.iter().map(|l| l.parse::<Deity>()).collect()
}
