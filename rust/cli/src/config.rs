use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io_utils::read_text;

pub const CONFIG_ENV: &str = "SEOTDA_CONFIG";
pub const SEED_ENV: &str = "SEOTDA_SEED";
pub const PACE_ENV: &str = "SEOTDA_PACE";
pub const OPPONENT_ENV: &str = "SEOTDA_OPPONENT";

const OPPONENTS: &[&str] = &["heuristic", "default", "passive"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    /// Multiplier on the default step delays; 0 plays without pauses
    pub pace: f64,
    pub opponent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            pace: 1.0,
            opponent: "heuristic".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub pace: ValueSource,
    pub opponent: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            pace: ValueSource::Default,
            opponent: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags, which win over every other layer.
    pub fn with_flags(
        mut self,
        seed: Option<u64>,
        pace: Option<f64>,
        opponent: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(v) = pace {
            self.config.pace = v;
            self.sources.pace = ValueSource::Cli;
        }
        if let Some(v) = opponent {
            self.config.opponent = v;
            self.sources.opponent = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "cannot read config file: {}", msg),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Defaults, then the TOML file named by `SEOTDA_CONFIG`, then the
/// `SEOTDA_*` variables. Empty variables are ignored.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = read_text(&path).map_err(ConfigError::Io)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.pace {
            cfg.pace = v;
            sources.pace = ValueSource::File;
        }
        if let Some(v) = f.opponent {
            cfg.opponent = v;
            sources.opponent = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(pace) = std::env::var(PACE_ENV)
        && !pace.is_empty()
    {
        cfg.pace = pace
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid pace: {pace}")))?;
        sources.pace = ValueSource::Env;
    }
    if let Ok(opponent) = std::env::var(OPPONENT_ENV)
        && !opponent.is_empty()
    {
        cfg.opponent = opponent;
        sources.opponent = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    pace: Option<f64>,
    #[serde(default)]
    opponent: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !cfg.pace.is_finite() || cfg.pace < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "pace must be a finite number >= 0, got {}",
            cfg.pace
        )));
    }
    if !OPPONENTS.contains(&cfg.opponent.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown opponent '{}' (expected one of: {})",
            cfg.opponent,
            OPPONENTS.join(", ")
        )));
    }
    Ok(())
}
