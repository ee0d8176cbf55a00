use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SimpverError};
use crate::labels::DEFAULT_MAJOR_LABEL;
use crate::tag::{TagSelection, DEFAULT_INITIAL_TAG};

/// Environment variable holding the `owner/name` repository identifier.
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
/// Environment variable holding the API access token.
pub const TOKEN_VAR: &str = "GH_ACCESS_TOKEN";
/// Optional environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Variables that must be present before anything touches the network.
pub const REQUIRED_ENV: [&str; 2] = [REPOSITORY_VAR, TOKEN_VAR];

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_ARTIFACT: &str = ".version";

/// Tunables read from an optional `simpver.toml`.
///
/// Every key has a default, so an empty or missing file behaves like the
/// plain label-driven bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_initial_tag")]
    pub initial_tag: String,

    #[serde(default = "default_major_label")]
    pub major_label: String,

    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,

    #[serde(default)]
    pub selection: TagSelection,
}

fn default_initial_tag() -> String {
    DEFAULT_INITIAL_TAG.to_string()
}

fn default_major_label() -> String {
    DEFAULT_MAJOR_LABEL.to_string()
}

fn default_artifact() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_tag: default_initial_tag(),
            major_label: default_major_label(),
            artifact: default_artifact(),
            selection: TagSelection::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `simpver.toml` in current directory
/// 3. `.simpver.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let (path, config_str) = if let Some(path) = config_path {
        (PathBuf::from(path), fs::read_to_string(path)?)
    } else if Path::new("./simpver.toml").exists() {
        (
            PathBuf::from("./simpver.toml"),
            fs::read_to_string("./simpver.toml")?,
        )
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".simpver.toml");
        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            (config_path, contents)
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| {
        SimpverError::config(format!("Invalid config file {}: {}", path.display(), e))
    })
}

/// Fails with a configuration error naming the first variable `lookup` lacks.
pub fn verify_env<F>(names: &[&str], lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    match names.iter().find(|name| lookup(name).is_none()) {
        Some(missing) => Err(SimpverError::config(format!(
            "Missing environment variable: {}",
            missing
        ))),
        None => Ok(()),
    }
}

/// A repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(RepoSlug {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(SimpverError::config(format!(
                "{} must be in owner/name form, got '{}'",
                REPOSITORY_VAR, value
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Connection settings taken from the environment once at startup.
#[derive(Clone)]
pub struct Environment {
    pub repository: RepoSlug,
    pub token: String,
    pub api_url: String,
}

impl Environment {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        verify_env(&REQUIRED_ENV, &lookup)?;

        let repository = RepoSlug::parse(&lookup(REPOSITORY_VAR).unwrap_or_default())?;
        let token = lookup(TOKEN_VAR).unwrap_or_default();
        let api_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Environment {
            repository,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("repository", &self.repository)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
