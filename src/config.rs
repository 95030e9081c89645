use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

use crate::table::CollisionPolicy;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_NAME: &str = "citysql";

#[derive(Debug, Clone)]
pub struct Config {
    /// File the settings came from, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    /// Target table for every generated statement.
    pub table: String,
    /// Directory for generated scripts when `--output` is not given.
    pub output_dir: PathBuf,
    /// Column type used when adding `name_en`.
    pub name_en_type: String,
    pub collision_policy: CollisionPolicy,
    /// How many translated/missing names the console summary lists.
    pub preview_limit: usize,
    /// Row limit of the spot-check `SELECT`.
    pub select_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            config_path: None,
            table: file.table,
            output_dir: PathBuf::from("."),
            name_en_type: file.name_en_type,
            collision_policy: file.collision_policy,
            preview_limit: file.preview_limit,
            select_limit: file.select_limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ConfigFile {
    table: String,
    output_dir: Option<PathBuf>,
    name_en_type: String,
    collision_policy: CollisionPolicy,
    preview_limit: usize,
    select_limit: usize,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            table: "cities".to_string(),
            output_dir: None,
            name_en_type: "VARCHAR(100)".to_string(),
            collision_policy: CollisionPolicy::default(),
            preview_limit: 10,
            select_limit: 50,
        }
    }
}

impl ConfigFile {
    fn into_config(self, config_path: Option<PathBuf>) -> Result<Config> {
        let table = self.table.trim().to_string();
        if !is_identifier(&table) {
            bail!("`table` must be a plain SQL identifier, got `{}`", table);
        }

        let name_en_type = self.name_en_type.trim().to_string();
        if !is_column_type(&name_en_type) {
            bail!("`name_en_type` is not a valid column type: `{}`", name_en_type);
        }

        if self.select_limit == 0 {
            bail!("`select_limit` must be at least 1");
        }

        let output_dir = self
            .output_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Config {
            config_path,
            table,
            output_dir,
            name_en_type,
            collision_policy: self.collision_policy,
            preview_limit: self.preview_limit,
            select_limit: self.select_limit,
        })
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Loose check for things like `TEXT` or `VARCHAR(100)`.
fn is_column_type(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_alphabetic())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '(' | ')' | ','))
}

/// Expand ~ to home directory in paths
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = home::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

fn config_root() -> Result<PathBuf> {
    let base = BaseDirs::new().context("unable to determine base directories")?;
    Ok(base.config_dir().join(APP_NAME))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_root()?.join(CONFIG_FILE_NAME))
}

/// Load `explicit` if given (it must exist), otherwise the per-user config
/// file, falling back to defaults when that file is absent.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("configuration file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = config_path()?;
            if !path.exists() {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            path
        }
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration file at {}", path.display()))?;
    parse(&raw, &path)
}

pub fn parse(raw: &str, path: &Path) -> Result<Config> {
    let value: toml::Value = toml::from_str(raw)
        .with_context(|| format!("failed to parse {} as TOML", path.display()))?;

    warn_unknown_keys(&value);

    let cfg_file: ConfigFile = value
        .try_into()
        .with_context(|| format!("failed to deserialize config from {}", path.display()))?;

    cfg_file
        .into_config(Some(path.to_path_buf()))
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

fn warn_unknown_keys(value: &toml::Value) {
    let Some(table) = value.as_table() else {
        return;
    };
    let known = HashSet::from([
        "table",
        "output_dir",
        "name_en_type",
        "collision_policy",
        "preview_limit",
        "select_limit",
    ]);
    for key in table.keys() {
        if !known.contains(key.as_str()) {
            tracing::warn!("unknown config entry `{}`", key);
        }
    }
}
