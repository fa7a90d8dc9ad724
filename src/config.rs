//! Run configuration: merge flags, environment, and an optional config file.
//!
//! Precedence is flag/env (clap merges those) over the JSON config file over
//! built-in defaults. All validation happens here, before any output is
//! written.
use crate::cli::Cli;
use crate::select::SelectionParams;
use crate::sources::parse_source_list;
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_SEED: u64 = 42;

/// On-disk config file shape; every field is optional except the schema version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub wake_phrase: Option<String>,
    #[serde(default)]
    pub positive_sources: Vec<String>,
    #[serde(default)]
    pub negative_sources: Vec<String>,
    #[serde(default)]
    pub max_positives: Option<usize>,
    #[serde(default)]
    pub max_negatives: Option<usize>,
    #[serde(default)]
    pub min_per_source: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Fully validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub wake_phrase: String,
    pub positive_sources: Vec<String>,
    pub negative_sources: Vec<String>,
    pub max_positives: Option<usize>,
    pub max_negatives: Option<usize>,
    pub min_per_source: usize,
    pub seed: u64,
}

impl Settings {
    pub fn positive_params(&self) -> SelectionParams {
        SelectionParams {
            max_total: self.max_positives,
            min_per_source: self.min_per_source,
        }
    }

    pub fn negative_params(&self) -> SelectionParams {
        SelectionParams {
            max_total: self.max_negatives,
            min_per_source: self.min_per_source,
        }
    }
}

/// Load and schema-check a JSON config file.
pub fn load_config(path: &Path) -> Result<DatasetConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: DatasetConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &DatasetConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported dataset config schema_version {} (expected {CONFIG_SCHEMA_VERSION})",
            config.schema_version
        ));
    }
    Ok(())
}

/// Load the config named on the command line, if any, and merge it with flags.
pub fn settings_from_cli(cli: &Cli) -> Result<Settings> {
    let config = cli.config.as_deref().map(load_config).transpose()?;
    resolve_settings(cli, config.as_ref())
}

/// Merge flags over the config file and validate the result.
pub fn resolve_settings(cli: &Cli, config: Option<&DatasetConfig>) -> Result<Settings> {
    let fallback = DatasetConfig::default();
    let config = config.unwrap_or(&fallback);

    let positive_sources = source_list(cli.positive_sources.as_deref(), &config.positive_sources);
    if positive_sources.is_empty() {
        bail!("no positive sources provided");
    }
    let negative_sources = source_list(cli.negative_sources.as_deref(), &config.negative_sources);
    if negative_sources.is_empty() {
        bail!("no negative sources provided");
    }

    let max_positives =
        parse_count(cli.max_positives.as_deref(), "max-positives")?.or(config.max_positives);
    let max_negatives =
        parse_count(cli.max_negatives.as_deref(), "max-negatives")?.or(config.max_negatives);
    let min_per_source = parse_count(cli.min_per_source.as_deref(), "min-per-source")?
        .or(config.min_per_source)
        .unwrap_or(0);
    let seed = parse_seed(cli.seed.as_deref())?
        .or(config.seed)
        .unwrap_or(DEFAULT_SEED);

    let output_dir = cli
        .output_dir
        .clone()
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| config.output_dir.clone())
        .ok_or_else(|| anyhow!("output-dir is required"))?;
    let wake_phrase = cli
        .wake_phrase
        .clone()
        .or_else(|| config.wake_phrase.clone())
        .ok_or_else(|| anyhow!("wake-phrase is required"))?;

    Ok(Settings {
        output_dir,
        wake_phrase,
        positive_sources,
        negative_sources,
        max_positives,
        max_negatives,
        min_per_source,
        seed,
    })
}

/// A flag or env value that parses to no specifiers counts as unset, so the
/// config file's list applies before the empty-list check.
fn source_list(raw: Option<&str>, configured: &[String]) -> Vec<String> {
    match raw.map(parse_source_list) {
        Some(list) if !list.is_empty() => list,
        _ => configured
            .iter()
            .map(|spec| spec.trim())
            .filter(|spec| !spec.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Parse an optional non-negative count; empty means "not provided".
pub fn parse_count(raw: Option<&str>, label: &str) -> Result<Option<usize>> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<i128>() {
        Ok(value) if value < 0 => bail!("{label} must be >= 0"),
        Ok(value) => usize::try_from(value)
            .map(Some)
            .map_err(|_| anyhow!("{label} is too large")),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => bail!("{label} is too large"),
            IntErrorKind::NegOverflow => bail!("{label} must be >= 0"),
            _ => bail!("{label} must be an integer"),
        },
    }
}

/// Parse an optional seed. Negative seeds keep their two's-complement bits.
pub fn parse_seed(raw: Option<&str>) -> Result<Option<u64>> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    if let Ok(value) = raw.parse::<u64>() {
        return Ok(Some(value));
    }
    raw.parse::<i64>()
        .map(|value| Some(value as u64))
        .map_err(|_| anyhow!("seed must be an integer"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
