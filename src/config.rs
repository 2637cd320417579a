use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{TaxProfile, DEFAULT_MONTHLY_SALARY};

/// `~/.config/taxbot/config.toml` (or the platform equivalent). Every key is
/// optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileSection,
    pub session: SessionSection,
    pub report: ReportSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    /// Naira per month, used until the user states a salary in chat.
    pub monthly_salary: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Start each session with the September 2025 demo records.
    pub sample_records: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Where PDF reports and CSV exports go. Unset: the download directory.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// `tracing` filter directive; `TAXBOT_LOG` takes precedence.
    pub level: String,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            monthly_salary: DEFAULT_MONTHLY_SALARY,
        }
    }
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            sample_records: true,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn profile(&self) -> TaxProfile {
        TaxProfile::new(self.profile.monthly_salary)
    }

    pub fn report_dir(&self) -> PathBuf {
        if let Some(dir) = &self.report.output_dir {
            return PathBuf::from(crate::run::shellexpand(&dir.to_string_lossy()));
        }
        directories::UserDirs::new()
            .and_then(|d| {
                d.download_dir()
                    .map(Path::to_path_buf)
                    .or_else(|| Some(d.home_dir().to_path_buf()))
            })
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "taxbot", "TaxBot")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Data directory, created on first use. Holds the TUI log file.
pub fn data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&s).with_context(|| format!("in {}", path.display()))
}

pub fn save_to(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write a default config at `path` unless one is already there.
/// Returns whether a file was written.
pub fn init_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_to(path, &Config::default())?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(true)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if init_at(&p)? {
        println!("Wrote {}", p.display());
    } else {
        println!("Config already exists: {}", p.display());
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
