use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::FinanceError;

const APP_DIR: &str = "finance_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Preferences honored by the CLI driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Disables colored output.
    pub plain_output: bool,
    /// How many months ahead the driver projects net worth.
    pub projection_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plain_output: false,
            projection_months: 12,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the config file under the platform configuration directory.
    pub fn new() -> Result<Self, FinanceError> {
        let base = dirs::config_dir().ok_or_else(|| {
            FinanceError::InvalidRef("platform configuration directory unavailable".into())
        })?;
        Self::with_base_dir(base.join(APP_DIR))
    }

    /// Uses an explicit base directory, mainly for tests.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, FinanceError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored config, falling back to defaults when no file
    /// exists yet.
    pub fn load(&self) -> Result<Config, FinanceError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Persists the config with a tmp-then-rename write.
    pub fn save(&self, config: &Config) -> Result<(), FinanceError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> Result<(), FinanceError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), FinanceError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_project_one_year_ahead() {
        let config = Config::default();
        assert!(!config.plain_output);
        assert_eq!(config.projection_months, 12);
    }
}
