//! Sysop-tunable defaults for new accounts.
//!
//! The board's configuration file carries a `[newuser]` table naming the
//! access levels, restriction mask, starting balance, and palettes a fresh
//! sign-up receives. Missing keys fall back to the stock defaults, so an
//! empty table (or no file at all) still yields a usable seed.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::account::factory::NewUserSeed;
use crate::colors::{DEFAULT_COLOR, PALETTE_SLOTS};

fn default_security_level() -> u8 {
    10
}

fn default_download_security_level() -> u8 {
    0
}

fn default_palette() -> Vec<u8> {
    vec![DEFAULT_COLOR; PALETTE_SLOTS]
}

/// The `[newuser]` configuration table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserDefaults {
    #[serde(default = "default_security_level")]
    pub security_level: u8,
    #[serde(default = "default_download_security_level")]
    pub download_security_level: u8,
    #[serde(default)]
    pub restrictions: u16,
    #[serde(default)]
    pub gold: f32,
    #[serde(default = "default_palette")]
    pub ansi_colors: Vec<u8>,
    #[serde(default = "default_palette")]
    pub mono_colors: Vec<u8>,
}

impl Default for NewUserDefaults {
    fn default() -> Self {
        NewUserDefaults {
            security_level: default_security_level(),
            download_security_level: default_download_security_level(),
            restrictions: 0,
            gold: 0.0,
            ansi_colors: default_palette(),
            mono_colors: default_palette(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    newuser: Option<NewUserDefaults>,
}

impl NewUserDefaults {
    /// Load the `[newuser]` table from a TOML config file. A file without
    /// the table yields the stock defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read config {}: {}", path.display(), e))?;
        let file: ConfigFile = toml::from_str(&raw)
            .map_err(|e| anyhow!("failed to parse config {}: {}", path.display(), e))?;
        Ok(file.newuser.unwrap_or_default())
    }

    /// The factory seed these defaults describe.
    pub fn seed(&self) -> NewUserSeed {
        NewUserSeed {
            security_level: self.security_level,
            download_security_level: self.download_security_level,
            restrictions: self.restrictions,
            gold: self.gold,
            ansi_colors: self.ansi_colors.clone(),
            mono_colors: self.mono_colors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back() {
        let defaults: NewUserDefaults = toml::from_str("security_level = 30").unwrap();
        assert_eq!(defaults.security_level, 30);
        assert_eq!(defaults.download_security_level, 0);
        assert_eq!(defaults.ansi_colors, vec![DEFAULT_COLOR; PALETTE_SLOTS]);
    }

    #[test]
    fn seed_mirrors_the_table() {
        let defaults = NewUserDefaults {
            restrictions: 0x0421,
            gold: 2.5,
            ..NewUserDefaults::default()
        };
        let seed = defaults.seed();
        assert_eq!(seed.restrictions, 0x0421);
        assert_eq!(seed.gold, 2.5);
    }
}
