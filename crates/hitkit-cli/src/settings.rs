//! Settings loaded from a TOML file.

use std::fs;
use std::path::Path;

use hitkit_math::Tolerance;
use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

/// Settings for `hitkit check`.
///
/// ```toml
/// [tolerance]
/// parallel = 1e-12
///
/// [check]
/// validate = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ray/plane parallel tolerance.
    pub tolerance: Tolerance,
    /// Batch checking options.
    pub check: CheckSettings,
}

/// Batch checking options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Reject degenerate rays and primitives before checking.
    pub validate: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let settings = Self::from_toml(&text)?;
        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        let parallel = self.tolerance.parallel;
        if !parallel.is_finite() || parallel < 0.0 {
            return Err(CheckError::InvalidSettings(format!(
                "tolerance.parallel must be finite and non-negative, got {}",
                parallel
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::from_toml("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.tolerance, Tolerance::EXACT);
        assert!(s.check.validate);
    }

    #[test]
    fn test_partial_file() {
        let s = Settings::from_toml("[tolerance]\nparallel = 1e-9\n").unwrap();
        assert!((s.tolerance.parallel - 1e-9).abs() < 1e-20);
        assert!(s.check.validate);

        let s = Settings::from_toml("[check]\nvalidate = false\n").unwrap();
        assert_eq!(s.tolerance, Tolerance::EXACT);
        assert!(!s.check.validate);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = Settings::from_toml("[tolerance]\nparallel = -1.0\n").unwrap_err();
        assert!(matches!(err, CheckError::InvalidSettings(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = Settings::from_toml("[tolerance\n").unwrap_err();
        assert!(matches!(err, CheckError::Toml(_)));
    }
}
