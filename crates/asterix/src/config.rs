//! Per-category active-edition selection, chosen once by the caller
//! before any decoding happens (spec §3 "Global state", §4.6
//! registration).

use std::collections::HashMap;

use crate::error::ConfigError;

/// Categories this crate implements a decoder for, and the highest
/// edition ordinal each one supports. Ordinal 0 means "only one edition
/// is implemented"; categories with documented edition-dependent bit
/// layouts (023, 062) support ordinal 1 as well.
pub fn max_edition(category: u8) -> Option<u8> {
    match category {
        10 => Some(0),
        11 => Some(0),
        20 => Some(0),
        21 => Some(0),
        23 => Some(1), // edition 1 (ordinal 0) and edition 4 (ordinal 1)
        31 => Some(0),
        34 => Some(0),
        48 => Some(0),
        62 => Some(1), // 12-bit vs. 16-bit track-number width
        247 => Some(0),
        _ => None,
    }
}

/// Per-category edition ordinal selected once at startup. Read-only for
/// the rest of the run (spec: "UAP and descriptor tables are
/// initialised once for the run").
#[derive(Debug, Clone)]
pub struct EditionConfig {
    editions: HashMap<u8, u8>,
}

impl EditionConfig {
    /// Build a configuration where every implemented category defaults
    /// to its latest edition.
    pub fn latest() -> Self {
        EditionConfig {
            editions: HashMap::new(),
        }
    }

    /// Override one category's active edition ordinal.
    pub fn set_edition(&mut self, category: u8, ordinal: u8) -> Result<(), ConfigError> {
        let max = max_edition(category).ok_or(ConfigError::UnknownCategory(category))?;
        if ordinal > max {
            return Err(ConfigError::UnsupportedEdition {
                category,
                edition: ordinal.to_string(),
            });
        }
        self.editions.insert(category, ordinal);
        Ok(())
    }

    /// The active edition ordinal for a category: explicit override if
    /// set, otherwise the latest implemented edition, otherwise 0.
    pub fn edition_of(&self, category: u8) -> u8 {
        self.editions
            .get(&category)
            .copied()
            .unwrap_or_else(|| max_edition(category).unwrap_or(0))
    }
}

impl Default for EditionConfig {
    fn default() -> Self {
        EditionConfig::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_latest_edition() {
        let cfg = EditionConfig::latest();
        assert_eq!(cfg.edition_of(23), 1);
        assert_eq!(cfg.edition_of(48), 0);
    }

    #[test]
    fn rejects_unknown_category() {
        let mut cfg = EditionConfig::latest();
        assert!(cfg.set_edition(99, 0).is_err());
    }

    #[test]
    fn rejects_edition_too_high() {
        let mut cfg = EditionConfig::latest();
        assert!(cfg.set_edition(48, 5).is_err());
    }
}
