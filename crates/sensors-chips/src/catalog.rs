//! Register catalog
//!
//! Maps a chip prefix to its [`ChipModel`] and a feature name to its
//! register ID and [`AccessMode`].
//!
//! ## Usage
//!
//! ```
//! use sensors_chips::{AccessMode, Catalog};
//!
//! let catalog = Catalog::global();
//!
//! let (id, access) = catalog.lookup("w83781d", "TEMP3_OVER")?;
//! assert_eq!(id, 59);
//! assert_eq!(access, AccessMode::ReadWrite);
//!
//! for feature in catalog.features_of("lm75")? {
//!     println!("{} = {} ({})", feature.name(), feature.id(), feature.access());
//! }
//! # Ok::<(), sensors_chips::ChipError>(())
//! ```
//!
//! Prefixes are matched exactly: no case folding and no parsing, so
//! `gl518sm-r00` and `gl518sm-r80` are unrelated keys.

use crate::chips::CHIPS;
use crate::feature::{AccessMode, Feature};
use crate::{ChipError, Result};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// One supported chip model and its feature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipModel {
    prefix: &'static str,
    description: &'static str,
    compatible_with: Option<&'static str>,
    features: &'static [Feature],
}

impl ChipModel {
    pub(crate) const fn new(
        prefix: &'static str,
        description: &'static str,
        compatible_with: Option<&'static str>,
        features: &'static [Feature],
    ) -> Self {
        Self {
            prefix,
            description,
            compatible_with,
            features,
        }
    }

    /// Catalog key, e.g. `lm78`.
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Human-readable chip name.
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Prefix of a chip whose register IDs are documented as usable for
    /// this one.
    ///
    /// Informational only. Each chip keeps its own table and the access
    /// modes may differ (see `lm79`).
    pub const fn compatible_with(&self) -> Option<&'static str> {
        self.compatible_with
    }

    /// Features in declaration order.
    pub const fn features(&self) -> &'static [Feature] {
        self.features
    }

    /// Number of declared features.
    pub const fn len(&self) -> usize {
        self.features.len()
    }

    /// True if the chip declares no features.
    pub const fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Find a feature by symbolic name.
    pub fn feature(&self, name: &str) -> Option<&'static Feature> {
        self.features.iter().find(|f| f.name() == name)
    }

    /// Find a feature by register ID.
    pub fn feature_by_id(&self, id: u32) -> Option<&'static Feature> {
        self.features.iter().find(|f| f.id() == id)
    }
}

/// A broken catalog invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two chips share a prefix
    DuplicatePrefix {
        /// Repeated prefix
        prefix: &'static str,
    },
    /// Two features of one chip share a name
    DuplicateName {
        /// Owning chip
        prefix: &'static str,
        /// Repeated name
        name: &'static str,
    },
    /// Two features of one chip share a register ID
    DuplicateId {
        /// Owning chip
        prefix: &'static str,
        /// Repeated register ID
        id: u32,
    },
    /// Register IDs start at 1
    ZeroId {
        /// Owning chip
        prefix: &'static str,
        /// Feature declared with ID 0
        name: &'static str,
    },
    /// `compatible_with` names a prefix that is not in the catalog
    DanglingAlias {
        /// Chip carrying the alias note
        prefix: &'static str,
        /// Missing target prefix
        target: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePrefix { prefix } => write!(f, "{prefix}: prefix declared twice"),
            Self::DuplicateName { prefix, name } => {
                write!(f, "{prefix}: feature {name} declared twice")
            }
            Self::DuplicateId { prefix, id } => write!(f, "{prefix}: register ID {id} reused"),
            Self::ZeroId { prefix, name } => write!(f, "{prefix}: feature {name} has ID 0"),
            Self::DanglingAlias { prefix, target } => {
                write!(f, "{prefix}: compatible chip {target} is not in the catalog")
            }
        }
    }
}

/// Immutable catalog of chip models.
///
/// The catalog is compiled in; [`Catalog::global`] hands out the single
/// process-wide instance, which is safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    chips: &'static [ChipModel],
}

static GLOBAL: Catalog = Catalog { chips: CHIPS };

impl Catalog {
    /// The built-in catalog.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Resolve a chip by prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ChipError::UnknownChip`] if no chip uses this prefix.
    pub fn chip(&self, prefix: &str) -> Result<&'static ChipModel> {
        self.chips
            .iter()
            .find(|c| c.prefix() == prefix)
            .ok_or_else(|| {
                debug!("Unknown chip prefix {prefix:?}");
                ChipError::unknown_chip(prefix)
            })
    }

    /// Register ID and access mode of `feature` on chip `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ChipError::UnknownChip`] if the prefix is not in the
    /// catalog, or [`ChipError::UnknownFeature`] if the chip does not
    /// declare the feature.
    pub fn lookup(&self, prefix: &str, feature: &str) -> Result<(u32, AccessMode)> {
        let chip = self.chip(prefix)?;
        let found = chip.feature(feature).ok_or_else(|| {
            debug!("Chip {prefix:?} has no feature {feature:?}");
            ChipError::unknown_feature(prefix, feature)
        })?;
        Ok((found.id(), found.access()))
    }

    /// Features of chip `prefix` in declaration order.
    ///
    /// The iterator is `Clone`, so it can be restarted.
    ///
    /// # Errors
    ///
    /// Returns [`ChipError::UnknownChip`] if the prefix is not in the catalog.
    pub fn features_of(
        &self,
        prefix: &str,
    ) -> Result<impl Iterator<Item = &'static Feature> + Clone> {
        Ok(self.chip(prefix)?.features().iter())
    }

    /// All chip prefixes in declaration order.
    pub fn prefixes_of(&self) -> impl Iterator<Item = &'static str> + Clone {
        self.chips.iter().map(ChipModel::prefix)
    }

    /// All chip models in declaration order.
    pub fn chips(&self) -> impl Iterator<Item = &'static ChipModel> + Clone {
        self.chips.iter()
    }

    /// Number of chip models.
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// True if the catalog holds no chips.
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Check the catalog invariants and report every violation found.
    ///
    /// Lookups do not depend on this; it exists for tests and the
    /// `check` command.
    pub fn violations(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        let mut prefixes = HashSet::new();

        for chip in self.chips {
            let prefix = chip.prefix();
            if !prefixes.insert(prefix) {
                found.push(Violation::DuplicatePrefix { prefix });
            }

            let mut names = HashSet::new();
            let mut ids = HashSet::new();
            for feature in chip.features() {
                if !names.insert(feature.name()) {
                    found.push(Violation::DuplicateName {
                        prefix,
                        name: feature.name(),
                    });
                }
                if !ids.insert(feature.id()) {
                    found.push(Violation::DuplicateId {
                        prefix,
                        id: feature.id(),
                    });
                }
                if feature.id() == 0 {
                    found.push(Violation::ZeroId {
                        prefix,
                        name: feature.name(),
                    });
                }
            }
        }

        for chip in self.chips {
            if let Some(target) = chip.compatible_with() {
                if !self.chips.iter().any(|c| c.prefix() == target) {
                    found.push(Violation::DanglingAlias {
                        prefix: chip.prefix(),
                        target,
                    });
                }
            }
        }

        for v in &found {
            warn!("Catalog violation: {v}");
        }
        found
    }
}
