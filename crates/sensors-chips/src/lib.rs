//! Register catalog for hardware monitoring chips.
//!
//! This crate has **no hardware access**. It is a static table of which
//! sensor features (voltages, fans, temperatures, VID, alarms, beep
//! configuration) each supported chip exposes, the register ID an external
//! bus layer uses to address each one, and whether that register may be
//! written.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`catalog`] | [`Catalog`] lookups and [`ChipModel`] |
//! | [`feature`] | [`Feature`] entries and [`AccessMode`] |
//! | `chips` | Per-chip register tables |
//!
//! # Supported chips
//!
//! | Prefix | Chip |
//! |--------|------|
//! | `lm78` | National Semiconductor LM78 |
//! | `lm78-j` | LM78-J (LM78 layout) |
//! | `lm79` | LM79 (LM78 layout, read-only IN4..IN6 high limits) |
//! | `lm75` | LM75 temperature sensor |
//! | `adm1021` | Analog Devices ADM1021 (local + remote temperature) |
//! | `gl518sm-r00` | Genesys Logic GL518SM revision 0x00 |
//! | `gl518sm-r80` | Genesys Logic GL518SM revision 0x80 |
//! | `lm80` | National Semiconductor LM80 |
//! | `w83781d` | Winbond W83781D |
//! | `adm9240` | Analog Devices ADM9240 |
//!
//! # Example
//!
//! ```
//! use sensors_chips::{AccessMode, Catalog, ChipError};
//!
//! let catalog = Catalog::global();
//! assert_eq!(catalog.lookup("adm9240", "ANALOG_OUT")?, (82, AccessMode::ReadWrite));
//! assert!(matches!(
//!     catalog.lookup("lm78", "REMOTE_TEMP"),
//!     Err(ChipError::UnknownFeature { .. })
//! ));
//! # Ok::<(), ChipError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod chips;
mod error;
pub mod feature;

pub use catalog::{Catalog, ChipModel, Violation};
pub use error::{ChipError, Result};
pub use feature::{AccessMode, Feature};

/// Commonly used types.
pub mod prelude {
    pub use crate::{AccessMode, Catalog, ChipError, ChipModel, Feature, Result};
}
