//! Register tables for every supported chip.
//!
//! Register IDs are arbitrary per chip; they only need to be unique within
//! one chip. Similar features were given similar numbers where possible
//! (inputs 1.., minimums 11.., maximums 21.., fans 31.., temperatures 51..,
//! VID 61, divisors 71.., alarms 81..), but nothing relies on that.
//!
//! Each chip declares its own table even where it matches another chip's
//! layout. The LM79 is the reason: IN4_MAX..IN6_MAX are read-only there.

use crate::catalog::ChipModel;
use crate::feature::Feature;

// ── National Semiconductor LM78 ──────────────────────────────────────────────

const LM78: &[Feature] = &[
    Feature::ro("IN0", 1),
    Feature::ro("IN1", 2),
    Feature::ro("IN2", 3),
    Feature::ro("IN3", 4),
    Feature::ro("IN4", 5),
    Feature::ro("IN5", 6),
    Feature::ro("IN6", 7),
    Feature::rw("IN0_MIN", 11),
    Feature::rw("IN1_MIN", 12),
    Feature::rw("IN2_MIN", 13),
    Feature::rw("IN3_MIN", 14),
    Feature::rw("IN4_MIN", 15),
    Feature::rw("IN5_MIN", 16),
    Feature::rw("IN6_MIN", 17),
    Feature::rw("IN0_MAX", 21),
    Feature::rw("IN1_MAX", 22),
    Feature::rw("IN2_MAX", 23),
    Feature::rw("IN3_MAX", 24),
    Feature::rw("IN4_MAX", 25),
    Feature::rw("IN5_MAX", 26),
    Feature::rw("IN6_MAX", 27),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::ro("FAN3", 33),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::rw("FAN3_MIN", 43),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("FAN3_DIV", 73), // yes, really
    Feature::ro("ALARMS", 81),
];

// ── LM78-J ───────────────────────────────────────────────────────────────────
// Same layout as the LM78.

const LM78J: &[Feature] = &[
    Feature::ro("IN0", 1),
    Feature::ro("IN1", 2),
    Feature::ro("IN2", 3),
    Feature::ro("IN3", 4),
    Feature::ro("IN4", 5),
    Feature::ro("IN5", 6),
    Feature::ro("IN6", 7),
    Feature::rw("IN0_MIN", 11),
    Feature::rw("IN1_MIN", 12),
    Feature::rw("IN2_MIN", 13),
    Feature::rw("IN3_MIN", 14),
    Feature::rw("IN4_MIN", 15),
    Feature::rw("IN5_MIN", 16),
    Feature::rw("IN6_MIN", 17),
    Feature::rw("IN0_MAX", 21),
    Feature::rw("IN1_MAX", 22),
    Feature::rw("IN2_MAX", 23),
    Feature::rw("IN3_MAX", 24),
    Feature::rw("IN4_MAX", 25),
    Feature::rw("IN5_MAX", 26),
    Feature::rw("IN6_MAX", 27),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::ro("FAN3", 33),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::rw("FAN3_MIN", 43),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("FAN3_DIV", 73),
    Feature::ro("ALARMS", 81),
];

// ── LM79 ─────────────────────────────────────────────────────────────────────
// LM78 layout, except IN4_MAX..IN6_MAX are read-only.

const LM79: &[Feature] = &[
    Feature::ro("IN0", 1),
    Feature::ro("IN1", 2),
    Feature::ro("IN2", 3),
    Feature::ro("IN3", 4),
    Feature::ro("IN4", 5),
    Feature::ro("IN5", 6),
    Feature::ro("IN6", 7),
    Feature::rw("IN0_MIN", 11),
    Feature::rw("IN1_MIN", 12),
    Feature::rw("IN2_MIN", 13),
    Feature::rw("IN3_MIN", 14),
    Feature::rw("IN4_MIN", 15),
    Feature::rw("IN5_MIN", 16),
    Feature::rw("IN6_MIN", 17),
    Feature::rw("IN0_MAX", 21),
    Feature::rw("IN1_MAX", 22),
    Feature::rw("IN2_MAX", 23),
    Feature::rw("IN3_MAX", 24),
    Feature::ro("IN4_MAX", 25),
    Feature::ro("IN5_MAX", 26),
    Feature::ro("IN6_MAX", 27),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::ro("FAN3", 33),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::rw("FAN3_MIN", 43),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("FAN3_DIV", 73),
    Feature::ro("ALARMS", 81),
];

// ── LM75 ─────────────────────────────────────────────────────────────────────

const LM75: &[Feature] = &[
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
];

// ── Analog Devices ADM1021 ───────────────────────────────────────────────────

const ADM1021: &[Feature] = &[
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("REMOTE_TEMP", 54),
    Feature::rw("REMOTE_TEMP_HYST", 55),
    Feature::rw("REMOTE_TEMP_OVER", 56),
    Feature::ro("STATUS", 81),
];

// ── Genesys Logic GL518SM revision 0x00 ──────────────────────────────────────
// Only VIN3 can be read; VDD, VIN1 and VIN2 have no access on this revision.

const GL518_R00: &[Feature] = &[
    Feature::no_access("VDD", 1),
    Feature::no_access("VIN1", 2),
    Feature::no_access("VIN2", 3),
    Feature::ro("VIN3", 4),
    Feature::rw("VDD_MIN", 11),
    Feature::rw("VIN1_MIN", 12),
    Feature::rw("VIN2_MIN", 13),
    Feature::rw("VIN3_MIN", 14),
    Feature::rw("VDD_MAX", 21),
    Feature::rw("VIN1_MAX", 22),
    Feature::rw("VIN2_MAX", 23),
    Feature::rw("VIN3_MAX", 24),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("ALARMS", 81),
    Feature::rw("BEEP_ENABLE", 82),
    Feature::rw("BEEPS", 83),
];

// ── Genesys Logic GL518SM revision 0x80 ──────────────────────────────────────

const GL518_R80: &[Feature] = &[
    Feature::ro("VDD", 1),
    Feature::ro("VIN1", 2),
    Feature::ro("VIN2", 3),
    Feature::ro("VIN3", 4),
    Feature::rw("VDD_MIN", 11),
    Feature::rw("VIN1_MIN", 12),
    Feature::rw("VIN2_MIN", 13),
    Feature::rw("VIN3_MIN", 14),
    Feature::rw("VDD_MAX", 21),
    Feature::rw("VIN1_MAX", 22),
    Feature::rw("VIN2_MAX", 23),
    Feature::rw("VIN3_MAX", 24),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("ALARMS", 81),
    Feature::rw("BEEP_ENABLE", 82),
    Feature::rw("BEEPS", 83),
];

// ── National Semiconductor LM80 ──────────────────────────────────────────────
// Two temperature limit pairs (hot and OS) instead of HYST/OVER.

const LM80: &[Feature] = &[
    Feature::ro("IN0", 1),
    Feature::ro("IN1", 2),
    Feature::ro("IN2", 3),
    Feature::ro("IN3", 4),
    Feature::ro("IN4", 5),
    Feature::ro("IN5", 6),
    Feature::ro("IN6", 7),
    Feature::rw("IN0_MIN", 11),
    Feature::rw("IN1_MIN", 12),
    Feature::rw("IN2_MIN", 13),
    Feature::rw("IN3_MIN", 14),
    Feature::rw("IN4_MIN", 15),
    Feature::rw("IN5_MIN", 16),
    Feature::rw("IN6_MIN", 17),
    Feature::rw("IN0_MAX", 21),
    Feature::rw("IN1_MAX", 22),
    Feature::rw("IN2_MAX", 23),
    Feature::rw("IN3_MAX", 24),
    Feature::ro("IN4_MAX", 25),
    Feature::ro("IN5_MAX", 26),
    Feature::ro("IN6_MAX", 27),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HOT_HYST", 52),
    Feature::rw("TEMP_HOT_MAX", 53),
    Feature::rw("TEMP_OS_HYST", 54),
    Feature::rw("TEMP_OS_MAX", 55),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("ALARMS", 81),
];

// ── Winbond W83781D ──────────────────────────────────────────────────────────

const W83781D: &[Feature] = &[
    Feature::ro("IN0", 1),
    Feature::ro("IN1", 2),
    Feature::ro("IN2", 3),
    Feature::ro("IN3", 4),
    Feature::ro("IN4", 5),
    Feature::ro("IN5", 6),
    Feature::ro("IN6", 7),
    Feature::rw("IN0_MIN", 11),
    Feature::rw("IN1_MIN", 12),
    Feature::rw("IN2_MIN", 13),
    Feature::rw("IN3_MIN", 14),
    Feature::rw("IN4_MIN", 15),
    Feature::rw("IN5_MIN", 16),
    Feature::rw("IN6_MIN", 17),
    Feature::rw("IN0_MAX", 21),
    Feature::rw("IN1_MAX", 22),
    Feature::rw("IN2_MAX", 23),
    Feature::rw("IN3_MAX", 24),
    Feature::rw("IN4_MAX", 25),
    Feature::rw("IN5_MAX", 26),
    Feature::rw("IN6_MAX", 27),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::ro("FAN3", 33),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::rw("FAN3_MIN", 43),
    Feature::ro("TEMP1", 51),
    Feature::rw("TEMP1_HYST", 52),
    Feature::rw("TEMP1_OVER", 53),
    Feature::ro("TEMP2", 54),
    Feature::rw("TEMP2_HYST", 55),
    Feature::rw("TEMP2_OVER", 56),
    Feature::ro("TEMP3", 57),
    Feature::rw("TEMP3_HYST", 58),
    Feature::rw("TEMP3_OVER", 59),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("FAN3_DIV", 73),
    Feature::ro("ALARMS", 81),
    Feature::rw("BEEP_ENABLE", 82),
    Feature::rw("BEEPS", 83),
];

// ── Analog Devices ADM9240 ───────────────────────────────────────────────────

const ADM9240: &[Feature] = &[
    Feature::ro("IN0", 1),
    Feature::ro("IN1", 2),
    Feature::ro("IN2", 3),
    Feature::ro("IN3", 4),
    Feature::ro("IN4", 5),
    Feature::ro("IN5", 6),
    Feature::rw("IN0_MIN", 11),
    Feature::rw("IN1_MIN", 12),
    Feature::rw("IN2_MIN", 13),
    Feature::rw("IN3_MIN", 14),
    Feature::rw("IN4_MIN", 15),
    Feature::rw("IN5_MIN", 16),
    Feature::rw("IN0_MAX", 21),
    Feature::rw("IN1_MAX", 22),
    Feature::rw("IN2_MAX", 23),
    Feature::rw("IN3_MAX", 24),
    Feature::rw("IN4_MAX", 25),
    Feature::rw("IN5_MAX", 26),
    Feature::ro("FAN1", 31),
    Feature::ro("FAN2", 32),
    Feature::rw("FAN1_MIN", 41),
    Feature::rw("FAN2_MIN", 42),
    Feature::ro("TEMP", 51),
    Feature::rw("TEMP_HYST", 52),
    Feature::rw("TEMP_OVER", 53),
    Feature::ro("VID", 61),
    Feature::rw("FAN1_DIV", 71),
    Feature::rw("FAN2_DIV", 72),
    Feature::ro("ALARMS", 81),
    Feature::rw("ANALOG_OUT", 82),
];

// ── Catalog order ────────────────────────────────────────────────────────────

/// Every supported chip, in declaration order.
pub(crate) static CHIPS: &[ChipModel] = &[
    ChipModel::new("lm78", "National Semiconductor LM78", None, LM78),
    ChipModel::new("lm78-j", "National Semiconductor LM78-J", Some("lm78"), LM78J),
    ChipModel::new("lm79", "National Semiconductor LM79", Some("lm78"), LM79),
    ChipModel::new("lm75", "National Semiconductor LM75", None, LM75),
    ChipModel::new("adm1021", "Analog Devices ADM1021", None, ADM1021),
    ChipModel::new(
        "gl518sm-r00",
        "Genesys Logic GL518SM revision 0x00",
        Some("gl518sm-r80"),
        GL518_R00,
    ),
    ChipModel::new("gl518sm-r80", "Genesys Logic GL518SM revision 0x80", None, GL518_R80),
    ChipModel::new("lm80", "National Semiconductor LM80", None, LM80),
    ChipModel::new("w83781d", "Winbond W83781D", None, W83781D),
    ChipModel::new("adm9240", "Analog Devices ADM9240", None, ADM9240),
];
