//! Catalog lookup tests
//!
//! Checks the public lookup surface against known register assignments.

use sensors_chips::{AccessMode, Catalog, ChipError};
use std::collections::HashSet;

#[test]
fn test_known_register_ids() {
    let catalog = Catalog::global();

    assert_eq!(catalog.lookup("lm78", "IN0"), Ok((1, AccessMode::ReadOnly)));
    assert_eq!(catalog.lookup("lm78", "IN0_MIN"), Ok((11, AccessMode::ReadWrite)));
    assert_eq!(
        catalog.lookup("w83781d", "TEMP3_OVER"),
        Ok((59, AccessMode::ReadWrite))
    );
    assert_eq!(
        catalog.lookup("adm9240", "ANALOG_OUT"),
        Ok((82, AccessMode::ReadWrite))
    );
    assert_eq!(catalog.lookup("lm75", "TEMP"), Ok((51, AccessMode::ReadOnly)));
    assert_eq!(
        catalog.lookup("lm80", "TEMP_OS_MAX"),
        Ok((55, AccessMode::ReadWrite))
    );
}

#[test]
fn test_unknown_feature() {
    let err = Catalog::global().lookup("lm78", "NONEXISTENT").unwrap_err();
    assert_eq!(
        err,
        ChipError::UnknownFeature {
            prefix: "lm78".into(),
            feature: "NONEXISTENT".into(),
        }
    );
}

#[test]
fn test_unknown_chip() {
    let err = Catalog::global().lookup("not-a-chip", "IN0").unwrap_err();
    assert_eq!(
        err,
        ChipError::UnknownChip {
            prefix: "not-a-chip".into(),
        }
    );
    assert!(matches!(
        Catalog::global().features_of("not-a-chip"),
        Err(ChipError::UnknownChip { .. })
    ));
}

#[test]
fn test_prefixes_are_case_sensitive_opaque_keys() {
    let catalog = Catalog::global();
    assert!(matches!(
        catalog.lookup("LM78", "IN0"),
        Err(ChipError::UnknownChip { .. })
    ));
    assert!(matches!(
        catalog.lookup("gl518sm", "VDD"),
        Err(ChipError::UnknownChip { .. })
    ));
    assert_eq!(
        catalog.lookup("gl518sm-r00", "VDD"),
        Ok((1, AccessMode::NoAccess))
    );
    assert_eq!(
        catalog.lookup("gl518sm-r80", "VDD"),
        Ok((1, AccessMode::ReadOnly))
    );
}

#[test]
fn test_lookup_is_idempotent() {
    let catalog = Catalog::global();
    let first = catalog.lookup("w83781d", "FAN3_DIV");
    for _ in 0..10 {
        assert_eq!(catalog.lookup("w83781d", "FAN3_DIV"), first);
    }
    let miss = catalog.lookup("lm75", "FAN1");
    assert_eq!(catalog.lookup("lm75", "FAN1"), miss);
}

#[test]
fn test_ids_and_names_unique_per_chip() {
    for chip in Catalog::global().chips() {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for f in chip.features() {
            assert!(ids.insert(f.id()), "{}: ID {} reused", chip.prefix(), f.id());
            assert!(
                names.insert(f.name()),
                "{}: name {} reused",
                chip.prefix(),
                f.name()
            );
        }
    }
}

#[test]
fn test_prefixes_in_declaration_order() {
    let prefixes: Vec<_> = Catalog::global().prefixes_of().collect();
    assert_eq!(
        prefixes,
        [
            "lm78",
            "lm78-j",
            "lm79",
            "lm75",
            "adm1021",
            "gl518sm-r00",
            "gl518sm-r80",
            "lm80",
            "w83781d",
            "adm9240",
        ]
    );
}

#[test]
fn test_gl518sm_r00_features() {
    use AccessMode::{NoAccess, ReadOnly, ReadWrite};

    let expected = [
        ("VDD", 1, NoAccess),
        ("VIN1", 2, NoAccess),
        ("VIN2", 3, NoAccess),
        ("VIN3", 4, ReadOnly),
        ("VDD_MIN", 11, ReadWrite),
        ("VIN1_MIN", 12, ReadWrite),
        ("VIN2_MIN", 13, ReadWrite),
        ("VIN3_MIN", 14, ReadWrite),
        ("VDD_MAX", 21, ReadWrite),
        ("VIN1_MAX", 22, ReadWrite),
        ("VIN2_MAX", 23, ReadWrite),
        ("VIN3_MAX", 24, ReadWrite),
        ("FAN1", 31, ReadOnly),
        ("FAN2", 32, ReadOnly),
        ("FAN1_MIN", 41, ReadWrite),
        ("FAN2_MIN", 42, ReadWrite),
        ("TEMP", 51, ReadOnly),
        ("TEMP_HYST", 52, ReadWrite),
        ("TEMP_OVER", 53, ReadWrite),
        ("VID", 61, ReadOnly),
        ("FAN1_DIV", 71, ReadWrite),
        ("FAN2_DIV", 72, ReadWrite),
        ("ALARMS", 81, ReadOnly),
        ("BEEP_ENABLE", 82, ReadWrite),
        ("BEEPS", 83, ReadWrite),
    ];

    let features = Catalog::global().features_of("gl518sm-r00").unwrap();
    let actual: Vec<_> = features
        .clone()
        .map(|f| (f.name(), f.id(), f.access()))
        .collect();
    assert_eq!(actual, expected);

    // Restartable: a second pass yields the same sequence.
    assert_eq!(features.count(), expected.len());
}

#[test]
fn test_lm79_high_limits_read_only() {
    let catalog = Catalog::global();
    for name in ["IN4_MAX", "IN5_MAX", "IN6_MAX"] {
        let (_, lm78) = catalog.lookup("lm78", name).unwrap();
        let (_, lm79) = catalog.lookup("lm79", name).unwrap();
        assert_eq!(lm78, AccessMode::ReadWrite, "lm78 {name}");
        assert_eq!(lm79, AccessMode::ReadOnly, "lm79 {name}");
    }
}

#[test]
fn test_fan3_divisor_read_only() {
    let catalog = Catalog::global();
    for prefix in ["lm78", "lm78-j", "lm79", "w83781d"] {
        assert_eq!(
            catalog.lookup(prefix, "FAN3_DIV"),
            Ok((73, AccessMode::ReadOnly)),
            "{prefix}"
        );
    }
}

#[test]
fn test_feature_by_id_inverts_feature() {
    for chip in Catalog::global().chips() {
        for f in chip.features() {
            assert_eq!(chip.feature_by_id(f.id()), Some(f));
            assert_eq!(chip.feature(f.name()), Some(f));
        }
    }
}

#[test]
fn test_compatible_chips_exist() {
    let catalog = Catalog::global();
    for chip in catalog.chips() {
        if let Some(target) = chip.compatible_with() {
            assert!(catalog.chip(target).is_ok(), "{} -> {target}", chip.prefix());
        }
    }
    assert!(catalog.violations().is_empty());
}

#[test]
fn test_catalog_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| Catalog::global().lookup("lm78", "VID")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Ok((61, AccessMode::ReadOnly)));
    }
}
