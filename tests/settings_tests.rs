//! Settings Tests
//!
//! Tests for:
//! - Defaults
//! - Partial JSON overrides
//! - Validation failures

use drape::errors::DrapeError;
use drape::settings::PreviewSettings;

#[test]
fn defaults_match_shipped_values() {
    let s = PreviewSettings::default();
    assert_eq!(s.cache.max_entries, 50);
    assert_eq!(s.cache.idle_ttl_secs, 30.0);
    assert_eq!(s.cache.evict_fraction, 0.3);
    assert_eq!(s.lod.base_distances, [2.0, 6.0, 15.0]);
    assert_eq!(s.lod.mobile_distance_multiplier, 1.5);
    assert_eq!((s.lod.budgets.high, s.lod.budgets.medium, s.lod.budgets.low), (10_000, 5_000, 2_000));
    assert_eq!(s.performance.min_frame_rate, 30.0);
    assert!(s.performance.auto_quality);
    assert!(s.validate().is_ok());
}

#[test]
fn partial_json_keeps_other_defaults() -> anyhow::Result<()> {
    let s = PreviewSettings::from_json_str(r#"{ "cache": { "max_entries": 80 }, "performance": { "auto_quality": false } }"#)?;

    assert_eq!(s.cache.max_entries, 80);
    assert_eq!(s.cache.idle_ttl_secs, 30.0);
    assert!(!s.performance.auto_quality);
    assert_eq!(s.lod, PreviewSettings::default().lod);
    Ok(())
}

#[test]
fn json_round_trip() -> anyhow::Result<()> {
    let mut s = PreviewSettings::default();
    s.lod.budgets.low = 1_500;

    let parsed = PreviewSettings::from_json_str(&s.to_json_string()?)?;
    assert_eq!(parsed, s);
    Ok(())
}

#[test]
fn malformed_json_is_a_settings_error() {
    let err = PreviewSettings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, DrapeError::Settings(_)));
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        r#"{ "cache": { "max_entries": 0 } }"#,
        r#"{ "cache": { "evict_fraction": 0.0 } }"#,
        r#"{ "cache": { "evict_fraction": 1.5 } }"#,
        r#"{ "lod": { "base_distances": [6.0, 2.0, 15.0] } }"#,
        r#"{ "lod": { "budgets": { "high": 100, "medium": 500, "low": 50 } } }"#,
        r#"{ "performance": { "min_frame_rate": 0.0 } }"#,
    ];

    for json in cases {
        let err = PreviewSettings::from_json_str(json).unwrap_err();
        assert!(matches!(err, DrapeError::InvalidSettings(_)), "{json}");
    }
}
