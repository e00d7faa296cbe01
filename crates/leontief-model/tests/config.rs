//! Integration tests for model configuration types.

use leontief_model::config::DEFAULT_SINGULARITY_TOLERANCE;
use leontief_model::{ModelConfig, RoundingPolicy};

#[test]
fn default_config_uses_bankers_rounding() {
    let cfg = ModelConfig::default();
    assert_eq!(cfg.rounding, RoundingPolicy::HalfToEven);
    assert_eq!(cfg.singularity_tolerance, DEFAULT_SINGULARITY_TOLERANCE);
}

#[test]
fn rounding_policy_from_str() {
    assert_eq!("half-even".parse::<RoundingPolicy>().unwrap(), RoundingPolicy::HalfToEven);
    assert_eq!("BANKERS".parse::<RoundingPolicy>().unwrap(), RoundingPolicy::HalfToEven);
    assert_eq!(
        "half-up".parse::<RoundingPolicy>().unwrap(),
        RoundingPolicy::HalfAwayFromZero
    );
    assert!("truncate".parse::<RoundingPolicy>().is_err());
}

#[test]
fn rounding_policy_apply() {
    assert_eq!(RoundingPolicy::HalfToEven.apply(2.5), 2.0);
    assert_eq!(RoundingPolicy::HalfToEven.apply(3.5), 4.0);
    assert_eq!(RoundingPolicy::HalfAwayFromZero.apply(2.5), 3.0);
    assert_eq!(RoundingPolicy::HalfAwayFromZero.apply(-2.5), -3.0);
    assert_eq!(RoundingPolicy::HalfToEven.apply(2.4999), 2.0);
}

#[test]
fn config_round_trips_json() {
    let cfg = ModelConfig::new(RoundingPolicy::HalfAwayFromZero, 1e-9);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("half_away_from_zero"));
    let back: ModelConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn config_fills_missing_fields() {
    let cfg: ModelConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, ModelConfig::default());
}
