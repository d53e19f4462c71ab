use super::*;
use crate::animation::options::Curve;

#[test]
fn empty_json_yields_defaults() {
    let cfg = AnimatorConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, AnimatorConfig::default());
}

#[test]
fn parses_all_fields() {
    let cfg = AnimatorConfig::from_json_str(
        r#"{
            "time_scale": 0.5,
            "default_options": { "curve": "linear", "allow_user_interaction": true },
            "share_capacity": 4
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.time_scale, 0.5);
    assert_eq!(cfg.share_capacity, 4);
    let opts = cfg.default_options.unwrap();
    assert_eq!(opts.curve, Some(Curve::Linear));
    assert!(opts.allow_user_interaction);
}

#[test]
fn rejects_non_positive_time_scale() {
    let err = AnimatorConfig::from_json_str(r#"{ "time_scale": 0 }"#).unwrap_err();
    assert!(matches!(err, ReanimateError::Validation(_)));
}

#[test]
fn rejects_zero_share_capacity() {
    let err = AnimatorConfig::from_json_str(r#"{ "share_capacity": 0 }"#).unwrap_err();
    assert!(matches!(err, ReanimateError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = AnimatorConfig::from_json_str("{ time_scale: ").unwrap_err();
    assert!(matches!(err, ReanimateError::Serde(_)));
}

#[test]
fn missing_file_is_wrapped() {
    let err = AnimatorConfig::from_path("target/does-not-exist/reanimate.json").unwrap_err();
    assert!(matches!(err, ReanimateError::Other(_)));
    assert!(err.to_string().contains("read animator config"));
}
