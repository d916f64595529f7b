use knapforge_instances::*;
use knapforge_utils::{dejsonify, jsonify};

#[test]
fn test_default_params() {
    let params = GeneratorParams::default();
    assert_eq!(params.num_instances, 100);
    assert_eq!(params.num_items, 5);
    assert_eq!(params.capacity, 10);
    assert_eq!(params.weight_range, (1, 10));
    assert_eq!(params.profit_range, (1, 10));
    assert!(!params.greedy_check);
    assert_eq!(params.max_attempts, None);
    assert!(params.validate().is_ok());
}

#[test]
fn test_params_from_partial_json() {
    let params: GeneratorParams = dejsonify(r#"{"num_items": 3, "capacity": 7}"#).unwrap();
    assert_eq!(params.num_items, 3);
    assert_eq!(params.capacity, 7);
    // unspecified fields keep their defaults
    assert_eq!(params.num_instances, 100);
    assert_eq!(params.weight_range, (1, 10));
}

#[test]
fn test_params_json_round_trip() {
    let params = GeneratorParams {
        num_instances: 5,
        num_items: 4,
        capacity: 12,
        weight_range: (2, 6),
        profit_range: (1, 9),
        greedy_check: true,
        max_attempts: Some(1000),
    };
    let round_tripped: GeneratorParams = dejsonify(&jsonify(&params)).unwrap();
    assert_eq!(round_tripped, params);
}

#[test]
fn test_validate_rejects_bad_params() {
    let params = GeneratorParams {
        num_items: 0,
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = GeneratorParams {
        capacity: 0,
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = GeneratorParams {
        weight_range: (0, 10),
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = GeneratorParams {
        weight_range: (5, 5),
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let params = GeneratorParams {
        profit_range: (7, 3),
        ..Default::default()
    };
    assert!(params.validate().is_err());
}

#[test]
fn test_calc_seed_depends_on_params_and_hash() {
    let params = GeneratorParams::default();
    assert_eq!(params.calc_seed("abc"), params.calc_seed("abc"));
    assert_ne!(params.calc_seed("abc"), params.calc_seed("abd"));

    let other = GeneratorParams {
        capacity: 11,
        ..Default::default()
    };
    assert_ne!(params.calc_seed("abc"), other.calc_seed("abc"));
}
