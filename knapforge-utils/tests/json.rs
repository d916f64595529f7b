use knapforge_utils::*;
use serde_json::json;

#[test]
fn test_jsonify_sorts_keys() {
    let obj = json!({"b": 1, "a": {"d": 2, "c": [3, 4]}});
    assert_eq!(jsonify(&obj), r#"{"a":{"c":[3,4],"d":2},"b":1}"#);
}

#[test]
fn test_jsonify_sorts_keys_inside_arrays() {
    let obj = json!([{"b": 1, "a": 2}, {"d": 3, "c": 4}]);
    assert_eq!(jsonify(&obj), r#"[{"a":2,"b":1},{"c":4,"d":3}]"#);
}

#[test]
fn test_jsonify_is_stable_across_insertion_order() {
    let obj1 = json!({"x": 1, "y": 2});
    let obj2 = json!({"y": 2, "x": 1});
    assert_eq!(jsonify(&obj1), jsonify(&obj2));
}

#[test]
fn test_dejsonify() {
    let nums: Vec<u32> = dejsonify("[1,2,3]").unwrap();
    assert_eq!(nums, vec![1, 2, 3]);
    assert!(dejsonify::<Vec<u32>>("not json").is_err());
}

#[test]
fn test_compress_decompress_obj() {
    let obj = json!({"weights": [2, 3, 4], "profits": [3, 4, 5], "capacity": 5});
    let compressed = compress_obj(&obj);
    let decompressed: serde_json::Value = decompress_obj(&compressed).unwrap();
    assert_eq!(obj, decompressed);
    assert!(decompress_obj::<serde_json::Value>(&[1, 2, 3]).is_err());
}
