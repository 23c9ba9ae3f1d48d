use cascade_sort::record::Record;
use cascade_sort::sort::sort_records_ascending;
use serde_json::Value;

fn catalog() -> Vec<Record> {
    [
        r#"{"name":"test","price":90,"desc":"test description"}"#,
        r#"{"name":"test","price":100,"desc":"test description"}"#,
        r#"{"name":"lolo","price":90,"desc":"test description"}"#,
        r#"{"name":"final","price":120,"desc":"test description"}"#,
    ]
    .iter()
    .map(|raw| Record::from_json(raw).unwrap())
    .collect()
}

#[test]
fn golden_sorted_catalog_serialization() {
    let sorted = sort_records_ascending(&catalog(), &["name", "price"]).unwrap();

    let json_str = serde_json::to_string_pretty(&sorted).unwrap();

    // Fields serialize in name order inside each record.
    const EXPECTED_JSON: &str = r#"[
      {
        "desc": "test description",
        "name": "final",
        "price": 120
      },
      {
        "desc": "test description",
        "name": "lolo",
        "price": 90
      },
      {
        "desc": "test description",
        "name": "test",
        "price": 90
      },
      {
        "desc": "test description",
        "name": "test",
        "price": 100
      }
    ]"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    assert_eq!(
        normalized_actual, normalized_expected,
        "JSON structure mismatch against golden snapshot"
    );

    // Valid JSON and lossless roundtrip.
    let _parsed: Value = serde_json::from_str(&json_str).unwrap();
    let roundtrip: Vec<Record> = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, sorted);
}

#[test]
fn sorted_output_is_byte_identical_across_runs() {
    let first = sort_records_ascending(&catalog(), &["name", "price"]).unwrap();
    let second = sort_records_ascending(&catalog(), &["name", "price"]).unwrap();

    let bytes_first = serde_json::to_vec(&first).unwrap();
    let bytes_second = serde_json::to_vec(&second).unwrap();

    assert_eq!(
        bytes_first, bytes_second,
        "identical inputs must serialize to identical bytes"
    );
}
