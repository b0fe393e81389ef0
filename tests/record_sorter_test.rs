use proptest::prelude::*;
use sort_divide::core::sorter::sort_by_family_name;
use sort_divide::domain::model::default_roster;
use sort_divide::{NameRecord, RecordSorter};
use std::process::Command;

#[test]
fn test_binary_prints_sorted_roster() {
    let output = Command::new(env!("CARGO_BIN_EXE_record_sorter"))
        .output()
        .expect("failed to run record_sorter");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Keil Bruks",
            "Kirk Douglas",
            "houuil Douglas",
            "hhuri Douglas",
            "Kutts itse",
        ]
    );
}

#[test]
fn test_record_serializes_with_named_fields() {
    let record = NameRecord::new("Kutts", "itse");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"given_name": "Kutts", "family_name": "itse"})
    );
}

#[test]
fn test_sorted_roster_contains_every_input_record() {
    let mut sorted = RecordSorter::default().sorted();
    let mut input = default_roster();
    let key = |r: &NameRecord| (r.family_name().to_string(), r.given_name().to_string());
    sorted.sort_by_key(key);
    input.sort_by_key(key);
    assert_eq!(sorted, input);
}

proptest! {
    #[test]
    fn given_names_never_affect_family_order(
        given in proptest::collection::vec("[a-zA-Z]{1,8}", 5)
    ) {
        let mut records: Vec<NameRecord> = default_roster()
            .into_iter()
            .zip(given)
            .map(|(r, g)| NameRecord::new(g, r.family_name()))
            .collect();
        sort_by_family_name(&mut records);

        let families: Vec<&str> = records.iter().map(NameRecord::family_name).collect();
        prop_assert_eq!(families, vec!["Bruks", "Douglas", "Douglas", "Douglas", "itse"]);
    }
}
