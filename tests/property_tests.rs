//! Property-based tests for rust_log_formatter using proptest

use chrono::{DateTime, FixedOffset, TimeZone};
use proptest::prelude::*;
use rust_log_formatter::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::None),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_time() -> impl Strategy<Value = Option<DateTime<FixedOffset>>> {
    proptest::option::of(
        (
            0i64..4_102_444_800,
            0u32..1_000_000_000,
            (-720i32..=840).prop_map(|minutes| minutes * 60),
        )
            .prop_map(|(secs, nanos, offset)| {
                FixedOffset::east_opt(offset)
                    .expect("offset in range")
                    .timestamp_opt(secs, nanos)
                    .single()
                    .expect("valid timestamp")
            }),
    )
}

fn any_scalar() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Bool),
        any::<i64>().prop_map(FieldValue::Int),
        any::<u64>().prop_map(FieldValue::UInt),
        (-1.0e12f64..1.0e12).prop_map(FieldValue::Float),
        ".*".prop_map(FieldValue::String),
    ]
}

/// Fields with unique keys, in generation order
fn any_fields() -> impl Strategy<Value = Vec<(String, FieldValue)>> {
    proptest::collection::vec(("[a-z_]{1,12}", any_scalar()), 0..8).prop_map(|pairs| {
        let mut seen = std::collections::HashSet::new();
        pairs
            .into_iter()
            .filter(|(key, _)| seen.insert(key.clone()))
            .collect()
    })
}

fn build_entry(
    level: LogLevel,
    time: Option<DateTime<FixedOffset>>,
    message: String,
    pairs: &[(String, FieldValue)],
) -> LogEntry {
    LogEntry {
        level,
        time,
        message,
        fields: pairs.iter().cloned().collect(),
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches the discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// Fields Tests
// ============================================================================

proptest! {
    /// Ordered keys always reflect insertion order
    #[test]
    fn test_ordered_keys_match_insertion(pairs in any_fields()) {
        let fields: Fields = pairs.iter().cloned().collect();
        let keys: Vec<&str> = fields.ordered_keys().collect();
        let expected: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Updating an existing key never moves it
    #[test]
    fn test_update_keeps_positions(pairs in any_fields(), index in any::<prop::sample::Index>()) {
        prop_assume!(!pairs.is_empty());
        let mut fields: Fields = pairs.iter().cloned().collect();
        let (key, _) = &pairs[index.index(pairs.len())];

        fields.insert(key.clone(), "updated");

        let keys: Vec<&str> = fields.ordered_keys().collect();
        let expected: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(fields.get(key).and_then(FieldValue::as_str), Some("updated"));
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Raw output is exactly the message
    #[test]
    fn test_raw_is_message(
        level in any_level(),
        time in any_time(),
        message in ".*",
        pairs in any_fields(),
    ) {
        let entry = build_entry(level, time, message.clone(), &pairs);
        prop_assert_eq!(RawFormatter.format_to_string(&entry).unwrap(), message);
    }

    /// Time and message segments appear exactly when set
    #[test]
    fn test_ltsv_omission(
        level in any_level(),
        time in any_time(),
        message in "[a-z ]*",
    ) {
        let entry = build_entry(level, time, message.clone(), &[]);
        let output = LtsvFormatter.format_to_string(&entry).unwrap();
        let segments: Vec<&str> = output.split('\t').collect();

        prop_assert_eq!(segments[0], format!("level:{}", level));
        prop_assert_eq!(
            segments.iter().any(|s| s.starts_with("time:")),
            time.is_some()
        );
        prop_assert_eq!(
            segments.iter().any(|s| s.starts_with("message:")),
            !message.is_empty()
        );
        prop_assert_eq!(
            segments.len(),
            1 + usize::from(time.is_some()) + usize::from(!message.is_empty())
        );
    }

    /// JSON output decodes to exactly the expected members
    #[test]
    fn test_json_roundtrip(
        level in any_level(),
        time in any_time(),
        message in ".*",
        pairs in any_fields().prop_filter("no reserved keys", |pairs| {
            pairs.iter().all(|(k, _)| k != "level" && k != "time" && k != "message")
        }),
    ) {
        let entry = build_entry(level, time, message.clone(), &pairs);
        let output = JsonFormatter.format_to_string(&entry).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let object = parsed.as_object().unwrap();

        let expected_len = 1
            + usize::from(time.is_some())
            + usize::from(!message.is_empty())
            + pairs.len();
        prop_assert_eq!(object.len(), expected_len);
        prop_assert_eq!(&parsed["level"], level.to_str());

        if let Some(time) = time {
            let decoded = DateTime::parse_from_rfc3339(parsed["time"].as_str().unwrap()).unwrap();
            prop_assert_eq!(decoded, time);
        }
        if !message.is_empty() {
            prop_assert_eq!(&parsed["message"], message.as_str());
        }
        for (key, value) in &pairs {
            let decoded = FieldValue::from(parsed[key.as_str()].clone());
            match (value, &decoded) {
                // integers that fit both representations decode as signed
                (FieldValue::UInt(u), FieldValue::Int(i)) => {
                    prop_assert_eq!(*u as i128, *i as i128);
                }
                _ => {
                    prop_assert_eq!(value, &decoded);
                }
            }
        }
    }

    /// Both structured formats emit fields in the same order
    #[test]
    fn test_structured_formats_share_field_order(pairs in any_fields()) {
        let entry = build_entry(LogLevel::Info, None, String::new(), &pairs);

        let ltsv = LtsvFormatter.format_to_string(&entry).unwrap();
        let json = JsonFormatter.format_to_string(&entry).unwrap();

        let expected: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        let mut last = 0;
        for key in &expected {
            let needle = format!("\"{}\":", key);
            let pos = json[last..].find(&needle).map(|p| p + last);
            prop_assert!(pos.is_some(), "missing key {} in {}", key, json);
            last = pos.unwrap() + needle.len();
        }

        if !pairs.iter().any(|(_, v)| v.to_string().contains('\t')) {
            let ltsv_keys: Vec<&str> = ltsv
                .split('\t')
                .skip(1)
                .map(|segment| segment.split(':').next().unwrap())
                .collect();
            prop_assert_eq!(ltsv_keys, expected);
        }
    }
}
