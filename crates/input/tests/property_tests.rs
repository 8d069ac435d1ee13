//! Property-based tests for ranges, error collection and filters.

use proptest::prelude::*;
use serde_json::Value;
use sieve_input::prelude::*;

// ============================================================================
// RANGE PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn unbounded_number_range_never_rejects(x in any::<i64>()) {
        let range = NumberRange::<i64>::unbounded();
        prop_assert!(!range.below_min_border(&x));
        prop_assert!(!range.above_max_border(&x));
        prop_assert!(range.contains(&x));
    }

    #[test]
    fn min_only_range_never_exceeds_max(min in any::<i64>(), x in any::<i64>()) {
        let range = NumberRange::min(min);
        prop_assert!(!range.above_max_border(&x));
        prop_assert_eq!(range.below_min_border(&x), x < min);
    }

    #[test]
    fn max_only_range_never_falls_below_min(max in any::<i64>(), x in any::<i64>()) {
        let range = NumberRange::max(max);
        prop_assert!(!range.below_min_border(&x));
        prop_assert_eq!(range.above_max_border(&x), x > max);
    }

    #[test]
    fn finite_floats_respect_borders(min in -1e9f64..0.0, max in 0.0f64..1e9, x in -2e9f64..2e9) {
        let range = NumberRange::between(min, max).unwrap();
        prop_assert_eq!(range.contains(&x), min <= x && x <= max);
    }

    #[test]
    fn string_length_counts_chars(s in "\\PC{0,40}", max in 0usize..40) {
        let range = StringLength::max(max);
        prop_assert!(!range.below_min_border(&s));
        prop_assert_eq!(range.above_max_border(&s), s.chars().count() > max);
    }

    #[test]
    fn truncated_strings_fit(s in "\\PC{0,40}", max in 0usize..40) {
        let range = StringLength::truncate(max);
        if range.allows_truncate(&s) {
            let truncated = range.truncate_to_max_border(&s).unwrap();
            prop_assert_eq!(truncated.chars().count(), max);
            prop_assert!(s.starts_with(truncated.as_str()));
        } else {
            prop_assert!(range.contains(&s));
            prop_assert!(range.truncate_to_max_border(&s).is_err());
        }
    }
}

// ============================================================================
// ERROR COLLECTION PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn repeated_ids_are_stored_once(
        name in "[a-z]{1,8}",
        id in "[A-Z_]{1,12}",
        repeats in 1usize..10,
    ) {
        let mut errors = ParamErrors::new();
        for n in 0..repeats {
            errors.add(ParamError::new(id.clone()).with_detail("attempt", n), name.clone());
        }

        prop_assert_eq!(errors.count(), 1);
        prop_assert_eq!(errors.get_for(&name).len(), 1);
        let stored = errors.get_for_with_id(&name, &id).unwrap();
        prop_assert_eq!(stored.detail("attempt"), Some(&Detail::Int(0)));
    }

    #[test]
    fn count_is_number_of_names(names in prop::collection::vec("[a-c]", 0..20)) {
        let mut errors = ParamErrors::new();
        for name in &names {
            errors.add(ParamError::new(ids::FIELD_EMPTY), name.clone());
            errors.add(ParamError::new(ids::FIELD_WRONG_VALUE), name.clone());
        }

        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(errors.count(), distinct.len());
        prop_assert_eq!(errors.exist(), !names.is_empty());
    }
}

// ============================================================================
// FILTER PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn integer_strings_round_trip(n in any::<i64>()) {
        let (value, errors) = IntegerFilter.apply(&Param::new("n", n.to_string())).into_parts();
        prop_assert_eq!(value, Some(n));
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn bool_filter_never_errors(s in ".*") {
        let filtered = BoolFilter.apply(&Param::new("flag", s));
        prop_assert!(filtered.value().is_some());
        prop_assert!(filtered.errors().is_empty());
    }

    #[test]
    fn string_filter_strips_line_breaks(s in ".*") {
        let (value, _) = StringFilter.apply(&Param::new("s", s)).into_parts();
        let value = value.unwrap();
        prop_assert!(!value.contains(['\r', '\n', '\0']));
    }

    #[test]
    fn array_items_are_trimmed(items in prop::collection::vec("[a-z]{1,5}", 1..6)) {
        let raw = items.join(" , ");
        let (value, _) = ArrayFilter::new().apply(&Param::new("tags", raw)).into_parts();
        prop_assert_eq!(value, Some(items));
    }

    #[test]
    fn null_is_absent_for_every_reader(name in "[a-z]{1,8}") {
        let mut errors = ParamErrors::new();
        let param = Param::new(name, Value::Null);
        prop_assert_eq!(ValueReader::new(&mut errors, param.clone()).as_int(None), None);
        prop_assert_eq!(ValueReader::new(&mut errors, param.clone()).as_json(), None);
        prop_assert_eq!(ValueReader::new(&mut errors, param).as_array(), None);
        prop_assert!(!errors.exist());
    }
}
