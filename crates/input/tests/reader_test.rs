//! End-to-end reading of parameters through `ParamSource` and `ValueReader`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use sieve_input::prelude::*;

fn read_int(raw: Value, range: Option<NumberRange<i64>>) -> (Option<i64>, ParamErrors) {
    let params = Params::new().with("age", raw);
    let mut errors = ParamErrors::new();
    let value = params.read("age", &mut errors).as_int(range);
    (value, errors)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn too_young_is_rejected_with_border() {
    let (value, errors) = read_int(json!("17"), Some(NumberRange::min(18)));

    assert_eq!(value, None);
    assert!(errors.exist_for_with_id("age", ids::VALUE_TOO_SMALL));
    let error = errors.get_for_with_id("age", ids::VALUE_TOO_SMALL).unwrap();
    assert_eq!(error.detail("minNumber"), Some(&Detail::Int(18)));
}

#[test]
fn absent_age_uses_default_silently() {
    let params = Params::new();
    let mut errors = ParamErrors::new();

    let age = params.read("age", &mut errors).defaulting_to(21_i64).as_int(None);

    assert_eq!(age, Some(21));
    assert!(!errors.exist());
}

#[rstest]
#[case(json!("foo, bar"), vec!["foo", "bar"])]
#[case(json!(""), vec![])]
#[case(json!("  "), vec![])]
#[case(json!(" single "), vec!["single"])]
#[case(json!(["a ", " b"]), vec!["a", "b"])]
fn tags_are_split(#[case] raw: Value, #[case] expected: Vec<&str>) {
    let params = Params::new().with("tags", raw);
    let mut errors = ParamErrors::new();

    let tags = params.read("tags", &mut errors).as_array();

    assert_eq!(
        tags,
        Some(expected.into_iter().map(str::to_owned).collect::<Vec<_>>())
    );
    assert!(!errors.exist());
}

// ============================================================================
// ABSENCE VS DEFAULT
// ============================================================================

#[test]
fn every_accessor_returns_its_default_when_absent() {
    let params = Params::new();
    let mut errors = ParamErrors::new();

    assert_eq!(
        params.read("n", &mut errors).defaulting_to(2.5_f64).as_float(None, None),
        Some(2.5)
    );
    assert_eq!(
        params
            .read("s", &mut errors)
            .defaulting_to("fallback".to_owned())
            .as_string(None),
        Some("fallback".to_owned())
    );
    assert_eq!(
        params
            .read("j", &mut errors)
            .defaulting_to(json!({"a": 1}))
            .as_json(),
        Some(json!({"a": 1}))
    );
    assert_eq!(
        params
            .read("list", &mut errors)
            .defaulting_to(vec!["x".to_owned()])
            .as_array(),
        Some(vec!["x".to_owned()])
    );
    let week = Week::new(2024, 19).unwrap();
    assert_eq!(
        params.read("w", &mut errors).defaulting_to(week).as_week(None),
        Some(week)
    );
    assert!(!errors.exist());
}

#[rstest]
#[case(json!(""))]
#[case(json!("  "))]
fn empty_values_fall_back_to_defaults(#[case] raw: Value) {
    let params = Params::new()
        .with("age", raw.clone())
        .with("since", raw.clone())
        .with("filter", raw);
    let mut errors = ParamErrors::new();
    let since = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let age = params.read("age", &mut errors).defaulting_to(21_i64).as_int(None);
    let date = params.read("since", &mut errors).defaulting_to(since).as_date(None);
    let filter = params
        .read("filter", &mut errors)
        .defaulting_to(json!({"all": true}))
        .as_json();

    assert_eq!(age, Some(21));
    assert_eq!(date, Some(since));
    assert_eq!(filter, Some(json!({"all": true})));
    assert!(!errors.exist());
}

#[test]
fn empty_strings_and_lists_keep_their_value_over_defaults() {
    let params = Params::new().with("name", "").with("tags", "");
    let mut errors = ParamErrors::new();

    let name = params
        .read("name", &mut errors)
        .defaulting_to("anon".to_owned())
        .as_string(None);
    let tags = params
        .read("tags", &mut errors)
        .defaulting_to(vec!["x".to_owned()])
        .as_array();

    assert_eq!(name, Some(String::new()));
    assert_eq!(tags, Some(Vec::new()));
    assert!(!errors.exist());
}

#[test]
fn required_overrides_defaults() {
    let params = Params::new();
    let mut errors = ParamErrors::new();

    let age = params
        .read("age", &mut errors)
        .defaulting_to(21_i64)
        .required()
        .as_int(None);
    let name = params
        .read("name", &mut errors)
        .defaulting_to("anon".to_owned())
        .required()
        .as_string(None);

    assert_eq!(age, None);
    assert_eq!(name, None);
    assert_eq!(errors.count(), 2);
    assert_eq!(errors.get_for("age").len(), 1);
    assert!(errors.exist_for_with_id("age", ids::FIELD_EMPTY));
    assert!(errors.exist_for_with_id("name", ids::FIELD_EMPTY));
}

#[test]
fn required_empty_string_is_missing() {
    let params = Params::new().with("name", "");
    let mut errors = ParamErrors::new();

    assert_eq!(params.read("name", &mut errors).required().as_string(None), None);
    assert!(errors.exist_for_with_id("name", ids::FIELD_EMPTY));
}

#[test]
fn optional_empty_string_is_kept() {
    let params = Params::new().with("name", "");
    let mut errors = ParamErrors::new();

    assert_eq!(
        params.read("name", &mut errors).as_string(None),
        Some(String::new())
    );
    assert!(!errors.exist());
}

#[test]
fn custom_absence_id() {
    let params = Params::new();
    let mut errors = ParamErrors::new();

    let choice = params
        .read("color", &mut errors)
        .required_with(ids::FIELD_NO_SELECT)
        .if_is_one_of(["red", "blue"]);

    assert_eq!(choice, None);
    assert!(errors.exist_for_with_id("color", ids::FIELD_NO_SELECT));
    assert!(!errors.exist_for_with_id("color", ids::FIELD_EMPTY));
}

#[test]
fn multi_selects_agree_with_the_validator() {
    let params = Params::new()
        .with("colors", json!(["red", "blue"]))
        .with("bad", json!(["red", "pink"]));
    let mut errors = ParamErrors::new();
    let allowed = ["red", "green", "blue"];

    assert!(params.validate("colors").is_one_of(allowed));
    let colors = params.read("colors", &mut errors).if_are_one_of(allowed);
    assert_eq!(colors, Some(vec!["red".to_owned(), "blue".to_owned()]));
    assert!(!errors.exist());

    assert!(!params.validate("bad").is_one_of(allowed));
    assert_eq!(params.read("bad", &mut errors).if_are_one_of(allowed), None);
    assert!(errors.exist_for_with_id("bad", ids::FIELD_NO_SELECT));
}

#[test]
fn single_choice_rejects_lists() {
    let params = Params::new().with("color", json!(["red"]));
    let mut errors = ParamErrors::new();

    assert_eq!(params.read("color", &mut errors).if_is_one_of(["red"]), None);
    assert!(errors.exist_for_with_id("color", ids::FIELD_NO_SELECT));
}

// ============================================================================
// INVALID VS ABSENT
// ============================================================================

#[rstest]
#[case(json!("abc"), ids::INTEGER_INVALID)]
#[case(json!("99"), ids::VALUE_TOO_GREAT)]
#[case(json!([1, 2]), ids::INTEGER_INVALID)]
fn rejected_values_are_not_missing(#[case] raw: Value, #[case] id: &str) {
    let (value, errors) = read_int(raw, Some(NumberRange::max(50)));

    assert_eq!(value, None);
    assert!(errors.exist_for_with_id("age", id));
    assert!(!errors.exist_for_with_id("age", ids::FIELD_EMPTY));
}

#[test]
fn rejected_values_ignore_defaults() {
    let params = Params::new().with("age", "abc");
    let mut errors = ParamErrors::new();

    let age = params.read("age", &mut errors).defaulting_to(21_i64).as_int(None);

    assert_eq!(age, None);
    assert!(errors.exist_for_with_id("age", ids::INTEGER_INVALID));
}

// ============================================================================
// BOOLEANS
// ============================================================================

#[rstest]
#[case(json!(1), Some(true))]
#[case(json!("1"), Some(true))]
#[case(json!(true), Some(true))]
#[case(json!("yes"), Some(true))]
#[case(json!(0), Some(false))]
#[case(json!("0"), Some(false))]
#[case(json!(false), Some(false))]
#[case(json!("no"), Some(false))]
#[case(json!("maybe"), Some(false))]
#[case(Value::Null, None)]
fn bool_truth_table(#[case] raw: Value, #[case] expected: Option<bool>) {
    let mut errors = ParamErrors::new();
    let flag = ValueReader::new(&mut errors, Param::new("flag", raw)).as_bool();

    assert_eq!(flag, expected);
    assert!(!errors.exist());
}

#[test]
fn bool_default_wins_even_when_required() {
    let mut errors = ParamErrors::new();

    let flag = ValueReader::new(&mut errors, Param::null("flag"))
        .defaulting_to(true)
        .required()
        .as_bool();

    assert_eq!(flag, Some(true));
    assert!(!errors.exist());
}

// ============================================================================
// OTHER ACCESSORS
// ============================================================================

#[test]
fn dates_and_spans() {
    let params = Params::new()
        .with("at", "2024-05-07 10:30:00")
        .with("week", "2024-W19")
        .with("span", "2024-05-01,2024-05-31")
        .with("bad", "someday");
    let mut errors = ParamErrors::new();

    let at = params.read("at", &mut errors).as_date(None).unwrap();
    assert_eq!(at.to_string(), "2024-05-07 10:30:00");

    let week = params.read("week", &mut errors).as_week(None).unwrap();
    assert_eq!(week.to_string(), "2024-W19");

    let span = params.read("span", &mut errors).as_datespan(None).unwrap();
    assert!(matches!(span, Datespan::Custom(_)));

    assert_eq!(params.read("bad", &mut errors).as_date(None), None);
    assert!(errors.exist_for_with_id("bad", ids::DATE_INVALID));
    assert_eq!(errors.count(), 1);
}

#[test]
fn passwords_are_checked_and_hidden() {
    use secrecy::ExposeSecret;

    let params = Params::new()
        .with("good", "correct horse")
        .with("short", "abc")
        .with("confirm", json!(["one-secret", "two-secret"]));
    let mut errors = ParamErrors::new();
    let checker = SimplePasswordChecker::new(8, 3);

    let good = params.read("good", &mut errors).as_password(&checker).unwrap();
    assert_eq!(good.expose_secret(), "correct horse");

    assert!(params.read("short", &mut errors).as_password(&checker).is_none());
    assert!(errors.exist_for_with_id("short", ids::PASSWORD_TOO_SHORT));

    assert!(params.read("confirm", &mut errors).as_password(&checker).is_none());
    assert!(errors.exist_for_with_id("confirm", ids::PASSWORDS_NOT_EQUAL));
}

#[test]
fn mail_and_uri() {
    let params = Params::new()
        .with("mail", "jane doe@example.com")
        .with("site", "ftp://example.com")
        .with("home", "https://example.com/path");
    let mut errors = ParamErrors::new();

    assert_eq!(params.read("mail", &mut errors).as_mail_address(), None);
    assert!(errors.exist_for_with_id("mail", ids::MAILADDRESS_CANNOT_CONTAIN_SPACES));

    assert_eq!(params.read("site", &mut errors).as_http_uri(), None);
    assert!(errors.exist_for_with_id("site", ids::HTTP_URI_INCORRECT));

    let home = params.read("home", &mut errors).as_http_uri().unwrap();
    assert_eq!(home.host_str(), Some("example.com"));
}

#[test]
fn shared_errors_collect_across_readers() {
    let params = Params::new().with("a", "x").with("b", "y");
    let mut shared = SharedParamErrors::new();

    let _ = params.read("a", &mut shared).as_int(None);
    let _ = params.read("b", &mut shared).as_float(None, None);

    let errors = shared.into_inner();
    assert_eq!(errors.count(), 2);
    assert!(errors.exist_for_with_id("b", ids::FLOAT_INVALID));
}

// ============================================================================
// MESSAGES
// ============================================================================

#[test]
fn messages_are_filled_from_details() {
    let error = ParamError::new("ID").with_detail("foo", "bar");
    assert_eq!(error.fill_message("val={foo}", "en").message(), "val=bar");

    let error = ParamError::new("ID").with_detail("foo", vec!["a", "b"]);
    assert_eq!(error.fill_message("val={foo}", "en").message(), "val=a, b");

    let error = ParamError::new("ID");
    assert_eq!(error.fill_message("val={foo}", "en").message(), "val={foo}");
}

#[test]
fn messages_for_every_locale() {
    let error = ParamError::new(ids::STRING_TOO_LONG).with_detail("maxNumber", 5_usize);

    let messages = error.fill_messages([
        ("en", "at most {maxNumber} characters"),
        ("de", "höchstens {maxNumber} Zeichen"),
    ]);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].locale(), "en");
    assert_eq!(messages[1].message(), "höchstens 5 Zeichen");
}
