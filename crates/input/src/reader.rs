//! Typed access to one parameter
//!
//! A [`ValueReader`] binds one [`Param`] to an [`ErrorSink`] and turns the
//! raw value into a typed one through a filter. Every accessor follows the
//! same rules:
//!
//! 1. A null param (or an empty one, when required) is *absent*. A
//!    required reader records `FIELD_EMPTY` (or the id given to
//!    [`required_with`](ValueReader::required_with)) and returns `None`.
//!    Otherwise the default is returned and no filter runs.
//! 2. A present value runs through the filter. Errors are recorded under
//!    the param name and the accessor returns `None`, never the default.
//! 3. A value the filter reads as nothing (`""` for a number) is absent
//!    too, with the same outcome as in 1.
//! 4. Otherwise the filtered value is returned.
//!
//! Defaults are typed: [`ValueReader::defaulting_to`] returns a
//! [`DefaultingReader`] that only offers accessors producing the default's
//! type. Passwords and secrets have no defaulting accessor at all.
//!
//! One exception is kept on purpose: [`DefaultingReader::as_bool`] returns
//! its default for a null param even when the reader is required.
//!
//! ```
//! use sieve_input::foundation::{ParamErrors, Param};
//! use sieve_input::range::NumberRange;
//! use sieve_input::reader::ValueReader;
//!
//! let mut errors = ParamErrors::new();
//!
//! let age = ValueReader::new(&mut errors, Param::new("age", "17")).as_int(NumberRange::min(18));
//! assert_eq!(age, None);
//! assert!(errors.exist_for_with_id("age", "VALUE_TOO_SMALL"));
//!
//! let limit = ValueReader::new(&mut errors, Param::null("limit")).defaulting_to(21_i64).as_int(None);
//! assert_eq!(limit, Some(21));
//! ```

use std::borrow::Cow;

use chrono::NaiveDateTime;
use regex::Regex;
use secrecy::SecretString;
use serde_json::Value;
use url::Url;

use crate::config::FilterConfig;
use crate::datespan::{Datespan, Day, Month, Week};
use crate::filters::{
    BoolFilter, DateFilter, DatespanFilter, DayFilter, ExistingHttpUriFilter, FloatFilter,
    HttpUriFilter, IntegerFilter, JsonFilter, MailFilter, MonthFilter, PasswordChecker,
    PasswordFilter, RangeFilter, SecretFilter, StringFilter, TextFilter, ValidatingFilter,
    ValidatingListFilter, WeekFilter,
};
use crate::foundation::{
    Detail, ErrorSink, Filter, FilterExt, Param, ParamError, ParamErrors, Validator, ids,
};
use crate::range::{DateRange, DatespanRange, NumberRange, StringLength};
use crate::validators::{HostResolver, IpAddressValidator, OneOfValidator, RegexValidator};

// ============================================================================
// FILTER BUILDERS
// ============================================================================

fn int_filter(range: Option<NumberRange<i64>>) -> RangeFilter<IntegerFilter, NumberRange<i64>> {
    IntegerFilter.in_range(range.unwrap_or_default())
}

fn float_filter(
    range: Option<NumberRange<f64>>,
    decimals: Option<u32>,
) -> RangeFilter<FloatFilter, NumberRange<f64>> {
    let filter = decimals.map_or_else(FloatFilter::new, FloatFilter::rounded);
    filter.in_range(range.unwrap_or_default())
}

fn date_filter(range: Option<DateRange>) -> RangeFilter<DateFilter, DateRange> {
    DateFilter.in_range(range.unwrap_or_default())
}

fn one_of_filter<I, S>(allowed: I) -> ValidatingFilter<OneOfValidator>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ValidatingFilter::new(OneOfValidator::new(allowed), ParamError::new(ids::FIELD_NO_SELECT))
}

fn one_of_list_filter<I, S>(allowed: I) -> ValidatingListFilter<OneOfValidator>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ValidatingListFilter::new(OneOfValidator::new(allowed), ParamError::new(ids::FIELD_NO_SELECT))
}

fn regex_filter(pattern: &Regex) -> ValidatingFilter<RegexValidator> {
    ValidatingFilter::new(
        RegexValidator::from(pattern.clone()),
        ParamError::new(ids::FIELD_WRONG_VALUE),
    )
}

fn ip_filter() -> ValidatingFilter<IpAddressValidator> {
    ValidatingFilter::new(IpAddressValidator, ParamError::new(ids::INVALID_IP_ADDRESS))
}

// ============================================================================
// VALUE READER
// ============================================================================

/// Reads one parameter into a typed value.
///
/// Readers are consumed by their accessor; build a fresh one per read.
pub struct ValueReader<'a, S: ErrorSink + ?Sized = ParamErrors> {
    errors: &'a mut S,
    param: Param,
    config: &'a FilterConfig,
    required: Option<Cow<'static, str>>,
}

impl<'a, S: ErrorSink + ?Sized> ValueReader<'a, S> {
    /// A reader for `param` recording into `errors`, using the shared
    /// default [`FilterConfig`].
    pub fn new(errors: &'a mut S, param: Param) -> Self {
        Self {
            errors,
            param,
            config: FilterConfig::shared(),
            required: None,
        }
    }

    /// Use `config` for filters the reader builds itself.
    #[must_use = "builder methods must be chained or built"]
    pub fn configured(mut self, config: &'a FilterConfig) -> Self {
        self.config = config;
        self
    }

    /// Absence records `FIELD_EMPTY`.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.required_with(ids::FIELD_EMPTY)
    }

    /// Absence records the error `id`.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_with(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.required = Some(id.into());
        self
    }

    /// Return `default` when the param is absent and not required.
    pub fn defaulting_to<T>(self, default: T) -> DefaultingReader<'a, S, T> {
        DefaultingReader {
            reader: self,
            default,
        }
    }

    #[must_use]
    pub const fn param(&self) -> &Param {
        &self.param
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.param.name()
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required.is_some()
    }

    fn is_absent(&self) -> bool {
        self.param.is_null() || (self.required.is_some() && self.param.is_empty())
    }

    fn record_absence(self) {
        if let Some(id) = self.required {
            tracing::debug!(param = self.param.name(), %id, "required parameter is missing");
            self.errors.record(self.param.name(), ParamError::new(id));
        }
    }

    fn read<F: Filter>(self, filter: F, default: Option<F::Output>) -> Option<F::Output> {
        if self.is_absent() {
            if self.required.is_some() {
                self.record_absence();
                return None;
            }
            if default.is_some() {
                tracing::trace!(param = self.param.name(), "parameter absent, using default");
            }
            return default;
        }

        let (value, found) = filter.apply(&self.param).into_parts();
        if !found.is_empty() {
            tracing::debug!(
                param = self.param.name(),
                errors = ?found.ids().collect::<Vec<_>>(),
                "parameter rejected"
            );
            self.errors.record_all(self.param.name(), found);
            return None;
        }
        if value.is_none() {
            if self.required.is_some() {
                self.record_absence();
                return None;
            }
            if default.is_some() {
                tracing::trace!(param = self.param.name(), "parameter empty, using default");
            }
            return default;
        }
        value
    }

    // ── Scalars ──────────────────────────────────────────────────────────

    /// Reads a flag. See [`BoolFilter`] for the accepted tokens.
    pub fn as_bool(self) -> Option<bool> {
        self.read(BoolFilter, None)
    }

    /// Reads a whole number within `range`.
    pub fn as_int(self, range: impl Into<Option<NumberRange<i64>>>) -> Option<i64> {
        self.read(int_filter(range.into()), None)
    }

    /// Reads a number within `range`, rounded to `decimals` places if given.
    pub fn as_float(
        self,
        range: impl Into<Option<NumberRange<f64>>>,
        decimals: impl Into<Option<u32>>,
    ) -> Option<f64> {
        self.read(float_filter(range.into(), decimals.into()), None)
    }

    /// Reads a single-line string of the given length.
    pub fn as_string(self, length: impl Into<Option<StringLength>>) -> Option<String> {
        let length = length.into().unwrap_or_default();
        self.read(StringFilter.in_range(length), None)
    }

    /// Reads multi-line text of the given length. Markup is stripped
    /// except for the configured tags.
    pub fn as_text(self, length: impl Into<Option<StringLength>>) -> Option<String> {
        let length = length.into().unwrap_or_default();
        let filter = self.config.text_filter();
        self.read(filter.in_range(length), None)
    }

    // ── Dates ────────────────────────────────────────────────────────────

    pub fn as_date(self, range: impl Into<Option<DateRange>>) -> Option<NaiveDateTime> {
        self.read(date_filter(range.into()), None)
    }

    pub fn as_day(self, range: impl Into<Option<DatespanRange>>) -> Option<Day> {
        let range = range.into().unwrap_or_default();
        self.read(DayFilter::new().in_range(range), None)
    }

    pub fn as_week(self, range: impl Into<Option<DatespanRange>>) -> Option<Week> {
        let range = range.into().unwrap_or_default();
        self.read(WeekFilter::new().in_range(range), None)
    }

    pub fn as_month(self, range: impl Into<Option<DatespanRange>>) -> Option<Month> {
        let range = range.into().unwrap_or_default();
        self.read(MonthFilter::new().in_range(range), None)
    }

    /// Reads a day, week, month or custom span.
    pub fn as_datespan(self, range: impl Into<Option<DatespanRange>>) -> Option<Datespan> {
        let range = range.into().unwrap_or_default();
        self.read(DatespanFilter::new().in_range(range), None)
    }

    // ── Structured ───────────────────────────────────────────────────────

    /// Reads a JSON object or array.
    pub fn as_json(self) -> Option<Value> {
        let filter: JsonFilter = self.config.json_filter();
        self.read(filter, None)
    }

    /// Reads a list split on the configured separator.
    pub fn as_array(self) -> Option<Vec<String>> {
        let filter = self.config.array_filter();
        self.read(filter, None)
    }

    /// Reads a list split on `separator`.
    pub fn as_array_separated_by(self, separator: &str) -> Option<Vec<String>> {
        self.read(crate::filters::ArrayFilter::separated_by(separator), None)
    }

    // ── Network and mail ─────────────────────────────────────────────────

    pub fn as_http_uri(self) -> Option<Url> {
        self.read(HttpUriFilter, None)
    }

    /// Reads an HTTP URI whose host resolves through `resolver`.
    pub fn as_existing_http_uri<R: HostResolver>(self, resolver: R) -> Option<Url> {
        self.read(ExistingHttpUriFilter::new(resolver), None)
    }

    pub fn as_mail_address(self) -> Option<String> {
        self.read(MailFilter, None)
    }

    // ── Secrets ──────────────────────────────────────────────────────────

    /// Reads a password checked by `checker`.
    pub fn as_password<C: PasswordChecker>(self, checker: C) -> Option<SecretString> {
        self.read(PasswordFilter::new(checker), None)
    }

    /// Reads a password checked by the configured policy.
    pub fn as_configured_password(self) -> Option<SecretString> {
        let checker = self.config.password_checker();
        self.as_password(checker)
    }

    pub fn as_secret(self) -> Option<SecretString> {
        self.read(SecretFilter, None)
    }

    // ── Validation ───────────────────────────────────────────────────────

    /// Accepts only one of `allowed`; anything else is `FIELD_NO_SELECT`.
    ///
    /// A single choice is expected, so arrays are rejected. Read
    /// multi-selects with [`if_are_one_of`](Self::if_are_one_of).
    pub fn if_is_one_of<I, St>(self, allowed: I) -> Option<String>
    where
        I: IntoIterator<Item = St>,
        St: Into<String>,
    {
        self.read(one_of_filter(allowed), None)
    }

    /// Accepts a non-empty selection where every item is one of `allowed`;
    /// anything else is `FIELD_NO_SELECT`. A scalar is a one-item selection.
    pub fn if_are_one_of<I, St>(self, allowed: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = St>,
        St: Into<String>,
    {
        self.read(one_of_list_filter(allowed), None)
    }

    /// Accepts values matching `pattern`; anything else is `FIELD_WRONG_VALUE`.
    pub fn if_satisfies_regex(self, pattern: &Regex) -> Option<String> {
        self.read(regex_filter(pattern), None)
    }

    /// Accepts IP addresses; anything else is `INVALID_IP_ADDRESS`.
    pub fn if_is_ip_address(self) -> Option<String> {
        self.read(ip_filter(), None)
    }

    /// Accepts values `predicate` holds for; anything else is `id`.
    pub fn with_predicate<P>(self, predicate: P, id: impl Into<Cow<'static, str>>) -> Option<String>
    where
        P: Fn(&Value) -> bool,
    {
        self.read(ValidatingFilter::new(predicate, ParamError::new(id)), None)
    }

    /// Accepts values `validator` holds for; anything else is `id` with `details`.
    pub fn with_validator<V, I, K, D>(
        self,
        validator: V,
        id: impl Into<Cow<'static, str>>,
        details: I,
    ) -> Option<String>
    where
        V: Validator,
        I: IntoIterator<Item = (K, D)>,
        K: Into<Cow<'static, str>>,
        D: Into<Detail>,
    {
        let error = ParamError::with_details(id, details);
        self.read(ValidatingFilter::new(validator, error), None)
    }

    /// Reads the param with any filter.
    pub fn with_filter<F: Filter>(self, filter: F) -> Option<F::Output> {
        self.read(filter, None)
    }

    /// The raw value, unfiltered and unchecked.
    ///
    /// Nothing is recorded, not even for a required reader. Do not pass the
    /// result anywhere that expects sanitized input.
    pub fn unsecure(self) -> Value {
        tracing::warn!(param = self.param.name(), "reading parameter without filtering");
        self.param.into_value()
    }
}

// ============================================================================
// DEFAULTING READER
// ============================================================================

/// A [`ValueReader`] with a default of type `T` for absent params.
///
/// Only accessors producing `T` are available.
pub struct DefaultingReader<'a, S: ErrorSink + ?Sized, T> {
    reader: ValueReader<'a, S>,
    default: T,
}

impl<'a, S: ErrorSink + ?Sized, T> DefaultingReader<'a, S, T> {
    /// Absence records `FIELD_EMPTY`; the default is then ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.required_with(ids::FIELD_EMPTY)
    }

    /// Absence records the error `id`; the default is then ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_with(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.reader = self.reader.required_with(id);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn configured(mut self, config: &'a FilterConfig) -> Self {
        self.reader = self.reader.configured(config);
        self
    }

    pub const fn default_value(&self) -> &T {
        &self.default
    }

    fn read<F: Filter<Output = T>>(self, filter: F) -> Option<T> {
        self.reader.read(filter, Some(self.default))
    }

    /// Reads the param with any filter producing `T`.
    pub fn with_filter<F: Filter<Output = T>>(self, filter: F) -> Option<T> {
        self.read(filter)
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, bool> {
    /// Reads a flag.
    ///
    /// A null param yields the default even on a required reader.
    pub fn as_bool(self) -> Option<bool> {
        if self.reader.param.is_null() {
            tracing::trace!(param = self.reader.name(), "flag absent, using default");
            return Some(self.default);
        }
        self.read(BoolFilter)
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, i64> {
    pub fn as_int(self, range: impl Into<Option<NumberRange<i64>>>) -> Option<i64> {
        self.read(int_filter(range.into()))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, f64> {
    pub fn as_float(
        self,
        range: impl Into<Option<NumberRange<f64>>>,
        decimals: impl Into<Option<u32>>,
    ) -> Option<f64> {
        self.read(float_filter(range.into(), decimals.into()))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, String> {
    pub fn as_string(self, length: impl Into<Option<StringLength>>) -> Option<String> {
        let length = length.into().unwrap_or_default();
        self.read(StringFilter.in_range(length))
    }

    pub fn as_text(self, length: impl Into<Option<StringLength>>) -> Option<String> {
        let length = length.into().unwrap_or_default();
        let filter: TextFilter = self.reader.config.text_filter();
        self.read(filter.in_range(length))
    }

    pub fn as_mail_address(self) -> Option<String> {
        self.read(MailFilter)
    }

    pub fn if_is_one_of<I, St>(self, allowed: I) -> Option<String>
    where
        I: IntoIterator<Item = St>,
        St: Into<String>,
    {
        self.read(one_of_filter(allowed))
    }

    pub fn if_satisfies_regex(self, pattern: &Regex) -> Option<String> {
        self.read(regex_filter(pattern))
    }

    pub fn if_is_ip_address(self) -> Option<String> {
        self.read(ip_filter())
    }

    pub fn with_predicate<P>(self, predicate: P, id: impl Into<Cow<'static, str>>) -> Option<String>
    where
        P: Fn(&Value) -> bool,
    {
        self.read(ValidatingFilter::new(predicate, ParamError::new(id)))
    }

    pub fn with_validator<V, I, K, D>(
        self,
        validator: V,
        id: impl Into<Cow<'static, str>>,
        details: I,
    ) -> Option<String>
    where
        V: Validator,
        I: IntoIterator<Item = (K, D)>,
        K: Into<Cow<'static, str>>,
        D: Into<Detail>,
    {
        let error = ParamError::with_details(id, details);
        self.read(ValidatingFilter::new(validator, error))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, NaiveDateTime> {
    pub fn as_date(self, range: impl Into<Option<DateRange>>) -> Option<NaiveDateTime> {
        self.read(date_filter(range.into()))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Day> {
    pub fn as_day(self, range: impl Into<Option<DatespanRange>>) -> Option<Day> {
        let range = range.into().unwrap_or_default();
        self.read(DayFilter::new().in_range(range))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Week> {
    pub fn as_week(self, range: impl Into<Option<DatespanRange>>) -> Option<Week> {
        let range = range.into().unwrap_or_default();
        self.read(WeekFilter::new().in_range(range))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Month> {
    pub fn as_month(self, range: impl Into<Option<DatespanRange>>) -> Option<Month> {
        let range = range.into().unwrap_or_default();
        self.read(MonthFilter::new().in_range(range))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Datespan> {
    pub fn as_datespan(self, range: impl Into<Option<DatespanRange>>) -> Option<Datespan> {
        let range = range.into().unwrap_or_default();
        self.read(DatespanFilter::new().in_range(range))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Value> {
    pub fn as_json(self) -> Option<Value> {
        let filter = self.reader.config.json_filter();
        self.read(filter)
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Vec<String>> {
    pub fn as_array(self) -> Option<Vec<String>> {
        let filter = self.reader.config.array_filter();
        self.read(filter)
    }

    pub fn as_array_separated_by(self, separator: &str) -> Option<Vec<String>> {
        self.read(crate::filters::ArrayFilter::separated_by(separator))
    }

    pub fn if_are_one_of<I, St>(self, allowed: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = St>,
        St: Into<String>,
    {
        self.read(one_of_list_filter(allowed))
    }
}

impl<S: ErrorSink + ?Sized> DefaultingReader<'_, S, Url> {
    pub fn as_http_uri(self) -> Option<Url> {
        self.read(HttpUriFilter)
    }

    pub fn as_existing_http_uri<R: HostResolver>(self, resolver: R) -> Option<Url> {
        self.read(ExistingHttpUriFilter::new(resolver))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::foundation::SharedParamErrors;

    fn param(value: Value) -> Param {
        Param::new("p", value)
    }

    #[test]
    fn absent_without_default_is_none() {
        let mut errors = ParamErrors::new();
        assert_eq!(ValueReader::new(&mut errors, Param::null("p")).as_int(None), None);
        assert!(!errors.exist());
    }

    #[test]
    fn required_ignores_default() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, Param::null("p"))
            .required()
            .defaulting_to(5_i64)
            .as_int(None);
        assert_eq!(value, None);
        assert!(errors.exist_for_with_id("p", ids::FIELD_EMPTY));
        assert_eq!(errors.get_for("p").len(), 1);
    }

    #[test]
    fn required_empty_string_is_absent() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, param(json!(""))).required().as_string(None);
        assert_eq!(value, None);
        assert!(errors.exist_for_with_id("p", ids::FIELD_EMPTY));
    }

    #[test]
    fn custom_absence_id() {
        let mut errors = ParamErrors::new();
        ValueReader::new(&mut errors, Param::null("p"))
            .required_with("TERMS_NOT_ACCEPTED")
            .as_bool();
        assert!(errors.exist_for_with_id("p", "TERMS_NOT_ACCEPTED"));
    }

    #[test]
    fn invalid_value_never_uses_default() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, param(json!("abc")))
            .defaulting_to(7_i64)
            .as_int(None);
        assert_eq!(value, None);
        assert!(errors.exist_for_with_id("p", ids::INTEGER_INVALID));
    }

    #[test]
    fn bool_default_bypasses_required() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, Param::null("p"))
            .required()
            .defaulting_to(true)
            .as_bool();
        assert_eq!(value, Some(true));
        assert!(!errors.exist());
    }

    #[test]
    fn required_bool_without_default_is_empty() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, Param::null("p")).required().as_bool();
        assert_eq!(value, None);
        assert!(errors.exist_for_with_id("p", ids::FIELD_EMPTY));
    }

    #[test]
    fn present_but_empty_value_on_required_reader() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, param(json!(" "))).required().as_int(None);
        assert_eq!(value, None);
        assert!(errors.exist_for_with_id("p", ids::FIELD_EMPTY));
    }

    #[test]
    fn configured_separator() {
        let config = FilterConfig::default().with_array_separator(";");
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, param(json!("a;b")))
            .configured(&config)
            .as_array();
        assert_eq!(value, Some(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn validation_accessors_record_their_ids() {
        let mut errors = ParamErrors::new();
        assert_eq!(
            ValueReader::new(&mut errors, Param::new("color", "red")).if_is_one_of(["red"]),
            Some("red".to_owned())
        );
        ValueReader::new(&mut errors, Param::new("color", "blue")).if_is_one_of(["red"]);
        ValueReader::new(&mut errors, Param::new("ip", "1.2.3")).if_is_ip_address();
        let zip = Regex::new(r"^\d{5}$").unwrap();
        ValueReader::new(&mut errors, Param::new("zip", "123")).if_satisfies_regex(&zip);

        assert!(errors.exist_for_with_id("color", ids::FIELD_NO_SELECT));
        assert!(errors.exist_for_with_id("ip", ids::INVALID_IP_ADDRESS));
        assert!(errors.exist_for_with_id("zip", ids::FIELD_WRONG_VALUE));
    }

    #[test]
    fn multi_select_reads_every_item() {
        let mut errors = ParamErrors::new();
        let raw = json!(["red", "blue"]);

        let single = ValueReader::new(&mut errors, param(raw.clone())).if_is_one_of(["red", "blue"]);
        assert_eq!(single, None);
        assert!(errors.exist_for_with_id("p", ids::FIELD_NO_SELECT));

        let mut errors = ParamErrors::new();
        let many = ValueReader::new(&mut errors, param(raw)).if_are_one_of(["red", "blue"]);
        assert_eq!(many, Some(vec!["red".to_owned(), "blue".to_owned()]));
        assert!(!errors.exist());
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, param(json!("")))
            .defaulting_to(21_i64)
            .as_int(None);
        assert_eq!(value, Some(21));
        assert!(!errors.exist());
    }

    #[test]
    fn with_validator_attaches_details() {
        let mut errors = ParamErrors::new();
        let even = |v: &Value| v.as_i64().is_some_and(|n| n % 2 == 0);
        ValueReader::new(&mut errors, param(json!(3))).with_validator(even, "NOT_EVEN", [("given", 3_i64)]);
        let error = errors.get_for_with_id("p", "NOT_EVEN").unwrap();
        assert_eq!(error.detail("given"), Some(&Detail::Int(3)));
    }

    #[test]
    fn unsecure_returns_raw_value() {
        let mut errors = ParamErrors::new();
        let raw = ValueReader::new(&mut errors, param(json!("<b>\0</b>"))).required().unsecure();
        assert_eq!(raw, json!("<b>\0</b>"));
        assert!(!errors.exist());
    }

    #[test]
    fn shared_sink_collects_errors() {
        let mut shared = SharedParamErrors::new();
        ValueReader::new(&mut shared, Param::new("n", "x")).as_int(None);
        assert!(shared.snapshot().exist_for_with_id("n", ids::INTEGER_INVALID));
    }

    #[test]
    fn defaulting_with_filter() {
        let mut errors = ParamErrors::new();
        let value = ValueReader::new(&mut errors, Param::null("p"))
            .defaulting_to(3_i64)
            .with_filter(IntegerFilter);
        assert_eq!(value, Some(3));
    }
}
