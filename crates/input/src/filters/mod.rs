//! Built-in filters
//!
//! Each filter turns a raw [`Param`](crate::foundation::Param) into a typed
//! value. Filters are pure: they report errors in their
//! [`Filtered`](crate::foundation::Filtered) result and never touch the
//! param or a sink.
//!
//! | filter | output | errors |
//! |---|---|---|
//! | [`BoolFilter`] | `bool` | none |
//! | [`IntegerFilter`] | `i64` | `INTEGER_INVALID` |
//! | [`FloatFilter`] | `f64` | `FLOAT_INVALID` |
//! | [`StringFilter`] | `String` | none |
//! | [`TextFilter`] | `String` | none |
//! | [`DateFilter`] | `NaiveDateTime` | `DATE_INVALID` |
//! | [`SpanFilter`] | a [`Span`](crate::datespan::Span) | `DATE_INVALID` |
//! | [`JsonFilter`] | `serde_json::Value` | `JSON_*` |
//! | [`ArrayFilter`] | `Vec<String>` | none |
//! | [`HttpUriFilter`] | `url::Url` | `HTTP_URI_INCORRECT` |
//! | [`ExistingHttpUriFilter`] | `url::Url` | `HTTP_URI_*` |
//! | [`MailFilter`] | `String` | `MAILADDRESS_*` |
//! | [`PasswordFilter`] | `SecretString` | `PASSWORD*` |
//! | [`SecretFilter`] | `SecretString` | none |
//! | [`RangeFilter`] | inner output | range errors |
//! | [`ValidatingFilter`] | `String` | configured error |
//! | [`ValidatingListFilter`] | `Vec<String>` | configured error |

mod array;
mod boolean;
mod date;
mod json;
mod mail;
mod numeric;
mod password;
mod range;
mod string;
mod uri;
mod validating;

pub use array::{ArrayFilter, DEFAULT_ARRAY_SEPARATOR};
pub use boolean::BoolFilter;
pub use date::{DateFilter, DatespanFilter, DayFilter, MonthFilter, SpanFilter, WeekFilter};
pub use json::{DEFAULT_JSON_MAX_LENGTH, JsonFilter};
pub use mail::{MailFilter, mail_error};
pub use numeric::{FloatFilter, IntegerFilter};
pub use password::{PasswordChecker, PasswordFilter, SecretFilter, SimplePasswordChecker};
pub use range::RangeFilter;
pub use string::{StringFilter, TextFilter};
pub use uri::{ExistingHttpUriFilter, HttpUriFilter};
pub(crate) use uri::{host_resolves, parse_http_uri};
pub use validating::{ValidatingFilter, ValidatingListFilter};
