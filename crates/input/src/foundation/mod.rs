//! Core types and traits
//!
//! This module contains the building blocks every filter, validator and
//! reader works with:
//!
//! - **Values**: [`Param`], a named raw value
//! - **Errors**: [`ParamError`], [`ErrorSet`], [`ParamErrors`], [`Detail`]
//! - **Traits**: [`Filter`], [`Validator`], [`ErrorSink`]
//! - **Misuse**: [`FilterMisuse`] for mistakes in calling code
//!
//! # Architecture
//!
//! ## 1. Errors are values
//!
//! Invalid input never panics and never returns `Err`. A filter reports
//! what it found in its [`Filtered`] result; the reader copies those errors
//! into the session's [`ParamErrors`] under the parameter name.
//!
//! ```rust,ignore
//! let (value, errors) = IntegerFilter.apply(&Param::new("age", "abc")).into_parts();
//! assert!(value.is_none());
//! assert!(errors.contains("INTEGER_INVALID"));
//! ```
//!
//! ## 2. Composition
//!
//! Filters wrap filters. A range check is a filter around another one:
//!
//! ```rust,ignore
//! let adult = IntegerFilter.in_range(NumberRange::min(18));
//! ```
//!
//! ## 3. Templated messages
//!
//! Errors carry details, not prose. The presentation layer owns the
//! message catalog and fills placeholders:
//!
//! ```rust,ignore
//! let error = ParamError::new("VALUE_TOO_SMALL").with_detail("minNumber", 18_i64);
//! error.fill_message("must be at least {minNumber}", "en_EN");
//! ```

pub mod detail;
pub mod error;
pub mod errors;
pub mod misuse;
pub mod param;
pub mod traits;

pub use detail::Detail;
pub use error::{ErrorSet, LocalizedMessage, ParamError, ids};
pub use errors::{ErrorSink, ParamErrors, SharedParamErrors};
pub use misuse::FilterMisuse;
pub use param::{Param, scalar_str};
pub use traits::{Filter, FilterExt, Filtered, Validator};
