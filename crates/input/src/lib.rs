//! # sieve-input
//!
//! Typed filtering and validation of raw request parameters.
//!
//! Raw, untyped input (strings, arrays, nulls) is turned into typed values
//! such as integers, dates, URIs, JSON documents or secrets. Bad input never
//! panics and never returns `Err`: it becomes a structured
//! [`ParamError`](foundation::ParamError) collected per parameter name, to
//! be rendered into localized messages later.
//!
//! ## Quick Start
//!
//! ```
//! use sieve_input::prelude::*;
//!
//! let params = Params::new().with("age", "17").with("tags", "foo, bar");
//! let mut errors = ParamErrors::new();
//!
//! let age = params.read("age", &mut errors).as_int(NumberRange::min(18_i64));
//! let tags = params.read("tags", &mut errors).as_array();
//! let page = params.read("page", &mut errors).defaulting_to(1_i64).as_int(None);
//!
//! assert_eq!(age, None);
//! assert_eq!(tags, Some(vec!["foo".to_owned(), "bar".to_owned()]));
//! assert_eq!(page, Some(1));
//!
//! let error = errors.get_for_with_id("age", "VALUE_TOO_SMALL").unwrap();
//! let message = error.fill_message("must be at least {minNumber}", "en");
//! assert_eq!(message.message(), "must be at least 18");
//! ```
//!
//! ## Building Blocks
//!
//! - [`Filter`](foundation::Filter): raw param to typed value plus errors, see [`filters`]
//! - [`Validator`](foundation::Validator): raw value to `bool`, see [`validators`]
//! - [`Range`](range::Range): min/max borders on filtered values
//! - [`ValueReader`](reader::ValueReader): absence, defaults and error recording
//! - [`ValueValidator`](value_validator::ValueValidator): one-shot predicates
//!
//! Use the [`validator!`] macro for scalar validators without boilerplate.

pub mod config;
pub mod datespan;
pub mod filters;
pub mod foundation;
mod macros;
pub mod params;
pub mod prelude;
pub mod range;
pub mod reader;
pub mod validators;
pub mod value_validator;

#[doc(hidden)]
pub use serde_json::Value;
