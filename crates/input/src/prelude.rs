//! Prelude module for convenient imports.
//!
//! ```
//! use sieve_input::prelude::*;
//!
//! let mut errors = ParamErrors::new();
//! let flag = ValueReader::new(&mut errors, Param::new("flag", "yes")).as_bool();
//! assert_eq!(flag, Some(true));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    Detail, ErrorSet, ErrorSink, Filter, FilterExt, FilterMisuse, Filtered, LocalizedMessage,
    Param, ParamError, ParamErrors, SharedParamErrors, Validator, ids,
};

// ============================================================================
// RANGES AND SPANS
// ============================================================================

pub use crate::datespan::{CustomDatespan, Datespan, Day, Month, Span, Week};
pub use crate::range::{DateRange, DatespanRange, NumberRange, Range, StringLength};

// ============================================================================
// FILTERS AND VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::filters::*;
pub use crate::validators::{
    ContainsValidator, EqualValidator, ExistingHttpUriValidator, HostResolver, HttpUriValidator,
    IpAddressValidator, IpV4Validator, IpV6Validator, MailValidator, OneOfValidator,
    RegexValidator, SystemResolver,
};

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub use crate::config::{FilterConfig, PasswordPolicy};
pub use crate::params::{ParamSource, Params};
pub use crate::reader::{DefaultingReader, ValueReader};
pub use crate::value_validator::ValueValidator;
