//! Built-in validators
//!
//! Validators are total predicates over raw values: wrong-typed input,
//! null included, is simply invalid.
//!
//! - **content**: [`ContainsValidator`], [`EqualValidator`], [`OneOfValidator`], [`RegexValidator`]
//! - **network**: [`IpAddressValidator`], [`IpV4Validator`], [`IpV6Validator`],
//!   [`HttpUriValidator`], [`ExistingHttpUriValidator`]
//! - **mail**: [`MailValidator`]

mod content;
mod mail;
mod network;

pub use content::{
    ContainsValidator, EqualValidator, OneOfValidator, RegexValidator, contains, equal_to,
    one_of, regex,
};
pub use mail::{MailValidator, mail_address};
pub use network::{
    ExistingHttpUriValidator, HostResolver, HttpUriValidator, IpAddressValidator, IpV4Validator,
    IpV6Validator, SystemResolver, http_uri, ip_address, ip_v4_address, ip_v6_address,
};
