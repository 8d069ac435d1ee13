//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_input::validator;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub Digits;
//!     rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
//!     fn digits();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(PartialEq, Eq, Hash)]
//!     pub Prefixed { prefix: String };
//!     rule(self, input) { input.starts_with(self.prefix.as_str()) }
//!     fn prefixed(prefix: String);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a scalar validator: struct definition, `Validator`
/// implementation, constructor, and factory function.
///
/// The rule sees the scalar string form of the raw value (see
/// [`scalar_str`](crate::foundation::scalar_str)). Null, arrays and objects
/// never satisfy a rule generated by this macro.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotBlank;
///     rule(input) { !input.trim().is_empty() }
///     fn not_blank();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MaxChars { max: usize };
///     rule(self, input) { input.chars().count() <= self.max }
///     fn max_chars(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Contains { needle: String };
///     rule(self, input) { input.contains(self.needle.as_str()) }
///     new(needle: impl Into<String>) { Self { needle: needle.into() } }
///     fn contains(needle: impl Into<String>);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub Matches { pattern: regex::Regex };
///     rule(self, input) { self.pattern.is_match(input) }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared Validator impl for struct variants ────────────────────────
    (@impl $name:ident, $self_:ident, $inp:ident, $rule:block) => {
        impl $crate::foundation::Validator for $name {
            fn validate(&$self_, value: &$crate::Value) -> bool {
                $crate::foundation::scalar_str(value).is_some_and(|scalar| {
                    let $inp: &str = &scalar;
                    $rule
                })
            }
        }
    };

    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validator for $name {
            fn validate(&self, value: &$crate::Value) -> bool {
                $crate::foundation::scalar_str(value).is_some_and(|scalar| {
                    let $inp: &str = &scalar;
                    $rule
                })
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $self_, $inp, $rule);
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name, $self_, $inp, $rule);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $self_, $inp, $rule);
    };
}
