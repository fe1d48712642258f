#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Motif crates.
//!
//! * [`macro@motif_error`] turns an enum into a `thiserror` error with context helpers.
//! * [`macro@entity`] turns a plain struct into a buildable entity with a fluent configurator.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros in
//! doctests; the `tests/ui` cases compile them for real.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Defines a domain error enum.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to results of every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Applied to an enum with named-field variants only.
/// 2. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[motif_derive::motif_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("reading the garage manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn motif_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Turns a struct with named fields into a buildable entity.
///
/// # Generated Items
///
/// * `#[derive(Debug, Clone, Default, PartialEq)]` for whichever of those is missing.
///   Unset fields therefore hold their type's default.
/// * `set_<field>(&mut self, value)` for every field. `String` fields accept
///   `impl Into<String>`.
/// * `<field>(&self)` accessors: `&str` for strings, by value for primitive scalars,
///   by reference otherwise.
/// * `describe(&self) -> String` and a matching `Display` impl: an optional title line,
///   then `Label: value` per field in declaration order, separated by `\n`.
/// * `<Name>Builder`, a consuming fluent configurator with one chainable method per field
///   and `build(self) -> Name`.
///
/// # Requirements
///
/// 1. A non-generic struct with named fields.
/// 2. Every field type implements `Display`, since `describe` prints it. An
///    `Option<String>` field, for example, is reported at the field's type.
/// 3. No field is named `build`, `builder`, `describe` or `new`; those names belong to the
///    generated methods.
///
/// # Arguments
///
/// * `title = "..."`: heading rendered before the fields.
/// * `#[describe(label = "...")]` on a field overrides its label, which otherwise is the
///   field name in Title Case.
///
/// # Example
///
/// ```rust,ignore
/// #[motif_derive::entity(title = "Car Details:")]
/// pub struct Car {
///     make: String,
///     model: String,
///     year: i32,
///     color: String,
/// }
///
/// let car = Car::builder().make("Toyota").model("Camry").year(2023).color("Blue").build();
/// assert_eq!(car.describe(), "Car Details:\nMake: Toyota\nModel: Camry\nYear: 2023\nColor: Blue");
/// ```
#[proc_macro_attribute]
pub fn entity(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::entity::expand(args.into(), input).into()
}
