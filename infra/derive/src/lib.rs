#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the Foundry workspace.
//!
//! Only one macro lives here today: [`macro@foundry_error`], which turns a plain enum into
//! a `thiserror` error with context support. Consumers depend on this crate and on
//! `thiserror` (the generated code refers to `::thiserror`).

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring the error enum of a crate.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * `ErrorName::kind(&self) -> &'static str` returning the variant name, for log fields.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. A variant with a source must carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use foundry_derive::foundry_error;
/// use std::borrow::Cow;
///
/// #[foundry_error]
/// pub enum FactoryError {
///     #[error("Unknown discriminator '{tag}'{}", format_context(.context))]
///     UnknownDiscriminator { tag: String, context: Option<Cow<'static, str>> },
///
///     #[error("Internal factory error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn pick(tag: &str) -> Result<(), FactoryError> {
///     Err(FactoryError::UnknownDiscriminator { tag: tag.to_owned(), context: None })
///         .context("tagged creator")
/// }
/// ```
#[proc_macro_attribute]
pub fn foundry_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
