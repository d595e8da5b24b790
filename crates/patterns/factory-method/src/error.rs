use crate::product::SkincareKind;
use std::borrow::Cow;

/// Errors of the discriminator-dispatch creator.
#[foundry_derive::foundry_error]
pub enum FactoryError {
    /// The tag names no known product and the creator rejects unknown tags.
    #[error("Unknown discriminator '{tag}'{}", format_context(.context))]
    UnknownDiscriminator { tag: String, context: Option<Cow<'static, str>> },

    /// The tag is known but no constructor is registered for it.
    #[error("No constructor registered for '{kind}'{}", format_context(.context))]
    Unregistered { kind: SkincareKind, context: Option<Cow<'static, str>> },

    #[error("Internal factory error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
