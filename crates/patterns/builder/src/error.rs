use std::borrow::Cow;

/// Errors of the builder slice.
#[foundry_derive::foundry_error]
pub enum BuilderError {
    /// The product was requested before any step ran, or was already taken.
    #[error("Invalid builder state{}: {message}", format_context(.context))]
    InvalidState { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal builder error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
