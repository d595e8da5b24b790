use std::borrow::Cow;

/// Errors surfaced by showcases and the machinery around them.
#[foundry_derive::foundry_error]
pub enum ShowcaseError {
    /// Writing showcase output failed.
    #[error("Output error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The configuration sources could not be read or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A configuration value is well-formed but not meaningful (e.g., an unknown family).
    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A pattern slice reported its own error.
    #[error("Pattern error{}: {source}", format_context(.context))]
    Pattern {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal showcase error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ShowcaseError {
    /// Wraps a pattern-specific error, tagging it with the showcase name.
    pub fn pattern(
        source: impl std::error::Error + Send + Sync + 'static,
        showcase: &'static str,
    ) -> Self {
        Self::Pattern { source: Box::new(source), context: Some(showcase.into()) }
    }
}
