use std::borrow::Cow;

#[foundry_derive::foundry_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown tag '{tag}'{}", format_context(.context))]
    UnknownTag { tag: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn unknown(tag: &str) -> Result<(), SampleError> {
    Err(SampleError::UnknownTag { tag: tag.to_owned(), context: None })
}

#[test]
fn foundry_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}

#[test]
fn context_is_attached_to_own_variants() {
    let err = unknown("glitter").context("tagged creator").expect_err("must fail");

    assert_eq!(err.to_string(), "Unknown tag 'glitter' (tagged creator)");
    assert_eq!(err.kind(), "UnknownTag");
}

#[test]
fn source_errors_convert_with_context() {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));

    let err = io.context("writing showcase").expect_err("must fail");

    assert!(matches!(err, SampleError::Io { context: Some(_), .. }));
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.to_string(), "IO error (writing showcase): disk gone");
}

#[test]
fn strings_fall_back_to_internal() {
    let err: SampleError = "unexpected".into();
    assert_eq!(err.kind(), "Internal");
    assert_eq!(err.to_string(), "Internal error: unexpected");

    let err = SampleError::from(format!("code {}", 7));
    assert_eq!(err.to_string(), "Internal error: code 7");
}
