use motif_derive::motif_error;
use std::borrow::Cow;

#[motif_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Lookup failed{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), DemoError> {
    let io = std::io::Error::other("disk gone");
    Err(io).context("opening the garage")
}

fn main() {
    let err = open().unwrap_err();
    assert_eq!(err.to_string(), "IO error (opening the garage): disk gone");

    let missing: Result<(), DemoError> =
        Err(DemoError::Missing { key: "Hovercraft".to_owned(), context: None });
    let err = missing.context("creating a car").unwrap_err();
    assert_eq!(err.to_string(), "Lookup failed (creating a car): Hovercraft");

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
