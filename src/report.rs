//! Error page presenter.
//!
//! Writes a generic error document in place of the requested content.
//! The reporter tracks whether it is already reporting; an error raised
//! while an error page is being written escalates to
//! [`ReportError::Nested`] instead of recursing.

use std::cell::Cell;
use std::error::Error as StdError;
use std::io::{self, Write};

use html_escape::encode_text;
use thiserror::Error;

/// Failures of the presenter itself.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An error was reported while another report was in progress.
    /// Callers treat this as fatal.
    #[error("nested error while reporting: {message}")]
    Nested { message: String },
    /// The error page could not be written.
    #[error("failed to write error page")]
    Io(#[from] io::Error),
}

/// Presenter for terminal render errors.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    handling: Cell<bool>,
}

/// Clears the handling flag when a report finishes, however it finishes.
struct HandlingGuard<'a>(&'a Cell<bool>);

impl Drop for HandlingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ErrorReporter {
    /// Create an idle reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a report is in progress.
    pub fn is_handling(&self) -> bool {
        self.handling.get()
    }

    /// Write the error page for `error` to `out`.
    pub fn report<W>(&self, error: &dyn StdError, out: &mut W) -> Result<(), ReportError>
    where
        W: Write + ?Sized,
    {
        if self.handling.replace(true) {
            log::error!("nested error while reporting: {error}");
            return Err(ReportError::Nested {
                message: error.to_string(),
            });
        }
        let _guard = HandlingGuard(&self.handling);

        log::error!("{}", error_chain(error));
        out.write_all(error_page(&error.to_string()).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Render the generic error document for `message`.
pub fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<title>An Error Occurred</title>
<meta charset=\"utf-8\">
<style>
body {{ font-family: sans-serif; margin: 40px; }}
.error {{ color: #721c24; background: #f8d7da; padding: 20px; border-radius: 5px; }}
</style>
</head>
<body>
<div class=\"error\">
<h1>An Error Occurred</h1>
<p>{}</p>
</div>
</body>
</html>
",
        encode_text(message)
    )
}

/// Format an error with its sources, outermost first.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
