//! Fail-fast reporting for external device calls.
//!
//! Device libraries report failure as a negative status code. These helpers
//! treat such a failure as unrecoverable: print `file:line: message` to
//! stderr and exit with status 1. The option parser never uses them.

use std::fmt::Display;
use std::io;

/// A negative status code returned by an external call.
#[derive(Debug, thiserror::Error)]
#[error("status {code}: {source}")]
pub struct StatusError {
    pub code: i64,
    #[source]
    pub source: io::Error,
}

/// Negative codes are errors carrying the last OS error; anything else is
/// returned as the success value.
pub fn check_status<T: Into<i64>>(code: T) -> Result<i64, StatusError> {
    let code = code.into();
    if code < 0 {
        Err(StatusError {
            code,
            source: io::Error::last_os_error(),
        })
    } else {
        Ok(code)
    }
}

/// The message printed before exiting.
pub fn report<E: Display>(err: &E, file: &str, line: u32) -> String {
    format!("{}:{}: {}", file, line, err)
}

/// Unwrap `result` or terminate the process. Prefer the [`exit_on_error!`]
/// macro, which fills in the call site.
///
/// [`exit_on_error!`]: crate::exit_on_error
pub fn exit_on_error<T, E: Display>(result: Result<T, E>, file: &str, line: u32) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(file, line, "fatal: {}", err);
            eprintln!("{}", report(&err, file, line));
            std::process::exit(1);
        }
    }
}

/// Evaluate a `Result`; on `Err` print the call site and message, then exit.
#[macro_export]
macro_rules! exit_on_error {
    ($result:expr) => {
        $crate::fatal::exit_on_error($result, file!(), line!())
    };
}

/// Check a C-style status code; a negative value prints the call site and
/// the last OS error, then exits.
#[macro_export]
macro_rules! exit_on_status {
    ($code:expr) => {
        $crate::fatal::exit_on_error($crate::fatal::check_status($code), file!(), line!())
    };
}
