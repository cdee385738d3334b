use std::borrow::Cow;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use anyhow::Error;

/// Creates an ad-hoc error from a message. This type is private; externally
/// it only ever appears wrapped in an `anyhow::Error`.
pub fn generic_error(message: impl Into<Cow<'static, str>>) -> Error {
    GenericError(message.into()).into()
}

#[derive(Debug)]
struct GenericError(Cow<'static, str>);

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for GenericError {}
