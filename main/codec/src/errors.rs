use derive_more::*;
use std::fmt::{Debug, Display};

/// An error which can occur when converting from a type with a greater value range to one with a
/// smaller one.
#[derive(Debug, Clone, Eq, PartialEq, Display)]
#[display(fmt = "conversion from value [{}] failed: {}", value, message)]
pub struct TryFromGreaterError<V> {
    message: &'static str,
    value: V,
}

impl<V: Copy> TryFromGreaterError<V> {
    pub(crate) fn new(message: &'static str, value: V) -> TryFromGreaterError<V> {
        TryFromGreaterError { message, value }
    }

    /// Returns the value which couldn't be converted.
    pub fn value(&self) -> V {
        self.value
    }
}

impl<R: Copy + Display + Debug> std::error::Error for TryFromGreaterError<R> {}
