use thiserror::Error;

/// Errors raised by the crate-private accessors of [`crate::Option`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum OptionError {
    /// The raw value was requested from an empty option.
    #[error("get called on an empty option")]
    EmptyAccess,
}
