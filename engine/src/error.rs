//! Error types for the binding engine.
//!
//! Provides a unified error type covering all failure modes of a parse:
//! positional shortfalls, option/value pairing defects, conversion failures,
//! and schema problems surfaced at resolution time.

use command_bind_core::{TypeDescriptor, UnknownSlot, ValidationError};
use thiserror::Error;

/// Errors raised during schema resolution or token binding.
///
/// Every failure aborts the remainder of the parse at the first violation;
/// the dispatcher that invoked the engine is responsible for rendering a
/// usage message and exit code from it.
///
/// # Examples
///
/// ```
/// use command_bind_engine::BindError;
///
/// let err = BindError::MissingRequiredArgument("source".into());
/// assert_eq!(err.to_string(), "missing required argument `source`");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// A positional-looking token was given to a command with zero argument
    /// slots.
    #[error("no positional arguments declared, cannot accept `{0}`")]
    NoArgumentsDeclared(String),

    /// Fewer positional tokens than required slots before the first option
    /// token. Carries the first unmet slot's name.
    #[error("missing required argument `{0}`")]
    MissingRequiredArgument(String),

    /// A value token appeared while no option slot was pending.
    #[error("stray value `{0}` is not preceded by an option")]
    DanglingValue(String),

    /// An option requiring a value reached end-of-input or another option
    /// token before receiving one. Carries the option token as typed.
    #[error("option `{0}` expects a value")]
    UnboundOptionValue(String),

    /// The token cannot convert to the slot's declared type.
    #[error("cannot parse `{token}` as {target}")]
    UnparseableValue {
        /// Declared target type of the slot.
        target: TypeDescriptor,
        /// The offending token.
        token: String,
    },

    /// The slot declares a type outside the supported scalar/enum/nullable
    /// set.
    #[error("slot type {0} is not supported for binding")]
    UnsupportedType(TypeDescriptor),

    /// Eager schema validation failed at first resolution.
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] ValidationError),

    /// The command implementation rejected a slot name its schema declares.
    #[error(transparent)]
    UnknownSlot(#[from] UnknownSlot),
}

/// Convenience alias for results with [`BindError`].
pub type Result<T> = std::result::Result<T, BindError>;
