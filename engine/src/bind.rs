//! Positional and option binding passes.
//!
//! Binding is one linear pass over an in-memory token list, split in two:
//! the positional pass consumes the leading non-option tokens into
//! [`ArgumentSlot`]s in position order and checks required coverage, then the
//! option pass walks the remainder pairing option tokens with their values.
//!
//! The option pass threads an explicit pending-option state through the
//! loop. Its transitions are total: a value with no pending option is
//! [`BindError::DanglingValue`], a pending option that never receives its
//! value is [`BindError::UnboundOptionValue`]. When the same slot is
//! targeted twice the later value overwrites the earlier one.
//!
//! [`ArgumentSlot`]: command_bind_core::ArgumentSlot

use tracing::debug;

use command_bind_core::{BoundValue, Command, CommandSchema, OptionSlot};

use crate::convert::convert;
use crate::error::{BindError, Result};
use crate::resolve::resolved;

/// Binds `tokens` onto `command`, resolving (and caching) its schema first.
///
/// On success every matched slot has been written in place; on failure the
/// command is left partially bound and the error names the first violation.
///
/// # Examples
///
/// ```
/// use command_bind_core::*;
/// use command_bind_engine::bind;
///
/// #[derive(Default)]
/// struct Copy {
///     source: String,
///     verbose: bool,
/// }
///
/// impl Command for Copy {
///     fn schema() -> CommandSchema {
///         CommandSchema::new("copy")
///             .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
///             .with_option(OptionSlot::flag("-v|--verbose"))
///     }
///
///     fn bind_argument(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
///         match (name, value) {
///             ("source", BoundValue::Text(path)) => self.source = path,
///             _ => return Err(UnknownSlot(name.to_string())),
///         }
///         Ok(())
///     }
///
///     fn bind_option(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
///         match (name, value) {
///             ("--verbose", BoundValue::Bool(on)) => self.verbose = on,
///             _ => return Err(UnknownSlot(name.to_string())),
///         }
///         Ok(())
///     }
/// }
///
/// let tokens = vec!["file.txt".to_string(), "-v".to_string()];
/// let mut cmd = Copy::default();
/// bind(&mut cmd, &tokens).unwrap();
///
/// assert_eq!(cmd.source, "file.txt");
/// assert!(cmd.verbose);
/// ```
pub fn bind<C: Command + 'static>(command: &mut C, tokens: &[String]) -> Result<()> {
    let schema = resolved::<C>()?;
    bind_with_schema(command, &schema, tokens)
}

/// Binds `tokens` onto `command` against an explicit schema.
///
/// Skips resolution and eager validation; callers own the schema's
/// invariants. Useful when schemas are constructed dynamically rather than
/// declared on the command type.
pub fn bind_with_schema<C: Command>(
    command: &mut C,
    schema: &CommandSchema,
    tokens: &[String],
) -> Result<()> {
    let remainder = bind_arguments(command, schema, tokens)?;
    bind_options(command, schema, remainder)
}

/// Positional pass: consumes the leading non-option tokens into argument
/// slots in position order and returns the unconsumed remainder.
fn bind_arguments<'t, C: Command>(
    command: &mut C,
    schema: &CommandSchema,
    tokens: &'t [String],
) -> Result<&'t [String]> {
    if schema.arguments.is_empty() {
        return match tokens.first() {
            Some(first) if !schema.is_option(first) => {
                Err(BindError::NoArgumentsDeclared(first.clone()))
            }
            _ => Ok(tokens),
        };
    }

    let mut bound = 0;
    for token in tokens {
        if bound == schema.arguments.len() || schema.is_option(token) {
            break;
        }
        let slot = &schema.arguments[bound];
        let value = convert(&slot.ty, token)?;
        debug!(argument = %slot.name, token = %token, "Bound positional argument");
        command.bind_argument(&slot.name, value)?;
        bound += 1;
    }

    if let Some(unmet) = schema.arguments.iter().skip(bound).find(|slot| slot.required) {
        return Err(BindError::MissingRequiredArgument(unmet.name.clone()));
    }

    Ok(&tokens[bound..])
}

/// An option token seen without its value yet, remembered as typed.
struct PendingValue<'a> {
    slot: &'a OptionSlot,
    token: &'a str,
}

/// Option pass: pairs option tokens with their values over the remainder.
fn bind_options<C: Command>(
    command: &mut C,
    schema: &CommandSchema,
    tokens: &[String],
) -> Result<()> {
    let mut pending: Option<PendingValue<'_>> = None;

    for token in tokens {
        match schema.find_option(token) {
            Some(slot) => {
                if let Some(unfed) = pending.take() {
                    return Err(BindError::UnboundOptionValue(unfed.token.to_string()));
                }
                if slot.is_flag() {
                    debug!(option = %slot.canonical_name(), "Bound flag");
                    command.bind_option(slot.canonical_name(), BoundValue::Bool(true))?;
                } else {
                    pending = Some(PendingValue { slot, token });
                }
            }
            None => match pending.take() {
                Some(unfed) => {
                    let value = convert(&unfed.slot.ty, token)?;
                    debug!(option = %unfed.slot.canonical_name(), token = %token, "Bound option value");
                    command.bind_option(unfed.slot.canonical_name(), value)?;
                }
                None => return Err(BindError::DanglingValue(token.clone())),
            },
        }
    }

    if let Some(unfed) = pending {
        return Err(BindError::UnboundOptionValue(unfed.token.to_string()));
    }

    Ok(())
}
