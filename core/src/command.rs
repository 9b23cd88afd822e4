//! The schema declaration interface between commands and the binding engine.

use thiserror::Error;

use crate::{BoundValue, CommandSchema};

/// Returned by a [`Command`] implementation that does not bind the named
/// slot.
///
/// Reaching this means the schema declares a slot the implementation's
/// `bind_*` match arms do not handle, which is a defect in the command type
/// itself; it is surfaced as a defined error rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command does not bind a slot named `{0}`")]
pub struct UnknownSlot(pub String);

/// A command type the engine can bind argv tokens onto.
///
/// Implementations declare their binding surface in [`schema`](Self::schema)
/// and accept converted values through
/// [`bind_argument`](Self::bind_argument) and
/// [`bind_option`](Self::bind_option). Arguments are addressed by their
/// declared display name, options by their canonical name (see
/// [`OptionSlot::canonical_name`](crate::OptionSlot::canonical_name)).
///
/// The instance stays owned by the caller for the whole parse; the engine
/// only mutates it through these two methods. `schema` is a pure query and
/// must return the same schema on every call, which is what makes per-type
/// caching of resolved schemas safe.
///
/// # Examples
///
/// ```
/// use command_bind_core::*;
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
/// let mut cmd = Copy::default();
/// cmd.bind_argument("source", BoundValue::Text("a.txt".into())).unwrap();
/// assert_eq!(cmd.source, "a.txt");
/// assert!(cmd.bind_argument("target", BoundValue::Text("b.txt".into())).is_err());
/// ```
pub trait Command {
    /// Declares the command's binding schema.
    fn schema() -> CommandSchema
    where
        Self: Sized;

    /// Writes a converted value into the positional argument named `name`.
    fn bind_argument(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot>;

    /// Writes a converted value into the option whose canonical name is
    /// `name`.
    fn bind_option(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot>;
}
