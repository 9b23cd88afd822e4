//! Schema type definitions for command slot modeling.
//!
//! This module defines the core data model used to describe a command's
//! binding surface: positional [`ArgumentSlot`]s, named [`OptionSlot`]s, and
//! the [`TypeDescriptor`] each slot converts its token into. The types are
//! designed for serialization with [`serde`] and can round-trip through JSON
//! for export and inspection by external tooling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default help template, matched verbatim against raw tokens.
pub const DEFAULT_HELP_TEMPLATE: &str = "-h|--help";

/// Default version template, matched verbatim against raw tokens.
pub const DEFAULT_VERSION_TEMPLATE: &str = "--version";

/// Target type of a slot.
///
/// Describes what a slot's token is converted into during binding. Scalar
/// variants map to one concrete Rust type each; `Enum` carries its member
/// names; `Nullable` wraps any inner descriptor; `Structured` names a type
/// the binder does not support (conversion fails rather than attempting any
/// structured deserialization).
///
/// # Examples
///
/// ```
/// use command_bind_core::TypeDescriptor;
///
/// let ty = TypeDescriptor::default();
/// assert_eq!(ty, TypeDescriptor::Text);
///
/// let level = TypeDescriptor::Enum(vec!["debug".into(), "info".into()]);
/// assert_eq!(level.to_string(), "enum[debug|info]");
///
/// let port = TypeDescriptor::Nullable(Box::new(TypeDescriptor::Integer));
/// assert_eq!(port.to_string(), "nullable integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TypeDescriptor {
    /// Boolean. As an option type this marks the slot as a flag.
    Bool,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Plain text, taken verbatim (the default).
    #[default]
    Text,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Calendar date in ISO-8601 form (`2024-01-15`).
    Date,
    /// Time of day (`14:30` or `14:30:05`).
    Time,
    /// Duration in human-readable form (`90s`, `2h 30m`).
    TimeSpan,
    /// Unique identifier in hyphenated hex form.
    Uuid,
    /// One of a fixed set of member names, matched exactly.
    Enum(Vec<String>),
    /// Optional wrapper; converts per the inner descriptor.
    Nullable(Box<TypeDescriptor>),
    /// A structured type the binder cannot convert. Binding a value to a
    /// slot with this descriptor always fails.
    Structured(String),
}

impl TypeDescriptor {
    /// True for the plain boolean descriptor.
    ///
    /// Option slots with this descriptor are flags: their presence binds
    /// `true` and no value token is consumed. A `Nullable(Bool)` option is
    /// *not* a flag and expects an explicit `true`/`false` token.
    pub fn is_bool(&self) -> bool {
        matches!(self, TypeDescriptor::Bool)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Bool => f.write_str("boolean"),
            TypeDescriptor::Integer => f.write_str("integer"),
            TypeDescriptor::Float => f.write_str("float"),
            TypeDescriptor::Text => f.write_str("text"),
            TypeDescriptor::Decimal => f.write_str("decimal"),
            TypeDescriptor::Date => f.write_str("date"),
            TypeDescriptor::Time => f.write_str("time"),
            TypeDescriptor::TimeSpan => f.write_str("time span"),
            TypeDescriptor::Uuid => f.write_str("uuid"),
            TypeDescriptor::Enum(members) => write!(f, "enum[{}]", members.join("|")),
            TypeDescriptor::Nullable(inner) => write!(f, "nullable {inner}"),
            TypeDescriptor::Structured(name) => write!(f, "structured type {name}"),
        }
    }
}

/// Schema for a positional argument.
///
/// Positional arguments are consumed from the front of the token sequence in
/// position order, before any option token. Positions must form a gap-free,
/// duplicate-free sequence from 0, and required arguments must precede
/// optional ones (both enforced by
/// [`validate_schema`](crate::validate_schema)).
///
/// # Examples
///
/// ```
/// use command_bind_core::{ArgumentSlot, TypeDescriptor};
///
/// let source = ArgumentSlot::required(0, "source", TypeDescriptor::Text);
/// assert!(source.required);
///
/// let dest = ArgumentSlot::optional(1, "dest", TypeDescriptor::Text)
///     .with_description("Destination path");
/// assert!(!dest.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSlot {
    /// 0-based position in the argument list.
    pub position: usize,
    /// Display name (e.g. shown in usage messages).
    pub name: String,
    /// Whether the argument must be supplied.
    pub required: bool,
    /// Target type the token converts into.
    pub ty: TypeDescriptor,
    /// Description (e.g. shown in usage messages).
    pub description: Option<String>,
}

impl ArgumentSlot {
    /// Creates a required positional argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_bind_core::{ArgumentSlot, TypeDescriptor};
    ///
    /// let slot = ArgumentSlot::required(0, "file", TypeDescriptor::Text);
    /// assert_eq!(slot.position, 0);
    /// assert!(slot.required);
    /// ```
    pub fn required(position: usize, name: &str, ty: TypeDescriptor) -> Self {
        Self {
            position,
            name: name.to_string(),
            required: true,
            ty,
            description: None,
        }
    }

    /// Creates an optional positional argument.
    pub fn optional(position: usize, name: &str, ty: TypeDescriptor) -> Self {
        Self {
            position,
            name: name.to_string(),
            required: false,
            ty,
            description: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// Schema for a named option.
///
/// An option is identified by a set of equivalent template strings split from
/// a `|`-delimited declaration (e.g. `"-s|--server"`). Boolean-typed options
/// are flags: their presence binds `true` and they consume no value token.
///
/// # Examples
///
/// ```
/// use command_bind_core::{OptionSlot, TypeDescriptor};
///
/// let verbose = OptionSlot::flag("-v|--verbose")
///     .with_description("Enable verbose output");
/// assert!(verbose.is_flag());
/// assert!(verbose.matches("-v"));
/// assert!(verbose.matches("--verbose"));
/// assert_eq!(verbose.canonical_name(), "--verbose");
///
/// let out = OptionSlot::with_value("-o|--out", TypeDescriptor::Text);
/// assert!(!out.is_flag());
/// assert!(!out.matches("--output"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSlot {
    /// Equivalent spellings for this option (e.g. `["-s", "--server"]`).
    pub templates: Vec<String>,
    /// Target type the value token converts into.
    pub ty: TypeDescriptor,
    /// Description (e.g. shown in usage messages).
    pub description: Option<String>,
}

impl OptionSlot {
    /// Creates a boolean flag option from a `|`-delimited template.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_bind_core::OptionSlot;
    ///
    /// let flag = OptionSlot::flag("-f|--force");
    /// assert_eq!(flag.templates, vec!["-f", "--force"]);
    /// ```
    pub fn flag(template: &str) -> Self {
        Self::with_value(template, TypeDescriptor::Bool)
    }

    /// Creates an option whose value token converts to `ty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_bind_core::{OptionSlot, TypeDescriptor};
    ///
    /// let port = OptionSlot::with_value("-p|--port", TypeDescriptor::Integer);
    /// assert_eq!(port.ty, TypeDescriptor::Integer);
    /// ```
    pub fn with_value(template: &str, ty: TypeDescriptor) -> Self {
        Self {
            templates: template.split('|').map(String::from).collect(),
            ty,
            description: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// True when this option is a flag (plain boolean type, no value token).
    pub fn is_flag(&self) -> bool {
        self.ty.is_bool()
    }

    /// Checks whether a token exactly equals one of this option's templates.
    pub fn matches(&self, token: &str) -> bool {
        self.templates.iter().any(|t| t == token)
    }

    /// Returns the canonical name (long form preferred, falls back to the
    /// first template).
    ///
    /// # Examples
    ///
    /// ```
    /// use command_bind_core::{OptionSlot, TypeDescriptor};
    ///
    /// let out = OptionSlot::with_value("-o|--out", TypeDescriptor::Text);
    /// assert_eq!(out.canonical_name(), "--out");
    ///
    /// let short_only = OptionSlot::flag("-q");
    /// assert_eq!(short_only.canonical_name(), "-q");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.templates
            .iter()
            .find(|t| t.starts_with("--"))
            .or_else(|| self.templates.first())
            .map(String::as_str)
            .unwrap_or("unknown")
    }
}

/// Complete binding schema for a command.
///
/// This is the primary type in the crate. It holds the command's ordered
/// positional [`ArgumentSlot`]s, its [`OptionSlot`] collection, and the help
/// and version templates the signal detector matches against. A schema is
/// derived once per command type and may be cached for the process lifetime.
///
/// # Examples
///
/// ```
/// use command_bind_core::*;
///
/// let schema = CommandSchema::new("copy")
///     .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
///     .with_argument(ArgumentSlot::optional(1, "dest", TypeDescriptor::Text))
///     .with_option(OptionSlot::flag("-v|--verbose"));
///
/// assert_eq!(schema.command, "copy");
/// assert!(schema.is_option("--verbose"));
/// assert!(!schema.is_option("source.txt"));
/// assert!(schema.matches_help_template("--help"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSchema {
    /// The command name (e.g. "copy", "connect").
    pub command: String,
    /// Short description of the command.
    pub description: Option<String>,
    /// Positional arguments in position order.
    pub arguments: Vec<ArgumentSlot>,
    /// Named options.
    pub options: Vec<OptionSlot>,
    /// `|`-delimited help template (defaults to [`DEFAULT_HELP_TEMPLATE`]).
    pub help_template: String,
    /// `|`-delimited version template (defaults to
    /// [`DEFAULT_VERSION_TEMPLATE`]).
    pub version_template: String,
}

impl CommandSchema {
    /// Creates an empty schema for the named command with default help and
    /// version templates.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_bind_core::CommandSchema;
    ///
    /// let schema = CommandSchema::new("status");
    /// assert!(schema.arguments.is_empty());
    /// assert_eq!(schema.help_template, "-h|--help");
    /// ```
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            description: None,
            arguments: Vec::new(),
            options: Vec::new(),
            help_template: DEFAULT_HELP_TEMPLATE.to_string(),
            version_template: DEFAULT_VERSION_TEMPLATE.to_string(),
        }
    }

    /// Adds a positional argument slot.
    pub fn with_argument(mut self, slot: ArgumentSlot) -> Self {
        self.arguments.push(slot);
        self
    }

    /// Adds an option slot.
    pub fn with_option(mut self, slot: OptionSlot) -> Self {
        self.options.push(slot);
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Overrides the `|`-delimited help template.
    pub fn with_help_template(mut self, template: &str) -> Self {
        self.help_template = template.to_string();
        self
    }

    /// Overrides the `|`-delimited version template.
    pub fn with_version_template(mut self, template: &str) -> Self {
        self.version_template = template.to_string();
        self
    }

    /// Finds the option slot one of whose templates exactly equals `token`.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_bind_core::*;
    ///
    /// let schema = CommandSchema::new("push")
    ///     .with_option(OptionSlot::with_value("-r|--remote", TypeDescriptor::Text));
    ///
    /// assert!(schema.find_option("-r").is_some());
    /// assert!(schema.find_option("--remote").is_some());
    /// assert!(schema.find_option("-x").is_none());
    /// ```
    pub fn find_option(&self, token: &str) -> Option<&OptionSlot> {
        self.options.iter().find(|slot| slot.matches(token))
    }

    /// True iff `token` exactly equals a template of some option slot.
    ///
    /// No prefix or fuzzy matching: `--verb` does not match `--verbose`.
    pub fn is_option(&self, token: &str) -> bool {
        self.find_option(token).is_some()
    }

    /// True iff `token` exactly equals a member of the help template set.
    pub fn matches_help_template(&self, token: &str) -> bool {
        template_contains(&self.help_template, token)
    }

    /// True iff `token` exactly equals a member of the version template set.
    pub fn matches_version_template(&self, token: &str) -> bool {
        template_contains(&self.version_template, token)
    }
}

/// Exact membership test against a `|`-delimited template declaration.
fn template_contains(template: &str, token: &str) -> bool {
    template.split('|').any(|t| t == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_slot_splits_templates() {
        let slot = OptionSlot::with_value("-s|--server", TypeDescriptor::Text);

        assert_eq!(slot.templates, vec!["-s", "--server"]);
        assert!(slot.matches("-s"));
        assert!(slot.matches("--server"));
        assert!(!slot.matches("--serve"));
        assert_eq!(slot.canonical_name(), "--server");
    }

    #[test]
    fn test_flag_option_is_flag() {
        let slot = OptionSlot::flag("-v|--verbose");

        assert!(slot.is_flag());
        assert_eq!(slot.ty, TypeDescriptor::Bool);
    }

    #[test]
    fn test_nullable_bool_option_is_not_flag() {
        let slot = OptionSlot::with_value(
            "--dry-run",
            TypeDescriptor::Nullable(Box::new(TypeDescriptor::Bool)),
        );

        assert!(!slot.is_flag());
    }

    #[test]
    fn test_schema_finds_options_exactly() {
        let schema = CommandSchema::new("copy")
            .with_option(OptionSlot::flag("-v|--verbose"))
            .with_option(OptionSlot::with_value("-o|--out", TypeDescriptor::Text));

        assert!(schema.is_option("-v"));
        assert!(schema.is_option("--out"));
        assert!(!schema.is_option("--ou"));
        assert!(!schema.is_option("out"));
    }

    #[test]
    fn test_schema_default_signal_templates() {
        let schema = CommandSchema::new("copy");

        assert!(schema.matches_help_template("-h"));
        assert!(schema.matches_help_template("--help"));
        assert!(!schema.matches_help_template("help"));
        assert!(schema.matches_version_template("--version"));
        assert!(!schema.matches_version_template("-V"));
    }

    #[test]
    fn test_schema_custom_signal_templates() {
        let schema = CommandSchema::new("copy")
            .with_help_template("-?|--usage")
            .with_version_template("-V|--version");

        assert!(schema.matches_help_template("-?"));
        assert!(!schema.matches_help_template("--help"));
        assert!(schema.matches_version_template("-V"));
    }

    #[test]
    fn test_type_descriptor_display() {
        assert_eq!(TypeDescriptor::Integer.to_string(), "integer");
        assert_eq!(
            TypeDescriptor::Enum(vec!["a".into(), "b".into()]).to_string(),
            "enum[a|b]"
        );
        assert_eq!(
            TypeDescriptor::Nullable(Box::new(TypeDescriptor::Uuid)).to_string(),
            "nullable uuid"
        );
    }

    #[test]
    fn test_schema_json_round_trip() {
        let schema = CommandSchema::new("copy")
            .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
            .with_option(OptionSlot::with_value("-o|--out", TypeDescriptor::Text));

        let json = serde_json::to_string(&schema).expect("schema should serialize");
        let back: CommandSchema = serde_json::from_str(&json).expect("schema should deserialize");

        assert_eq!(back, schema);
    }
}
