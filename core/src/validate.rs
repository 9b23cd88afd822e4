//! Schema validation.
//!
//! Validates structural invariants of command schemas, catching errors such
//! as gapped or duplicated argument positions, optional arguments declared
//! before required ones, and malformed or overlapping option templates
//! before they cause downstream binding issues.
//!
//! # Examples
//!
//! ```
//! use command_bind_core::*;
//!
//! let schema = CommandSchema::new("copy")
//!     .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
//!     .with_option(OptionSlot::flag("-v|--verbose"));
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: template member missing its leading dash
//! let bad = CommandSchema::new("copy")
//!     .with_option(OptionSlot::flag("v|--verbose"));
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandSchema, OptionSlot};

/// Schema validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty or whitespace-only.
    #[error("schema command cannot be empty")]
    EmptyCommandName,
    /// An argument slot has an empty display name.
    #[error("argument at position {0} has no name")]
    EmptyArgumentName(usize),
    /// Two argument slots share a position.
    #[error("duplicate argument position: {0}")]
    DuplicatePosition(usize),
    /// Argument positions do not form a contiguous sequence from 0 in
    /// declaration order.
    #[error("argument positions must run 0.. in order, found {0}")]
    NonContiguousPosition(usize),
    /// A required argument is declared after an optional one.
    #[error("required argument `{0}` follows an optional argument")]
    RequiredAfterOptional(String),
    /// An option slot has no templates.
    #[error("option must define at least one template")]
    MissingOptionTemplate,
    /// A template member is empty or not dash-prefixed (e.g. `"v"` instead
    /// of `"-v"`).
    #[error("invalid option template: `{0}`")]
    InvalidTemplate(String),
    /// Two option slots in the same schema share a template.
    #[error("duplicate option template: `{0}`")]
    DuplicateTemplate(String),
}

/// Validates a command schema.
///
/// Checks the command name, argument position invariants (gap-free,
/// duplicate-free, required-before-optional), and option template invariants
/// (non-empty, dash-prefixed, mutually disjoint). Returns at the first
/// violation, matching the binder's fail-fast error model.
///
/// The help and version templates are checked with the same format rule as
/// option templates.
///
/// # Examples
///
/// ```
/// use command_bind_core::*;
///
/// // Optional slot before a required one breaks the prefix invariant.
/// let schema = CommandSchema::new("copy")
///     .with_argument(ArgumentSlot::optional(0, "pattern", TypeDescriptor::Text))
///     .with_argument(ArgumentSlot::required(1, "source", TypeDescriptor::Text));
///
/// let errors = validate_schema(&schema);
/// assert!(matches!(errors[0], ValidationError::RequiredAfterOptional(_)));
/// ```
pub fn validate_schema(schema: &CommandSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if schema.command.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    errors.extend(validate_arguments(schema));
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_options(&schema.options));
    if !errors.is_empty() {
        return errors;
    }

    for template in [&schema.help_template, &schema.version_template] {
        if let Some(bad) = first_invalid_member(template) {
            errors.push(ValidationError::InvalidTemplate(bad.to_string()));
            return errors;
        }
    }

    errors
}

fn validate_arguments(schema: &CommandSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for slot in &schema.arguments {
        if slot.name.trim().is_empty() {
            errors.push(ValidationError::EmptyArgumentName(slot.position));
            return errors;
        }
        if !seen.insert(slot.position) {
            errors.push(ValidationError::DuplicatePosition(slot.position));
            return errors;
        }
    }

    for (index, slot) in schema.arguments.iter().enumerate() {
        if slot.position != index {
            errors.push(ValidationError::NonContiguousPosition(slot.position));
            return errors;
        }
    }

    let mut optional_seen = false;
    for slot in &schema.arguments {
        if slot.required && optional_seen {
            errors.push(ValidationError::RequiredAfterOptional(slot.name.clone()));
            return errors;
        }
        optional_seen |= !slot.required;
    }

    errors
}

fn validate_options(options: &[OptionSlot]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for slot in options {
        if slot.templates.is_empty() {
            errors.push(ValidationError::MissingOptionTemplate);
            return errors;
        }

        for template in &slot.templates {
            if !is_valid_member(template) {
                errors.push(ValidationError::InvalidTemplate(template.clone()));
                return errors;
            }
            if !seen.insert(template.as_str()) {
                errors.push(ValidationError::DuplicateTemplate(template.clone()));
                return errors;
            }
        }
    }

    errors
}

fn first_invalid_member(template: &str) -> Option<&str> {
    template.split('|').find(|member| !is_valid_member(member))
}

fn is_valid_member(member: &str) -> bool {
    member.starts_with('-') && member.len() >= 2
}

#[cfg(test)]
mod tests {
    use crate::{ArgumentSlot, TypeDescriptor};

    use super::*;

    fn base() -> CommandSchema {
        CommandSchema::new("copy")
    }

    #[test]
    fn test_validate_accepts_valid_schema() {
        let schema = base()
            .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
            .with_argument(ArgumentSlot::optional(1, "dest", TypeDescriptor::Text))
            .with_option(OptionSlot::flag("-v|--verbose"))
            .with_option(OptionSlot::with_value("-o|--out", TypeDescriptor::Text));

        assert!(validate_schema(&schema).is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_command_name() {
        let schema = CommandSchema::new("  ");

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::EmptyCommandName]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_position() {
        let schema = base()
            .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
            .with_argument(ArgumentSlot::required(0, "dest", TypeDescriptor::Text));

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::DuplicatePosition(0)]
        );
    }

    #[test]
    fn test_validate_rejects_position_gap() {
        let schema = base()
            .with_argument(ArgumentSlot::required(0, "source", TypeDescriptor::Text))
            .with_argument(ArgumentSlot::required(2, "dest", TypeDescriptor::Text));

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::NonContiguousPosition(2)]
        );
    }

    #[test]
    fn test_validate_rejects_required_after_optional() {
        let schema = base()
            .with_argument(ArgumentSlot::optional(0, "pattern", TypeDescriptor::Text))
            .with_argument(ArgumentSlot::required(1, "source", TypeDescriptor::Text));

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::RequiredAfterOptional("source".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_bare_template() {
        let schema = base().with_option(OptionSlot::flag("verbose"));

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::InvalidTemplate("verbose".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_overlapping_templates() {
        let schema = base()
            .with_option(OptionSlot::flag("-v|--verbose"))
            .with_option(OptionSlot::with_value("-v|--value", TypeDescriptor::Text));

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::DuplicateTemplate("-v".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_bad_help_template() {
        let schema = base().with_help_template("-h|help");

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::InvalidTemplate("help".to_string())]
        );
    }
}
