//! Help and version signal detection.
//!
//! Scans the raw, unconsumed token sequence for exact matches against a
//! schema's help or version template set, using the same matching rule as
//! option classification. Detection is read-only and independent of the
//! binding passes: the dispatcher queries it before attempting a full bind
//! and short-circuits into usage or version output on a hit, so a token
//! sequence that would fail binding can still signal help.

use command_bind_core::{Command, CommandSchema};

use crate::error::Result;
use crate::resolve::resolved;

/// True iff any token exactly equals a member of the schema's help template
/// set, wherever it appears in the sequence.
///
/// # Examples
///
/// ```
/// use command_bind_core::CommandSchema;
/// use command_bind_engine::signal::is_help_signal;
///
/// let schema = CommandSchema::new("copy");
/// let tokens = vec!["a.txt".to_string(), "--help".to_string()];
///
/// assert!(is_help_signal(&schema, &tokens));
/// assert!(!is_help_signal(&schema, &tokens[..1]));
/// ```
pub fn is_help_signal(schema: &CommandSchema, tokens: &[String]) -> bool {
    tokens.iter().any(|token| schema.matches_help_template(token))
}

/// True iff any token exactly equals a member of the schema's version
/// template set.
pub fn is_version_signal(schema: &CommandSchema, tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|token| schema.matches_version_template(token))
}

/// [`is_help_signal`] against `C`'s resolved (cached) schema.
pub fn is_help_request<C: Command + 'static>(tokens: &[String]) -> Result<bool> {
    let schema = resolved::<C>()?;
    Ok(is_help_signal(&schema, tokens))
}

/// [`is_version_signal`] against `C`'s resolved (cached) schema.
pub fn is_version_request<C: Command + 'static>(tokens: &[String]) -> Result<bool> {
    let schema = resolved::<C>()?;
    Ok(is_version_signal(&schema, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_help_signal_matches_anywhere() {
        let schema = CommandSchema::new("copy");

        assert!(is_help_signal(&schema, &tokens(&["--help"])));
        assert!(is_help_signal(&schema, &tokens(&["a.txt", "-o", "-h"])));
        assert!(!is_help_signal(&schema, &tokens(&["a.txt", "-o", "out"])));
        assert!(!is_help_signal(&schema, &tokens(&[])));
    }

    #[test]
    fn test_help_signal_requires_exact_match() {
        let schema = CommandSchema::new("copy");

        assert!(!is_help_signal(&schema, &tokens(&["--hel"])));
        assert!(!is_help_signal(&schema, &tokens(&["--helpme"])));
        assert!(!is_help_signal(&schema, &tokens(&["help"])));
    }

    #[test]
    fn test_version_signal_uses_custom_template() {
        let schema = CommandSchema::new("copy").with_version_template("-V|--version");

        assert!(is_version_signal(&schema, &tokens(&["-V"])));
        assert!(is_version_signal(&schema, &tokens(&["--version"])));
        assert!(!is_version_signal(&schema, &tokens(&["-v"])));
    }

    #[test]
    fn test_signals_do_not_require_bindable_input() {
        // A sequence that would fail binding still signals help.
        let schema = CommandSchema::new("copy");

        assert!(is_help_signal(&schema, &tokens(&["stray", "tokens", "--help"])));
    }
}
