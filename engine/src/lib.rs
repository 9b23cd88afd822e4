//! Declarative argument/option binding engine.
//!
//! Given a command type's schema (declared through
//! [`Command`](command_bind_core::Command)) and a raw token list, this crate
//! populates the command's slots in place: the positional pass consumes
//! leading tokens into argument slots in position order, the option pass
//! pairs option tokens with their values (flags self-value as `true`), and
//! every token is converted into the typed form its slot declares. Help and
//! version signaling tokens are detected independently of binding.
//!
//! # Main entry points
//!
//! - [`bind`] — resolve `C`'s schema (cached per type, validated eagerly)
//!   and bind a token sequence onto a command instance.
//! - [`bind_with_schema`] — bind against an explicitly constructed schema.
//! - [`is_help_request`] / [`is_version_request`] — signal queries the
//!   dispatcher runs before attempting a full bind.
//!
//! # Example
//!
//! ```
//! use command_bind_core::*;
//! use command_bind_engine::{bind, is_help_request};
//!
//! #[derive(Default)]
//! struct Connect {
//!     host: String,
//!     port: Option<i64>,
//!     insecure: bool,
//! }
//!
//! impl Command for Connect {
//!     fn schema() -> CommandSchema {
//!         CommandSchema::new("connect")
//!             .with_argument(ArgumentSlot::required(0, "host", TypeDescriptor::Text))
//!             .with_option(OptionSlot::with_value(
//!                 "-p|--port",
//!                 TypeDescriptor::Nullable(Box::new(TypeDescriptor::Integer)),
//!             ))
//!             .with_option(OptionSlot::flag("-k|--insecure"))
//!     }
//!
//!     fn bind_argument(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
//!         match (name, value) {
//!             ("host", BoundValue::Text(host)) => self.host = host,
//!             _ => return Err(UnknownSlot(name.to_string())),
//!         }
//!         Ok(())
//!     }
//!
//!     fn bind_option(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
//!         match (name, value) {
//!             ("--port", BoundValue::Integer(port)) => self.port = Some(port),
//!             ("--insecure", BoundValue::Bool(on)) => self.insecure = on,
//!             _ => return Err(UnknownSlot(name.to_string())),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let argv: Vec<String> = ["db.internal", "-p", "5432", "-k"]
//!     .iter()
//!     .map(|t| t.to_string())
//!     .collect();
//!
//! assert!(!is_help_request::<Connect>(&argv).unwrap());
//!
//! let mut cmd = Connect::default();
//! bind(&mut cmd, &argv).unwrap();
//!
//! assert_eq!(cmd.host, "db.internal");
//! assert_eq!(cmd.port, Some(5432));
//! assert!(cmd.insecure);
//! ```
//!
//! # Error model
//!
//! Failures are raised synchronously at the first violation and abort the
//! rest of that command's parse; see [`BindError`] for the taxonomy. There
//! is no partial recovery: argument parsing is a one-shot, user-facing
//! operation, and the dispatcher owns turning an error into a usage message.

pub mod bind;
pub mod convert;
pub mod error;
pub mod resolve;
pub mod signal;

pub use bind::{bind, bind_with_schema};
pub use error::{BindError, Result};
pub use resolve::resolved;
pub use signal::{is_help_request, is_help_signal, is_version_request, is_version_signal};
