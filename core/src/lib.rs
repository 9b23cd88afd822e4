//! Core slot and schema types for declarative command binding.
//!
//! This crate defines the foundational types the binding engine operates on:
//!
//! - [`CommandSchema`] — a command's full binding surface (ordered positional
//!   arguments, named options, help/version templates).
//! - [`ArgumentSlot`] — a positional argument with position, name, required
//!   flag, and target type.
//! - [`OptionSlot`] — a named option with its set of equivalent templates and
//!   target type.
//! - [`TypeDescriptor`] — the tagged description of what a slot's token
//!   converts into.
//! - [`BoundValue`] — a converted, typed value ready to be written into a
//!   command.
//! - [`Command`] — the trait command types implement to declare their schema
//!   and accept bound values.
//!
//! Validation ([`validate_schema`]) catches structural errors such as gapped
//! argument positions, optional-before-required ordering, and overlapping
//! option templates.
//!
//! # Example
//!
//! ```
//! use command_bind_core::*;
//!
//! let schema = CommandSchema::new("connect")
//!     .with_description("Open a session against a server")
//!     .with_argument(ArgumentSlot::required(0, "host", TypeDescriptor::Text))
//!     .with_option(OptionSlot::with_value("-p|--port", TypeDescriptor::Integer))
//!     .with_option(OptionSlot::flag("-k|--insecure"));
//!
//! assert!(schema.find_option("--port").is_some());
//! assert!(schema.is_option("-k"));
//! assert!(validate_schema(&schema).is_empty());
//! ```

mod command;
mod types;
mod validate;
mod value;

pub use command::{Command, UnknownSlot};
pub use types::*;
pub use validate::{ValidationError, validate_schema};
pub use value::BoundValue;
