//! Basic binding example.
//!
//! Declares a `copy`-style command, binds a hand-rolled argv against it, and
//! prints the populated slots.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p command-bind-demos --example bind_basic
//! ```

use command_bind_core::{
    ArgumentSlot, BoundValue, Command, CommandSchema, OptionSlot, TypeDescriptor, UnknownSlot,
};
use command_bind_engine::bind;

#[derive(Debug, Default)]
struct Copy {
    source: String,
    dest: Option<String>,
    out: Option<String>,
    verbose: bool,
}

impl Command for Copy {
    fn schema() -> CommandSchema {
        CommandSchema::new("copy")
            .with_description("Copy a file, optionally renaming the result")
            .with_argument(
                ArgumentSlot::required(0, "source", TypeDescriptor::Text)
                    .with_description("File to copy"),
            )
            .with_argument(
                ArgumentSlot::optional(1, "dest", TypeDescriptor::Text)
                    .with_description("Destination directory"),
            )
            .with_option(
                OptionSlot::with_value("-o|--out", TypeDescriptor::Text)
                    .with_description("Name for the copied file"),
            )
            .with_option(
                OptionSlot::flag("-v|--verbose").with_description("Narrate each step"),
            )
    }

    fn bind_argument(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
        match (name, value) {
            ("source", BoundValue::Text(path)) => self.source = path,
            ("dest", BoundValue::Text(path)) => self.dest = Some(path),
            _ => return Err(UnknownSlot(name.to_string())),
        }
        Ok(())
    }

    fn bind_option(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
        match (name, value) {
            ("--out", BoundValue::Text(name)) => self.out = Some(name),
            ("--verbose", BoundValue::Bool(on)) => self.verbose = on,
            _ => return Err(UnknownSlot(name.to_string())),
        }
        Ok(())
    }
}

fn main() {
    let argv: Vec<String> = ["notes.txt", "backups/", "-o", "notes.bak", "-v"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    println!("=== Binding {argv:?} ===");

    let mut cmd = Copy::default();
    match bind(&mut cmd, &argv) {
        Ok(()) => println!("Bound: {cmd:#?}"),
        Err(e) => println!("Binding failed: {e}"),
    }

    // A failing parse: the required source argument is missing.
    println!();
    println!("=== Binding [\"-v\"] ===");

    let mut cmd = Copy::default();
    match bind(&mut cmd, &["-v".to_string()]) {
        Ok(()) => println!("Bound: {cmd:#?}"),
        Err(e) => println!("Binding failed: {e}"),
    }
}
