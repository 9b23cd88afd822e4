//! Help/version short-circuit example.
//!
//! Shows the flow a dispatcher runs: query the signal detector over the raw
//! argv first, and only attempt a full bind when neither signal fires.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p command-bind-demos --example signals
//! ```

use command_bind_core::{
    ArgumentSlot, BoundValue, Command, CommandSchema, OptionSlot, TypeDescriptor, UnknownSlot,
};
use command_bind_engine::{bind, is_help_request, is_version_request};

#[derive(Debug, Default)]
struct Serve {
    root: String,
    port: i64,
}

impl Command for Serve {
    fn schema() -> CommandSchema {
        CommandSchema::new("serve")
            .with_argument(ArgumentSlot::required(0, "root", TypeDescriptor::Text))
            .with_option(OptionSlot::with_value("-p|--port", TypeDescriptor::Integer))
            .with_version_template("-V|--version")
    }

    fn bind_argument(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
        match (name, value) {
            ("root", BoundValue::Text(root)) => self.root = root,
            _ => return Err(UnknownSlot(name.to_string())),
        }
        Ok(())
    }

    fn bind_option(&mut self, name: &str, value: BoundValue) -> Result<(), UnknownSlot> {
        match (name, value) {
            ("--port", BoundValue::Integer(port)) => self.port = port,
            _ => return Err(UnknownSlot(name.to_string())),
        }
        Ok(())
    }
}

fn dispatch(argv: &[String]) {
    println!("=== argv {argv:?} ===");

    match (is_help_request::<Serve>(argv), is_version_request::<Serve>(argv)) {
        (Ok(true), _) => {
            // The usage renderer owns the actual help text.
            println!("-> help requested, skipping bind");
            return;
        }
        (_, Ok(true)) => {
            println!("-> version requested, skipping bind");
            return;
        }
        _ => {}
    }

    let mut cmd = Serve::default();
    match bind(&mut cmd, argv) {
        Ok(()) => println!("-> bound {cmd:?}"),
        Err(e) => println!("-> usage error: {e}"),
    }
    println!();
}

fn main() {
    let cases: Vec<Vec<String>> = vec![
        vec!["public/".into(), "-p".into(), "8080".into()],
        vec!["--help".into()],
        vec!["public/".into(), "-V".into()],
        vec!["-p".into()],
    ];

    for argv in &cases {
        dispatch(argv);
    }
}
