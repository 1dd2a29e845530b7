//! Policies from configuration.
//!
//! Builds policies from JSON documents, resolving kind and handler names
//! against a [`Registry`]. Invalid documents fall back to the default policy.
//!
//! Run with: `cargo run --example config_policy --features serde,std`

use error_policy::config::{PolicyConfig, Registry};
use error_policy::Handler;

const DOCUMENTS: &[(&str, &str)] = &[
    (
        "lenient parsing",
        r#"{ "errors": ["ParseIntError", "ParseFloatError"], "handlers": "log", "reraise": false }"#,
    ),
    ("log and propagate", r#"{ "handlers": ["log"], "reraise": [true] }"#),
    ("unknown kind", r#"{ "errors": "ParseDateError", "handlers": "log", "reraise": false }"#),
    ("bad flag", r#"{ "errors": "*", "handlers": "log", "reraise": "sometimes" }"#),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::with_core_kinds()
        .with_handler("log", Handler::new(|err| println!("      [log] {err}")));

    println!("kinds: {}", registry.kind_names().collect::<Vec<_>>().join(", "));
    println!("handlers: {}\n", registry.handler_names().collect::<Vec<_>>().join(", "));

    for (name, json) in DOCUMENTS {
        let config: PolicyConfig = serde_json::from_str(json)?;
        let policy = config.build(&registry);

        println!("{name}:");
        if let Some(issue) = policy.validation_issue() {
            println!("   reset to default: {issue}");
        }

        match policy.run(|| "12.5".parse::<i64>()) {
            Ok(Some(value)) => println!("   -> {value}"),
            Ok(None) => println!("   -> suppressed"),
            Err(err) => println!("   -> propagated: {err}"),
        }
    }

    Ok(())
}
