use core::fmt;
use std::collections::BTreeMap;
use std::num::ParseIntError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use error_policy::config::{ConfigValue, PolicyConfig, Registry};
use error_policy::{
    BoxError, ConfigField, ErrorKind, Handler, Policy, ReraiseSpec, Selector, ValidationIssue,
};

fn registry(calls: &Arc<AtomicUsize>) -> Registry {
    let counter = Arc::clone(calls);
    Registry::with_core_kinds().with_handler(
        "count",
        Handler::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    )
}

fn list(items: &[&str]) -> ConfigValue {
    items.iter().copied().collect()
}

/// Runs an operation failing with `fmt::Error` and reports whether the error
/// propagated.
fn propagates_fmt_error(policy: &Policy) -> bool {
    policy.run(|| Err::<(), _>(fmt::Error)).is_err()
}

#[test]
fn empty_config_builds_the_default_policy() {
    let policy = PolicyConfig::default().build(&Registry::new());

    assert!(policy.is_default());
    assert!(!policy.is_reset());
}

#[test]
fn named_kinds_handlers_and_flags_build_a_structured_policy() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: list(&["ParseIntError", "fmt::Error"]),
        handlers: list(&["count", "count"]),
        reraise: ConfigValue::from(vec![false, true]),
    };

    let policy = config.build(&registry(&calls));

    assert!(!policy.is_reset());
    assert_eq!(
        policy.selector(),
        &Selector::from_kinds([ErrorKind::of::<ParseIntError>(), ErrorKind::of::<fmt::Error>()])
    );
    assert_eq!(policy.reraise(), &ReraiseSpec::Sequence(vec![false, true]));

    assert_eq!(policy.run(|| "x".parse::<i32>()).unwrap(), None);
    assert!(propagates_fmt_error(&policy));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn null_entries_in_a_handler_list_mean_no_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: list(&["ParseIntError", "fmt::Error"]),
        handlers: ConfigValue::List(vec![ConfigValue::Null, ConfigValue::from("count")]),
        reraise: ConfigValue::Bool(false),
    };

    let policy = config.build(&registry(&calls));

    assert!(!policy.is_reset());
    assert_eq!(policy.run(|| "x".parse::<i32>()).unwrap(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!propagates_fmt_error(&policy));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn universal_name_selects_everything() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: ConfigValue::from("*"),
        handlers: ConfigValue::from("count"),
        reraise: ConfigValue::Bool(false),
    };

    let policy = config.build(&registry(&calls));

    assert!(policy.selector().is_universal());
    let err: Result<(), BoxError> = Err("anything".into());
    assert_eq!(policy.run(|| err).unwrap(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_kind_resets_to_default() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: list(&["ParseIntError", "NoSuchError"]),
        handlers: ConfigValue::from("count"),
        reraise: ConfigValue::Bool(false),
    };

    let policy = config.build(&registry(&calls));

    assert!(policy.is_default());
    assert_eq!(
        policy.validation_issue(),
        Some(&ValidationIssue::UnknownKind { name: "NoSuchError".into() })
    );
    assert!(propagates_fmt_error(&policy));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_handler_resets_to_default() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: ConfigValue::from("fmt::Error"),
        handlers: list(&["count", "nobody"]),
        reraise: ConfigValue::Bool(false),
    };

    let policy = config.build(&registry(&calls));

    assert!(policy.is_default());
    assert_eq!(policy.validation_issue().map(ValidationIssue::field), Some(ConfigField::Handlers));
    assert!(propagates_fmt_error(&policy));
}

#[test]
fn non_name_in_handler_list_resets_to_default() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: ConfigValue::from("fmt::Error"),
        handlers: ConfigValue::List(vec![ConfigValue::from("count"), ConfigValue::Integer(3)]),
        reraise: ConfigValue::Bool(false),
    };

    let policy = config.build(&registry(&calls));

    assert!(policy.is_default());
    assert_eq!(
        policy.validation_issue(),
        Some(&ValidationIssue::InvalidElement {
            field: ConfigField::Handlers,
            index: 1,
            found: "integer",
        })
    );
    assert!(propagates_fmt_error(&policy));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn non_boolean_in_reraise_list_resets_to_default() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PolicyConfig {
        errors: list(&["fmt::Error"]),
        handlers: ConfigValue::from("count"),
        reraise: ConfigValue::List(vec![ConfigValue::Bool(false), ConfigValue::from("yes")]),
    };

    let policy = config.build(&registry(&calls));

    assert!(policy.is_default());
    assert_eq!(
        policy.validation_issue(),
        Some(&ValidationIssue::InvalidElement { field: ConfigField::Reraise, index: 1, found: "string" })
    );
    assert!(propagates_fmt_error(&policy));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn wrong_shapes_reset_to_default() {
    let registry = Registry::with_core_kinds();
    let cases = [
        (PolicyConfig { errors: ConfigValue::Bool(true), ..Default::default() }, ConfigField::Errors, "boolean"),
        (
            PolicyConfig { errors: ConfigValue::Table(BTreeMap::new()), ..Default::default() },
            ConfigField::Errors,
            "table",
        ),
        (PolicyConfig { handlers: ConfigValue::Float(1.5), ..Default::default() }, ConfigField::Handlers, "float"),
        (PolicyConfig { reraise: ConfigValue::from("false"), ..Default::default() }, ConfigField::Reraise, "string"),
    ];

    for (config, field, found) in cases {
        let policy = config.build(&registry);

        assert!(policy.is_default());
        assert_eq!(policy.validation_issue(), Some(&ValidationIssue::InvalidShape { field, found }));
    }
}

#[test]
fn non_name_in_kind_list_resets_to_default() {
    let config = PolicyConfig {
        errors: ConfigValue::List(vec![ConfigValue::from("fmt::Error"), ConfigValue::Bool(true)]),
        ..Default::default()
    };

    let policy = config.build(&Registry::with_core_kinds());

    assert_eq!(
        policy.validation_issue(),
        Some(&ValidationIssue::InvalidElement { field: ConfigField::Errors, index: 1, found: "boolean" })
    );
}

#[test]
fn empty_reraise_list_resets_to_default() {
    let config = PolicyConfig {
        errors: ConfigValue::from("fmt::Error"),
        reraise: ConfigValue::List(Vec::new()),
        ..Default::default()
    };

    let policy = config.build(&Registry::with_core_kinds());

    assert_eq!(policy.validation_issue(), Some(&ValidationIssue::EmptyReraise));
}

#[test]
fn validation_issues_read_well() {
    let issue = ValidationIssue::InvalidElement { field: ConfigField::Reraise, index: 2, found: "string" };

    assert_eq!(issue.to_string(), "reraise[2]: unsupported element of type string");
    assert_eq!(
        ValidationIssue::UnknownKind { name: "Oops".into() }.to_string(),
        "unknown error kind 'Oops'"
    );
}
