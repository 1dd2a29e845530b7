use core::fmt;
use std::num::ParseIntError;

use error_policy::config::{Registry, UNIVERSAL_KIND};
use error_policy::{ErrorKind, Handler};

#[test]
fn empty_registry_only_knows_the_universal_kind() {
    let registry = Registry::new();

    assert_eq!(registry.kind(UNIVERSAL_KIND), Some(ErrorKind::universal()));
    assert_eq!(registry.kind("ParseIntError"), None);
    assert_eq!(registry.kind_names().count(), 0);
}

#[test]
fn core_kinds_are_registered_by_type_name() {
    let registry = Registry::with_core_kinds();

    assert_eq!(registry.kind("fmt::Error"), Some(ErrorKind::of::<fmt::Error>()));
    assert_eq!(registry.kind("ParseIntError"), Some(ErrorKind::of::<ParseIntError>()));
    assert_eq!(registry.kind("FromUtf8Error"), Some(ErrorKind::of::<std::string::FromUtf8Error>()));
    assert!(registry.kind_names().any(|name| name == "Utf8Error"));
}

#[test]
fn registering_a_kind_twice_replaces_it() {
    let mut registry = Registry::new().with_kind::<fmt::Error>("Failure");

    let previous = registry.register_kind("Failure", ErrorKind::of::<ParseIntError>());

    assert_eq!(previous, Some(ErrorKind::of::<fmt::Error>()));
    assert_eq!(registry.kind("Failure"), Some(ErrorKind::of::<ParseIntError>()));
}

#[test]
fn unlabelled_handlers_take_their_registered_name() {
    let registry = Registry::new()
        .with_handler("audit", Handler::new(|_| {}))
        .with_handler("metrics", Handler::new(|_| {}).with_label("custom"));

    assert_eq!(registry.handler("audit").and_then(Handler::label), Some("audit"));
    assert_eq!(registry.handler("metrics").and_then(Handler::label), Some("custom"));
    assert!(registry.handler("missing").is_none());
    assert_eq!(registry.handler_names().collect::<Vec<_>>(), vec!["audit", "metrics"]);
}
