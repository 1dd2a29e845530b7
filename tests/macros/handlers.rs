use error_policy::{handlers, Handler, HandlerSpec};

#[test]
fn handlers_builds_an_aligned_sequence() {
    let spec = handlers![
        Handler::new(|_| {}).with_label("first"),
        _,
        Handler::new(|_| {}).with_label("third"),
    ];

    match &spec {
        HandlerSpec::Sequence(entries) => assert_eq!(entries.len(), 3),
        other => panic!("expected a sequence, got {:?}", other),
    }
    assert_eq!(spec.resolve(0).and_then(Handler::label), Some("first"));
    assert!(spec.resolve(1).is_none());
    assert_eq!(spec.resolve(2).and_then(Handler::label), Some("third"));
}

#[test]
fn handlers_with_only_placeholders_has_no_handler() {
    let spec = handlers![_, _];

    assert!(spec.is_configured());
    assert!(spec.resolve(0).is_none());
    assert!(spec.resolve(1).is_none());
}

#[test]
fn handlers_accepts_existing_bindings() {
    let shared = Handler::new(|_| {}).with_label("shared");
    let spec = handlers![shared.clone(), shared];

    assert!(spec.resolve(0).unwrap().ptr_eq(spec.resolve(1).unwrap()));
}
