use core::fmt;
use std::num::ParseIntError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use error_policy::{handlers, BoxError, Handler, HandlerSpec};

fn counting(counter: &Arc<AtomicUsize>) -> Handler {
    let counter = Arc::clone(counter);
    Handler::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn handler_receives_the_error() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handler = Handler::new(move |err| sink.lock().unwrap().push(err.to_string()));

    let err: BoxError = "disk full".into();
    handler.call(&*err).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["disk full".to_string()]);
}

#[test]
fn fallible_handler_returns_its_own_error() {
    let handler = Handler::try_new(|_| Err("handler broke".into()));

    let err: BoxError = "original".into();
    let failure = handler.call(&*err).unwrap_err();

    assert_eq!(failure.to_string(), "handler broke");
}

#[test]
fn typed_handler_ignores_other_kinds() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handler = Handler::for_kind::<ParseIntError, _>(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let parse: BoxError = "x".parse::<i32>().unwrap_err().into();
    let other: BoxError = fmt::Error.into();
    handler.call(&*parse).unwrap();
    handler.call(&*other).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn labels_show_up_in_debug_output() {
    let labelled = Handler::new(|_| {}).with_label("audit");
    let anonymous = Handler::new(|_| {});

    assert_eq!(labelled.label(), Some("audit"));
    assert_eq!(anonymous.label(), None);
    assert_eq!(format!("{:?}", labelled), "Handler(\"audit\")");
    assert_eq!(format!("{:?}", anonymous), "Handler(<fn>)");
}

#[test]
fn clones_share_the_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let handler = counting(&calls);
    let clone = handler.clone();

    let err: BoxError = "boom".into();
    clone.call(&*err).unwrap();

    assert!(handler.ptr_eq(&clone));
    assert!(!handler.ptr_eq(&counting(&calls)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn single_spec_resolves_the_same_handler_everywhere() {
    let spec = HandlerSpec::from(Handler::new(|_| {}).with_label("only"));

    assert_eq!(spec.resolve(0).and_then(Handler::label), Some("only"));
    assert_eq!(spec.resolve(7).and_then(Handler::label), Some("only"));
}

#[test]
fn short_sequence_falls_back_to_last_handler() {
    let spec = HandlerSpec::from([
        Handler::new(|_| {}).with_label("first"),
        Handler::new(|_| {}).with_label("last"),
    ]);

    assert_eq!(spec.resolve(0).and_then(Handler::label), Some("first"));
    assert_eq!(spec.resolve(1).and_then(Handler::label), Some("last"));
    assert_eq!(spec.resolve(5).and_then(Handler::label), Some("last"));
}

#[test]
fn absent_entries_leave_their_position_unhandled() {
    let spec = handlers![Handler::new(|_| {}).with_label("first"), _];

    assert_eq!(spec.resolve(0).and_then(Handler::label), Some("first"));
    assert!(spec.resolve(1).is_none());
    // fallback lands on the absent last entry
    assert!(spec.resolve(4).is_none());
}

#[test]
fn empty_sequence_counts_as_unconfigured() {
    let spec = HandlerSpec::Sequence(Vec::new());

    assert!(!spec.is_configured());
    assert!(spec.resolve(0).is_none());
    assert!(!HandlerSpec::default().is_configured());
    assert!(!HandlerSpec::from(None::<Handler>).is_configured());
}
