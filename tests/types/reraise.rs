use error_policy::ReraiseSpec;

#[test]
fn default_always_reraises() {
    let spec = ReraiseSpec::default();

    assert_eq!(spec, ReraiseSpec::Single(true));
    assert!(spec.resolve(0));
    assert!(spec.resolve(3));
}

#[test]
fn single_flag_applies_to_every_position() {
    let spec = ReraiseSpec::from(false);

    assert!(!spec.resolve(0));
    assert!(!spec.resolve(9));
}

#[test]
fn sequence_is_aligned_by_index() {
    let spec = ReraiseSpec::from([false, true, false]);

    assert!(!spec.resolve(0));
    assert!(spec.resolve(1));
    assert!(!spec.resolve(2));
}

#[test]
fn short_sequence_falls_back_to_last_flag() {
    let spec: ReraiseSpec = [true, false].into_iter().collect();

    assert!(!spec.resolve(2));
    assert!(!spec.resolve(100));
}

#[test]
fn empty_sequence_propagates() {
    assert!(ReraiseSpec::Sequence(Vec::new()).resolve(0));
}
