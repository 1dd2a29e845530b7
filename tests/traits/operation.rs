use core::fmt;

use error_policy::traits::Operation;

fn no_args() -> Result<&'static str, fmt::Error> {
    Ok("ready")
}

#[test]
fn function_items_are_operations() {
    assert_eq!(no_args.invoke(()), Ok("ready"));
}

#[test]
fn closures_of_every_supported_arity_are_operations() {
    let one = |a: u8| Ok::<_, fmt::Error>(a);
    let two = |a: u8, b: u8| Ok::<_, fmt::Error>(a + b);
    let four = |a: u8, b: u8, c: u8, d: u8| Ok::<_, fmt::Error>(a + b + c + d);
    let six = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| Ok::<_, fmt::Error>(a + b + c + d + e + f);

    assert_eq!(one.invoke((1,)), Ok(1));
    assert_eq!(two.invoke((1, 2)), Ok(3));
    assert_eq!(four.invoke((1, 2, 3, 4)), Ok(10));
    assert_eq!(six.invoke((1, 2, 3, 4, 5, 6)), Ok(21));
}

#[test]
fn errors_are_returned_as_is() {
    let fail = |_: ()| Err::<u8, _>(fmt::Error);

    assert_eq!(fail.invoke(((),)), Err(fmt::Error));
}

#[test]
fn operations_may_capture_state() {
    let base = String::from("base");
    let join = |suffix: &str| Ok::<_, fmt::Error>(format!("{base}/{suffix}"));

    assert_eq!(join.invoke(("leaf",)).as_deref(), Ok("base/leaf"));
}
