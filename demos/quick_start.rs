//! Quick Start Example
//!
//! Shows the three ways to apply a policy: running a closure, wrapping an
//! operation once and calling it many times, and applying a policy to a
//! result you already have.
//!
//! Run with: `cargo run --example quick_start`

use core::fmt;
use core::num::ParseIntError;

use error_policy::prelude::*;

#[derive(Debug)]
struct Timeout(u32);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.0)
    }
}

impl std::error::Error for Timeout {}

fn fetch(attempt: u32) -> Result<String, Timeout> {
    if attempt % 2 == 0 {
        Err(Timeout(250))
    } else {
        Ok(format!("payload #{attempt}"))
    }
}

fn main() {
    println!("=== error-policy Quick Start ===\n");

    // 1. Universal policy: report everything, never propagate.
    println!("1. Report and continue:");
    let lenient = Policy::builder()
        .handler(Handler::new(|err| println!("   handled: {err}")))
        .reraise(false)
        .build();
    for input in ["42", "forty-two"] {
        match lenient.run(|| input.parse::<u32>()) {
            Ok(Some(value)) => println!("   parsed {value}"),
            Ok(None) => println!("   skipped {input:?}"),
            Err(err) => println!("   failed: {err}"),
        }
    }

    // 2. Per-kind treatment: parse errors are swallowed, timeouts propagate.
    println!("\n2. Per-kind handlers:");
    let policy = Policy::new(
        kinds![ParseIntError, Timeout],
        handlers![Handler::new(|_| println!("   bad number, ignoring")), _],
        [false, true],
    );
    let fetch = policy.wrap(fetch);
    for attempt in 1..=2 {
        match fetch.call((attempt,)) {
            Ok(Some(body)) => println!("   got {body}"),
            Ok(None) => println!("   nothing"),
            Err(err) => println!("   propagated: {err}"),
        }
    }

    // 3. Applying a policy to an existing result.
    println!("\n3. Existing results:");
    let outcome = "7x".parse::<u8>().apply_policy(&policy);
    println!("   {outcome:?}");

    // 4. A malformed policy degrades to the default instead of half-working.
    println!("\n4. Validation:");
    let broken = Policy::new(Selector::Universal, HandlerSpec::None, ReraiseSpec::Sequence(Vec::new()));
    println!("   reset: {}, reason: {:?}", broken.is_reset(), broken.validation_issue());
}
