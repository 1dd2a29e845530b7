//! Allocation-backed types shared by `std` and `no_std` builds.
//!
//! Everything here lives in `alloc`, which `std` re-exports, so a single path
//! serves both configurations.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use alloc::collections::BTreeMap;
pub use alloc::string::String;
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;
