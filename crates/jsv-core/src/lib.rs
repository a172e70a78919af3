//! # jsv-core: Value Semantics for Schema Validation
//!
//! The leaf crate of the jsv workspace. It answers the questions every
//! keyword validator asks about an instance value, independent of any
//! schema:
//!
//! 1. **What number is this?** [`Number`] collapses the representations a
//!    decoded JSON number can arrive in (`u64`, `i64`, `f64`) into a
//!    two-case canonical domain, so `1` and `1.0` compare equal.
//!
//! 2. **Are these two values the same?** [`values_equal`] is structural
//!    deep-equality over the JSON value model, using [`Number`] semantics
//!    for numbers. `enum` is built on it.
//!
//! 3. **What kind of value is this?** [`InstanceType`] maps a value to one
//!    of the seven draft-04 type names used by the `type` keyword.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod equality;
pub mod error;
pub mod kind;
pub mod number;

pub use equality::values_equal;
pub use error::NumberError;
pub use kind::InstanceType;
pub use number::Number;
