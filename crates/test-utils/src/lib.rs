//! Shared test utilities for the layered ocean I/O workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Temporary run directories
//! - Layered grid data generators
//! - Configuration fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f64, 1.0_f64, 0.001_f64);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro asserting that every element of an iterable of `f64` equals `value`
/// within `epsilon`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_all_approx_eq;
///
/// assert_all_approx_eq!(field.iter(), 1.0e-4, 1e-18);
/// ```
#[macro_export]
macro_rules! assert_all_approx_eq {
    ($values:expr, $value:expr, $epsilon:expr) => {{
        for (index, v) in ::std::iter::IntoIterator::into_iter($values).enumerate() {
            let v: f64 = *v as f64;
            let expected: f64 = $value as f64;
            let epsilon: f64 = $epsilon as f64;
            if (v - expected).abs() > epsilon {
                panic!(
                    "assertion failed at element {}: `{:?}` differs from `{:?}` by more than `{:?}`",
                    index, v, expected, epsilon
                );
            }
        }
    }};
}
