//! Null guards.
//!
//! Absence is modelled with [`Option`]: `None` is absent, everything else is
//! *existy*, including `Some(false)` and `Some(0)`. A value is *truthy* when
//! it is existy and not `false`.
//!
//! - [`fnull`]: Substitute per-position defaults for absent arguments
//! - [`fnull_sequence`]: The same for variable-length argument lists
//! - [`existy`] / [`truthy`] / [`Truthy`]: The two notions of "meaningful"
//! - [`do_when`]: Run an action only when a condition is truthy
//!
//! # Examples
//!
//! ```
//! use combinate::guard::fnull;
//!
//! let safe_multiply = fnull(|total: i32, n: i32| total * n, (1, 1));
//!
//! let numbers = vec![Some(1), Some(2), Some(3), None, Some(5)];
//! let product = numbers.into_iter().fold(1, |total, n| safe_multiply((Some(total), n)));
//! assert_eq!(product, 30);
//! ```

mod existy;
mod fnull;

pub use existy::{Truthy, do_when, existy, truthy};
pub use fnull::{Defaults, fnull, fnull_sequence};
