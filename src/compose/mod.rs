//! Arity adapters.
//!
//! This module converts functions between calling conventions without
//! looking at what they compute.
//!
//! # Overview
//!
//! - [`splat`] / [`unsplat`]: Switch between positional arguments and a
//!   single argument list
//! - [`curry`]: Restrict a function to one argument
//! - [`curry2!`] / [`curry3!`]: Right-to-left curried chains of fixed depth
//! - [`partial`] / [`partial!`]: Bind a prefix of the arguments
//!
//! With the `macros` feature, the `curry!` (any arity) and `unsplat!`
//! (positional form) procedural macros are re-exported here as well.
//!
//! # Argument Lists
//!
//! An argument list is a tuple. [`Callable`] calls a positional function with
//! a tuple, [`Arguments`] collects a homogeneous tuple into a `Vec`, and
//! [`Prefix`] joins a bound prefix with the remaining arguments.
//!
//! # Examples
//!
//! ## Splat
//!
//! ```
//! use combinate::compose::splat;
//!
//! let add_array_elements = splat(|x: i32, y: i32| x + y);
//! assert_eq!(add_array_elements((1, 2)), 3);
//! ```
//!
//! ## Right-to-left currying
//!
//! ```
//! use combinate::curry2;
//!
//! fn div(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
//!
//! let div10 = curry2!(div)(10.0);
//! assert_eq!(div10(50.0), 5.0);
//! ```
//!
//! ## Partial application
//!
//! ```
//! // Brings in both the `partial` function and the `partial!` macro.
//! use combinate::compose::partial;
//!
//! fn div(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
//!
//! let over10_macro = partial!(div, 10.0, __);
//! let over10_tuple = partial(div, (10.0,));
//! assert_eq!(over10_macro(5.0), 2.0);
//! assert_eq!(over10_tuple((5.0,)), 2.0);
//! ```
//!
//! # Laws
//!
//! - **Splat**: `splat(f)((a, b)) == f(a, b)`
//! - **Unsplat**: `unsplat(g)((a, b)) == g(vec![a, b])`
//! - **Curry**: `curry2!(f)(b)(a) == f(a, b)`, `curry3!(f)(c)(b)(a) == f(a, b, c)`
//! - **Partial**: `partial(f, (a,))((b, c)) == partial(f, (a, b))((c,)) == f(a, b, c)`

mod adapters;
mod callable;
mod curry_macro;
mod partial_macro;
mod utils;

pub use adapters::{curry, partial, splat, unsplat};
pub use callable::{Arguments, Callable, Prefix};
pub use utils::{always, best, identity, iterate_until, repeatedly};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;

#[cfg(feature = "macros")]
pub use combinate_macros::{curry, unsplat};
