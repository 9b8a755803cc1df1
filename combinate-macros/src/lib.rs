//! Procedural macros for combinate.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure or function into a
//!   right-to-left curried chain
//! - [`unsplat!`]: Turns a function over a `Vec` into a positional closure
//!   of fixed arity
//!
//! # Example: Currying
//!
//! ```rust,ignore
//! use combinate_macros::curry;
//!
//! fn divide(numerator: f64, denominator: f64) -> f64 {
//!     numerator / denominator
//! }
//!
//! // The first call binds the *last* parameter.
//! let halve = curry!(divide, 2)(2.0);
//! assert_eq!(halve(10.0), 5.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod arguments;
mod curry;
mod unsplat;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into a chain of unary
/// closures that bind arguments from last to first.
///
/// # Syntax
///
/// - Closure form: `curry!(|a, b, c| body)`
/// - Function + arity form: `curry!(function, 3)`
///
/// For a function `f(a, b, c)`, `curry!(f, 3)(c)(b)(a) == f(a, b, c)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Every argument except the first must implement [`Clone`], since a
///   partially applied chain may be called many times
///
/// # Example
///
/// ```rust,ignore
/// use combinate_macros::curry;
///
/// let describe = curry!(|name: &str, greeting: &str, punctuation: char| {
///     format!("{greeting}, {name}{punctuation}")
/// });
///
/// let excited_hello = describe('!')("Hello");
/// assert_eq!(excited_hello("Ada"), "Hello, Ada!");
/// assert_eq!(excited_hello("Alan"), "Hello, Alan!");
/// ```
///
/// # Errors
///
/// Compilation fails when the arity is smaller than 2, when a function name
/// is given without an arity, or when the arity is not an integer literal.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}

/// Converts a function taking a `Vec<T>` into a closure taking exactly
/// `arity` positional arguments.
///
/// # Example
///
/// ```rust,ignore
/// use combinate_macros::unsplat;
///
/// let join = unsplat!(|parts: Vec<&str>| parts.join("-"), 3);
/// assert_eq!(join("a", "b", "c"), "a-b-c");
/// ```
///
/// # Errors
///
/// Compilation fails when the arity is missing or not an integer literal.
#[proc_macro]
pub fn unsplat(input: TokenStream) -> TokenStream {
    unsplat::unsplat_impl(input)
}
