//! # combinate
//!
//! Function combinators for Rust: reusable operators that take functions and
//! produce new functions.
//!
//! ## Overview
//!
//! - **Sequences**: `cat`, `cons`, `mapcat`, `interpose`
//! - **Arity Adapters**: `splat`, `unsplat`, `curry`, `curry2!`, `curry3!`,
//!   `partial`, `partial!`
//! - **Null Guards**: `fnull`, `fnull_sequence`
//! - **Validation**: `complement`, `cond`, `validator`, `condition1`
//! - **Dispatch**: `dispatch`, `isa`, `invoker`
//! - **Generators**: `UniqueStrings`, `SharedUniqueStrings`
//!
//! ## Feature Flags
//!
//! - `sequence`: One-level list combinators
//! - `compose`: Arity adapters and helper combinators
//! - `guard`: Null-guard wrappers
//! - `validate`: Labeled predicates, validators and guarded calls
//! - `dispatch`: Ordered dispatch and the method invoker
//! - `generator`: Counter-backed unique string generators
//! - `macros`: The `curry!` and `unsplat!` procedural macros
//! - `sync`: Thread-safe generator variant (`parking_lot`)
//! - `serde`: `Serialize`/`Deserialize` for error and generator types
//! - `fxhash`: FxHash-backed method tables
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let non_zero = cond("arg must not be zero", complement(|value: &i32| *value == 0));
//! let positive = cond("arg must be positive", |value: &i32| *value > 0);
//!
//! let check = validator([non_zero, positive]);
//! assert!(check.check(&5).is_empty());
//! assert_eq!(check.check(&0), vec!["arg must not be zero", "arg must be positive"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, types and traits.
///
/// # Usage
///
/// ```rust
/// use combinate::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "guard")]
    pub use crate::guard::*;

    #[cfg(feature = "validate")]
    pub use crate::validate::*;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "generator")]
    pub use crate::generator::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "guard")]
pub mod guard;

#[cfg(feature = "validate")]
pub mod validate;

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "generator")]
pub mod generator;

#[cfg(feature = "macros")]
pub use combinate_macros::{curry, unsplat};
