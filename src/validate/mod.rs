//! Labeled predicates, validator pipelines and guarded calls.
//!
//! # Overview
//!
//! - [`complement`]: Negate a predicate
//! - [`cond`]: Attach a failure message to a predicate, producing a [`LabeledPredicate`]
//! - [`validator`]: Evaluate every labeled predicate and collect the failures
//! - [`condition1`]: Refuse to call a function when any predicate fails
//! - [`has_keys`]: A ready-made labeled predicate for keyed subjects
//!
//! # Two Reporting Styles
//!
//! A [`Validator`] always returns data: a `Vec` of messages, empty when the
//! subject is valid. A [`Condition`] returns `Result<R, GuardError>` and is the
//! only place where violations become an error. The same labeled predicates
//! can back both.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use combinate::validate::{cond, condition1, has_keys, validator};
//!
//! type Record = BTreeMap<&'static str, &'static str>;
//!
//! let fruit = || {
//!     [
//!         cond("must not be empty", |record: &Record| !record.is_empty()),
//!         has_keys(["type", "color"]),
//!     ]
//! };
//!
//! let report = validator(fruit());
//! let gala = Record::from([("type", "gala"), ("color", "green")]);
//! let cara_cara = Record::from([("type", "cara cara")]);
//!
//! assert!(report.check(&gala).is_empty());
//! assert_eq!(report.check(&cara_cara), vec!["Must have values for keys: type color"]);
//!
//! let describe = condition1(fruit()).guard(|record: Record| record["type"].to_uppercase());
//! assert_eq!(describe(gala), Ok(String::from("GALA")));
//! assert!(describe(cara_cara).is_err());
//! ```
//!
//! # Laws
//!
//! - `validator(ps).check(s)` contains exactly the messages of the failing
//!   predicates, in declaration order
//! - `condition1(ps).call(f, s)` is `Ok(f(s))` iff `validator(ps).check(&s)` is empty

mod condition;
mod error;
mod labeled;
mod validator;

pub use condition::{Condition, condition1};
pub use error::GuardError;
pub use labeled::{Keyed, LabeledPredicate, Predicate, complement, cond, has_keys};
pub use validator::{Validator, validator};
