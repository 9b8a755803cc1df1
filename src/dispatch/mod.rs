//! Dispatch resolution.
//!
//! A dispatcher tries an ordered list of candidate functions against the same
//! arguments and returns the first answer. Candidates signal "not
//! applicable" with `None`.
//!
//! # Overview
//!
//! - [`Dispatch`] / [`dispatch`] / [`dispatch!`](crate::dispatch!): Build a
//!   dispatcher
//! - [`isa`]: Candidate for one variant of a [`Tagged`] subject
//! - [`invoker`]: Candidate that calls a specific [`Method`] on targets that
//!   carry it
//!
//! # Examples
//!
//! Handlers for a closed set of command variants, with a default:
//!
//! ```
//! use combinate::dispatch::{Tagged, isa};
//!
//! enum Command {
//!     Notify(String),
//!     Join(String),
//!     Launch,
//! }
//!
//! impl Tagged for Command {
//!     fn tag(&self) -> &str {
//!         match self {
//!             Self::Notify(_) => "notify",
//!             Self::Join(_) => "join",
//!             Self::Launch => "launch",
//!         }
//!     }
//! }
//!
//! let perform = combinate::dispatch!(
//!     isa("notify", |command: &Command| match command {
//!         Command::Notify(message) => format!("notify: {message}"),
//!         _ => unreachable!(),
//!     }),
//!     isa("join", |command: &Command| match command {
//!         Command::Join(target) => format!("join: {target}"),
//!         _ => unreachable!(),
//!     }),
//!     |_: &Command| Some(String::from("unknown command")),
//! );
//!
//! assert_eq!(perform.resolve(&Command::Join("lobby".into())).as_deref(), Some("join: lobby"));
//! assert_eq!(perform.resolve(&Command::Launch).as_deref(), Some("unknown command"));
//! ```
//!
//! Reversing either a list or a string:
//!
//! ```
//! use combinate::dispatch::Dispatch;
//!
//! enum Value {
//!     List(Vec<i32>),
//!     Text(String),
//! }
//!
//! let reverse = Dispatch::new()
//!     .or(|value: &Value| match value {
//!         Value::List(items) => Some(Value::List(items.iter().rev().copied().collect())),
//!         Value::Text(_) => None,
//!     })
//!     .or(|value: &Value| match value {
//!         Value::Text(text) => Some(Value::Text(text.chars().rev().collect())),
//!         Value::List(_) => None,
//!     });
//!
//! assert!(matches!(reverse.resolve(&Value::Text("abc".into())), Some(Value::Text(text)) if text == "cba"));
//! ```

mod invoker;
mod resolver;

pub use invoker::{InvokeError, Invoker, Method, MethodTable, Receiver, invoker};
pub use resolver::{Dispatch, Tagged, dispatch, isa};
