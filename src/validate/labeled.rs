//! Predicates and labeled predicates.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use crate::sequence::interpose;

/// A test over a borrowed subject.
///
/// Implemented for every `Fn(&T) -> bool` and for [`LabeledPredicate`], so
/// plain closures and labeled predicates are interchangeable wherever a
/// predicate is expected.
pub trait Predicate<T: ?Sized> {
    /// Returns `true` when `subject` satisfies the predicate.
    fn test(&self, subject: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, subject: &T) -> bool {
        self(subject)
    }
}

/// Returns the logical negation of `predicate`.
///
/// # Examples
///
/// ```
/// use combinate::validate::complement;
///
/// let is_even = |value: &i32| value % 2 == 0;
/// let is_odd = complement(is_even);
///
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn complement<T: ?Sized, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Predicate<T>,
{
    move |subject: &T| !predicate.test(subject)
}

/// A predicate carrying the message to report when it fails.
///
/// The message travels with the predicate: the same value can be tested and
/// asked for its diagnostic. Cloning is cheap; the predicate and message are
/// shared.
///
/// # Examples
///
/// ```
/// use combinate::validate::{Predicate, cond};
///
/// let positive = cond("arg must be positive", |value: &i32| *value > 0);
///
/// assert!(positive.test(&1));
/// assert!(!positive.test(&-1));
/// assert_eq!(positive.message(), "arg must be positive");
/// ```
pub struct LabeledPredicate<T: ?Sized> {
    message: Rc<str>,
    predicate: Rc<dyn Fn(&T) -> bool>,
}

impl<T: ?Sized> LabeledPredicate<T> {
    /// Attaches `message` to `predicate`.
    pub fn new<P>(message: impl Into<Rc<str>>, predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Self {
            message: message.into(),
            predicate: Rc::new(move |subject: &T| predicate.test(subject)),
        }
    }

    /// The message reported when the predicate fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the message if `subject` fails the predicate.
    pub fn violation(&self, subject: &T) -> Option<String> {
        (!self.test(subject)).then(|| self.message.to_string())
    }

    /// Returns the same predicate with a different message.
    #[must_use]
    pub fn relabel(&self, message: impl Into<Rc<str>>) -> Self {
        Self {
            message: message.into(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> Predicate<T> for LabeledPredicate<T> {
    #[inline]
    fn test(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

impl<T: ?Sized> Clone for LabeledPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            message: Rc::clone(&self.message),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for LabeledPredicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LabeledPredicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Attaches `message` to `predicate`.
///
/// # Examples
///
/// ```
/// use combinate::validate::{complement, cond};
///
/// let non_zero = cond("arg must not be zero", complement(|value: &i32| *value == 0));
/// assert_eq!(non_zero.violation(&0).as_deref(), Some("arg must not be zero"));
/// assert_eq!(non_zero.violation(&7), None);
/// ```
#[inline]
pub fn cond<T: ?Sized, P>(message: impl Into<Rc<str>>, predicate: P) -> LabeledPredicate<T>
where
    P: Predicate<T> + 'static,
{
    LabeledPredicate::new(message, predicate)
}

/// Subjects that can be asked whether they carry a value under a key.
pub trait Keyed {
    /// Returns `true` when `key` is present.
    fn has_key(&self, key: &str) -> bool;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

/// A labeled predicate requiring every key in `keys`.
///
/// The message lists the keys separated by spaces:
/// `"Must have values for keys: type color"`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use combinate::validate::{Predicate, has_keys};
///
/// let fruit = has_keys::<HashMap<&str, &str>, _>(["type", "color"]);
///
/// let apple = HashMap::from([("type", "gala"), ("color", "green")]);
/// let orange = HashMap::from([("type", "cara cara")]);
///
/// assert!(fruit.test(&apple));
/// assert!(!fruit.test(&orange));
/// assert_eq!(fruit.message(), "Must have values for keys: type color");
/// ```
pub fn has_keys<T, K>(keys: impl IntoIterator<Item = K>) -> LabeledPredicate<T>
where
    T: Keyed + ?Sized,
    K: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    let message = format!(
        "Must have values for keys: {}",
        interpose(" ", keys.iter().map(String::as_str)).concat()
    );
    cond(message, move |subject: &T| {
        keys.iter().all(|key| subject.has_key(key))
    })
}
