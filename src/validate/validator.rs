//! Validator pipelines: collect every violated message.

use smallvec::SmallVec;

use super::labeled::{LabeledPredicate, Predicate};
use crate::sequence::mapcat;

/// An ordered pipeline of labeled predicates evaluated against one subject.
///
/// [`Validator::check`] runs **every** predicate, in declaration order, and
/// returns the messages of those that fail. Nothing short-circuits, so the
/// caller sees all violated constraints at once. An all-passing subject
/// yields an empty `Vec`. Checking never panics on its own and never
/// returns an error; failures are data.
///
/// # Examples
///
/// ```
/// use combinate::validate::{cond, validator};
///
/// let check = validator([
///     cond("must be positive", |value: &i32| *value > 0),
///     cond("must be even", |value: &i32| value % 2 == 0),
///     cond("must be small", |value: &i32| *value < 100),
/// ]);
///
/// assert!(check.check(&42).is_empty());
/// assert_eq!(check.check(&-3), vec!["must be positive", "must be even"]);
/// assert_eq!(check.check(&101), vec!["must be even", "must be small"]);
/// ```
pub struct Validator<T: ?Sized> {
    predicates: SmallVec<[LabeledPredicate<T>; 4]>,
}

impl<T: ?Sized> Validator<T> {
    /// Creates an empty validator; it accepts every subject.
    pub fn new() -> Self {
        Self {
            predicates: SmallVec::new(),
        }
    }

    /// Appends a labeled predicate after the existing ones.
    #[must_use]
    pub fn with(mut self, predicate: LabeledPredicate<T>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Returns the message of every failing predicate, in declaration order.
    pub fn check(&self, subject: &T) -> Vec<String> {
        mapcat(
            |predicate: &LabeledPredicate<T>| predicate.violation(subject),
            &self.predicates,
        )
    }

    /// Returns `true` when every predicate passes.
    pub fn is_valid(&self, subject: &T) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.test(subject))
    }

    /// The number of predicates in the pipeline.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` when the pipeline has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterates over the predicates in declaration order.
    pub fn predicates(&self) -> impl Iterator<Item = &LabeledPredicate<T>> {
        self.predicates.iter()
    }

    /// Converts the pipeline into a plain checking function.
    pub fn into_fn(self) -> impl Fn(&T) -> Vec<String> {
        move |subject: &T| self.check(subject)
    }
}

impl<T: ?Sized> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Validator<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_list()
            .entries(self.predicates.iter().map(LabeledPredicate::message))
            .finish()
    }
}

impl<T: ?Sized> FromIterator<LabeledPredicate<T>> for Validator<T> {
    fn from_iter<I: IntoIterator<Item = LabeledPredicate<T>>>(iterator: I) -> Self {
        Self {
            predicates: iterator.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Extend<LabeledPredicate<T>> for Validator<T> {
    fn extend<I: IntoIterator<Item = LabeledPredicate<T>>>(&mut self, iterator: I) {
        self.predicates.extend(iterator);
    }
}

/// Builds a [`Validator`] from labeled predicates, keeping their order.
///
/// # Examples
///
/// ```
/// use combinate::validate::{cond, validator};
///
/// let always_passes = validator(Vec::<combinate::validate::LabeledPredicate<i32>>::new());
/// assert!(always_passes.check(&0).is_empty());
///
/// let check = validator([cond("is false", |_: &i32| false)]).into_fn();
/// assert_eq!(check(&1), vec!["is false"]);
/// ```
pub fn validator<T, I>(predicates: I) -> Validator<T>
where
    T: ?Sized,
    I: IntoIterator<Item = LabeledPredicate<T>>,
{
    predicates.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::cond;

    #[test]
    fn test_check_runs_every_predicate() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counted = |message: &'static str| {
            let calls = Rc::clone(&calls);
            cond(message, move |_: &i32| {
                calls.set(calls.get() + 1);
                false
            })
        };

        let check = validator([counted("a"), counted("b"), counted("c")]);
        assert_eq!(check.check(&0), vec!["a", "b", "c"]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_with_appends_in_order() {
        let check = Validator::new()
            .with(cond("first", |_: &str| false))
            .with(cond("second", |_: &str| false));
        assert_eq!(check.check("subject"), vec!["first", "second"]);
        assert_eq!(check.len(), 2);
    }

    #[test]
    fn test_debug_lists_messages() {
        let check = validator([cond("only", |_: &u8| true)]);
        assert_eq!(format!("{check:?}"), "[\"only\"]");
    }
}
