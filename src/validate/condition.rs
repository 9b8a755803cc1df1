//! Guarded calls: refuse to run a function on an invalid subject.

use super::error::GuardError;
use super::labeled::LabeledPredicate;
use super::validator::Validator;

/// A precondition guard built from labeled predicates.
///
/// [`Condition::call`] runs the whole [`Validator`] pipeline over the
/// subject first. If any predicate fails, the function is not called and a
/// [`GuardError`] carrying every violated message is returned. Otherwise the
/// function's result is returned.
///
/// # Examples
///
/// ```
/// use combinate::validate::{complement, cond, condition1};
///
/// let square_precondition = condition1([
///     cond("arg must not be zero", complement(|value: &i64| *value == 0)),
///     cond("arg must be small", |value: &i64| value.abs() < 1_000_000),
/// ]);
///
/// let unchecked_square = |value: i64| value * value;
///
/// assert_eq!(square_precondition.call(unchecked_square, 10), Ok(100));
///
/// let error = square_precondition.call(unchecked_square, 0).unwrap_err();
/// assert_eq!(error.to_string(), "arg must not be zero");
/// ```
pub struct Condition<T: ?Sized> {
    validator: Validator<T>,
}

impl<T: ?Sized> Condition<T> {
    /// Creates a guard from an existing validator pipeline.
    pub const fn new(validator: Validator<T>) -> Self {
        Self { validator }
    }

    /// The underlying validator pipeline.
    pub const fn validator(&self) -> &Validator<T> {
        &self.validator
    }

    /// Validates `subject` and, if it passes, calls `function` with a
    /// reference to it.
    ///
    /// # Errors
    ///
    /// Returns a [`GuardError`] with every violated message when `subject`
    /// fails at least one predicate.
    pub fn call_ref<R, F>(&self, function: F, subject: &T) -> Result<R, GuardError>
    where
        F: FnOnce(&T) -> R,
    {
        self.precondition(subject)?;
        Ok(function(subject))
    }

    fn precondition(&self, subject: &T) -> Result<(), GuardError> {
        let messages = self.validator.check(subject);
        if messages.is_empty() {
            Ok(())
        } else {
            Err(GuardError::new(messages))
        }
    }
}

impl<T> Condition<T> {
    /// Validates `subject` and, if it passes, calls `function` with it.
    ///
    /// # Errors
    ///
    /// Returns a [`GuardError`] with every violated message when `subject`
    /// fails at least one predicate. `function` is not called in that case.
    pub fn call<R, F>(&self, function: F, subject: T) -> Result<R, GuardError>
    where
        F: FnOnce(T) -> R,
    {
        self.precondition(&subject)?;
        Ok(function(subject))
    }

    /// Binds `function` behind this guard, producing a checked function.
    ///
    /// # Examples
    ///
    /// ```
    /// use combinate::validate::{cond, condition1};
    ///
    /// let checked_half = condition1([cond("arg must be even", |value: &u32| value % 2 == 0)])
    ///     .guard(|value: u32| value / 2);
    ///
    /// assert_eq!(checked_half(8), Ok(4));
    /// assert!(checked_half(7).is_err());
    /// ```
    pub fn guard<R, F>(self, function: F) -> impl Fn(T) -> Result<R, GuardError>
    where
        F: Fn(T) -> R,
    {
        move |subject| self.call(&function, subject)
    }
}

impl<T: ?Sized> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Condition<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Condition")
            .field("validator", &self.validator)
            .finish()
    }
}

/// Builds a [`Condition`] from labeled predicates.
///
/// The same predicates can back both a multi-error report
/// ([`validator`](super::validator)) and a fail-fast guard.
pub fn condition1<T, I>(predicates: I) -> Condition<T>
where
    T: ?Sized,
    I: IntoIterator<Item = LabeledPredicate<T>>,
{
    Condition::new(predicates.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::cond;
    use std::cell::Cell;

    #[test]
    fn test_call_joins_all_messages() {
        let guard = condition1([
            cond("arg must be positive", |value: &i32| *value > 0),
            cond("arg must be odd", |value: &i32| value % 2 != 0),
        ]);

        let error = guard.call(|value| value, -2).unwrap_err();
        assert_eq!(error.to_string(), "arg must be positive, arg must be odd");
    }

    #[test]
    fn test_call_does_not_invoke_function_on_failure() {
        let invoked = Cell::new(false);
        let guard = condition1([cond("never", |_: &i32| false)]);

        let result = guard.call(
            |value| {
                invoked.set(true);
                value
            },
            1,
        );

        assert!(result.is_err());
        assert!(!invoked.get());
    }

    #[test]
    fn test_call_ref_with_unsized_subject() {
        let guard = condition1([cond("must not be empty", |text: &str| !text.is_empty())]);
        assert_eq!(guard.call_ref(str::len, "abc"), Ok(3));
        assert!(guard.call_ref(str::len, "").is_err());
    }

    #[test]
    fn test_wrapped_function_result_propagates_unchanged() {
        let guard = condition1([cond("must be positive", |value: &i32| *value > 0)]);
        let parsed: Result<Result<u8, String>, GuardError> =
            guard.call(|value| u8::try_from(value).map_err(|error| error.to_string()), 300);
        assert!(matches!(parsed, Ok(Err(_))));
    }
}
