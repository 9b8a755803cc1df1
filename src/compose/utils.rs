//! Helper combinators used alongside the arity adapters.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`always`]: A function that ignores its input and returns a fixed value (K combinator)
//! - [`repeatedly`]: Collect the results of calling a function `times` times
//! - [`iterate_until`]: Feed a function its own output while a check holds
//! - [`best`]: Pick the element that wins a pairwise comparison

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use combinate::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its argument and returns a clone of
/// `value`.
///
/// Handy as the terminal fallback of a dispatcher or as the generator for
/// [`repeatedly`].
///
/// # Examples
///
/// ```
/// use combinate::compose::always;
///
/// let fallback = always::<_, &str>(Some("default"));
/// assert_eq!(fallback("anything"), Some("default"));
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(always(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn always<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Calls `function` `times` times, passing the iteration index, and collects
/// the results.
///
/// # Examples
///
/// ```
/// use combinate::compose::{always, repeatedly};
///
/// assert_eq!(repeatedly(3, always("Odelay!")), vec!["Odelay!"; 3]);
/// assert_eq!(repeatedly(4, |index| index * 10), vec![0, 10, 20, 30]);
/// ```
pub fn repeatedly<T, F>(times: usize, function: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..times).map(function).collect()
}

/// Applies `function` to `initial`, then repeatedly to its own result, and
/// collects every result for which `check` holds. Stops at the first result
/// that fails `check`.
///
/// # Examples
///
/// ```
/// use combinate::compose::iterate_until;
///
/// let powers = iterate_until(|value: &u32| value * 2, |value| *value <= 1024, 1);
/// assert_eq!(powers, vec![2, 4, 8, 16, 32, 64, 128, 256, 512, 1024]);
/// ```
pub fn iterate_until<T, F, C>(function: F, check: C, initial: T) -> Vec<T>
where
    F: Fn(&T) -> T,
    C: Fn(&T) -> bool,
{
    let mut results = Vec::new();
    let mut current = function(&initial);
    while check(&current) {
        let next = function(&current);
        results.push(current);
        current = next;
    }
    results
}

/// Returns the element preferred by `better`, scanning left to right.
///
/// `better(candidate, current)` returns `true` when `candidate` should
/// replace the current best. Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use combinate::compose::best;
///
/// assert_eq!(best(|candidate: &i32, current: &i32| candidate > current, vec![1, 2, 3, 4, 5]), Some(5));
/// assert_eq!(best(|candidate: &&str, current: &&str| candidate.len() > current.len(), vec!["a", "bbb", "cc"]), Some("bbb"));
/// assert_eq!(best(|_: &i32, _: &i32| true, Vec::new()), None);
/// ```
pub fn best<T, I, F>(better: F, sequence: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T, &T) -> bool,
{
    sequence
        .into_iter()
        .reduce(|current, candidate| if better(&candidate, &current) { candidate } else { current })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_iterate_until_initial_failing_check() {
        let results = iterate_until(|value: &i32| value + 1, |value| *value < 0, 0);
        assert!(results.is_empty());
    }

    #[test]
    fn test_best_keeps_first_on_ties() {
        let pairs = vec![(1, 'a'), (1, 'b')];
        let winner = best(
            |candidate: &(i32, char), current: &(i32, char)| candidate.0 > current.0,
            pairs,
        );
        assert_eq!(winner, Some((1, 'a')));
    }
}
