//! Null-guard wrappers.

use paste::paste;

use crate::compose::Callable;

/// A tuple of per-position default values.
///
/// For defaults `(A, B, ..)`, the guarded argument list is
/// `(Option<A>, Option<B>, ..)`; [`Defaults::fill`] replaces each `None`
/// with the default at the same position. Implemented for tuples of 1 to 6
/// `Clone` elements.
///
/// # Examples
///
/// ```
/// use combinate::guard::Defaults;
///
/// let defaults = (0, "unknown");
/// assert_eq!(defaults.fill((Some(5), None)), (5, "unknown"));
/// ```
pub trait Defaults: Sized {
    /// The argument list with every position optional.
    type Guarded;

    /// Substitutes the default for every absent position.
    fn fill(&self, guarded: Self::Guarded) -> Self;
}

macro_rules! impl_defaults {
    ($(($index:tt $element:ident)),+) => {
        paste! {
            impl<$($element: Clone),+> Defaults for ($($element,)+) {
                type Guarded = ($(Option<$element>,)+);

                #[inline]
                fn fill(&self, ($([<$element:lower>],)+): Self::Guarded) -> Self {
                    ($([<$element:lower>].unwrap_or_else(|| self.$index.clone()),)+)
                }
            }
        }
    };
}

impl_defaults!((0 A));
impl_defaults!((0 A), (1 B));
impl_defaults!((0 A), (1 B), (2 C));
impl_defaults!((0 A), (1 B), (2 C), (3 D));
impl_defaults!((0 A), (1 B), (2 C), (3 D), (4 E));
impl_defaults!((0 A), (1 B), (2 C), (3 D), (4 E), (5 G));

/// Wraps `function` so that absent arguments are replaced by defaults.
///
/// The returned function takes a tuple of `Option`s, one per parameter of
/// `function`. Each `None` is replaced by the default at the same position in
/// `defaults`; present values are passed through untouched. `function` never
/// observes absence.
///
/// # Examples
///
/// ```
/// use combinate::guard::fnull;
///
/// let describe = fnull(
///     |name: &str, level: u8| format!("{name}@{level}"),
///     ("anonymous", 1),
/// );
///
/// assert_eq!(describe((None, None)), "anonymous@1");
/// assert_eq!(describe((Some("ada"), None)), "ada@1");
/// assert_eq!(describe((None, Some(0))), "anonymous@0");
/// ```
#[inline]
pub fn fnull<F, D>(function: F, defaults: D) -> impl Fn(D::Guarded) -> <F as Callable<D>>::Output
where
    D: Defaults,
    F: Callable<D>,
{
    move |guarded| function.call_with(defaults.fill(guarded))
}

/// Wraps a function of a variable-length argument list so that absent
/// elements are replaced by defaults.
///
/// Position `i` takes `defaults[i]`; positions past the end of `defaults`
/// take the last default. When an element is absent and `defaults` is empty,
/// `function` is not called and the result is `None`.
///
/// # Examples
///
/// ```
/// use combinate::guard::fnull_sequence;
///
/// let total = fnull_sequence(|values: Vec<i32>| values.iter().sum::<i32>(), vec![100, 0]);
///
/// assert_eq!(total(vec![None, Some(5)]), Some(105));
/// assert_eq!(total(vec![Some(1), None, None]), Some(1));
///
/// let unguarded = fnull_sequence(|values: Vec<i32>| values.len(), Vec::new());
/// assert_eq!(unguarded(vec![Some(1), Some(2)]), Some(2));
/// assert_eq!(unguarded(vec![Some(1), None]), None);
/// ```
pub fn fnull_sequence<T, R, F, D>(function: F, defaults: D) -> impl Fn(Vec<Option<T>>) -> Option<R>
where
    T: Clone,
    F: Fn(Vec<T>) -> R,
    D: IntoIterator<Item = T>,
{
    let defaults: Vec<T> = defaults.into_iter().collect();
    move |arguments| {
        let filled = arguments
            .into_iter()
            .enumerate()
            .map(|(index, argument)| {
                argument.or_else(|| defaults.get(index).or_else(|| defaults.last()).cloned())
            })
            .collect::<Option<Vec<T>>>()?;
        Some(function(filled))
    }
}
