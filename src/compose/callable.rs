//! Argument-list traits shared by the arity adapters.
//!
//! Rust has no variadic functions, so an *argument list* is modelled as a
//! tuple. The traits here connect positional functions and tuples:
//!
//! - [`Callable`]: call `Fn(A, B, ..)` with `(A, B, ..)`
//! - [`Arguments`]: collect a homogeneous tuple, array or `Vec` into a `Vec`
//! - [`Prefix`]: append the remaining arguments to a bound prefix
//!
//! All impls cover argument lists of up to six elements.

use paste::paste;

/// A function that can be invoked with its arguments packed into a tuple.
///
/// Implemented for every `Fn` of arity 0 to 6.
///
/// # Examples
///
/// ```
/// use combinate::compose::Callable;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// assert_eq!(add.call_with((2, 3)), 5);
/// assert_eq!((|| "thunk").call_with(()), "thunk");
/// ```
pub trait Callable<Args> {
    /// The return type of the function.
    type Output;

    /// Calls the function with the elements of `arguments` as positional
    /// arguments, in order.
    fn call_with(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($argument:ident),*) => {
        paste! {
            impl<Function, R, $($argument,)*> Callable<($($argument,)*)> for Function
            where
                Function: Fn($($argument),*) -> R,
            {
                type Output = R;

                #[inline]
                fn call_with(&self, ($([<$argument:lower>],)*): ($($argument,)*)) -> R {
                    self($([<$argument:lower>]),*)
                }
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, G);

/// A homogeneous argument list that can be collected into a `Vec`.
///
/// # Examples
///
/// ```
/// use combinate::compose::Arguments;
///
/// assert_eq!((1, 2, 3).into_arguments(), vec![1, 2, 3]);
/// assert_eq!([4, 5].into_arguments(), vec![4, 5]);
/// assert!(Arguments::<i32>::into_arguments(()).is_empty());
/// ```
pub trait Arguments<T> {
    /// Collects the arguments, preserving their order.
    fn into_arguments(self) -> Vec<T>;
}

macro_rules! impl_arguments {
    ($($element:ident),*) => {
        impl<T> Arguments<T> for ($(impl_arguments!(@as_t $element),)*) {
            #[allow(non_snake_case)]
            #[inline]
            fn into_arguments(self) -> Vec<T> {
                let ($($element,)*) = self;
                vec![$($element),*]
            }
        }
    };
    (@as_t $element:ident) => { T };
}

impl_arguments!();
impl_arguments!(A);
impl_arguments!(A, B);
impl_arguments!(A, B, C);
impl_arguments!(A, B, C, D);
impl_arguments!(A, B, C, D, E);
impl_arguments!(A, B, C, D, E, G);

impl<T, const N: usize> Arguments<T> for [T; N] {
    #[inline]
    fn into_arguments(self) -> Vec<T> {
        self.into()
    }
}

impl<T> Arguments<T> for Vec<T> {
    #[inline]
    fn into_arguments(self) -> Vec<T> {
        self
    }
}

/// A bound argument prefix that can be completed with the remaining
/// arguments.
///
/// `(a, b).join((c,)) == (a, b, c)`.
///
/// # Examples
///
/// ```
/// use combinate::compose::Prefix;
///
/// assert_eq!((1, "two").join((3.0,)), (1, "two", 3.0));
/// assert_eq!(().join((1, 2)), (1, 2));
/// ```
pub trait Prefix<Rest> {
    /// The full argument list: the prefix followed by the rest.
    type Joined;

    /// Appends `rest` after the prefix.
    fn join(self, rest: Rest) -> Self::Joined;
}

macro_rules! impl_prefix {
    ([$($bound:ident),*] [$($rest:ident),*]) => {
        paste! {
            impl<$($bound,)* $($rest,)*> Prefix<($($rest,)*)> for ($($bound,)*) {
                type Joined = ($($bound,)* $($rest,)*);

                #[inline]
                fn join(
                    self,
                    ($([<$rest:lower>],)*): ($($rest,)*),
                ) -> Self::Joined {
                    let ($([<$bound:lower>],)*) = self;
                    ($([<$bound:lower>],)* $([<$rest:lower>],)*)
                }
            }
        }
    };
}

impl_prefix!([] []);
impl_prefix!([] [R1]);
impl_prefix!([] [R1, R2]);
impl_prefix!([] [R1, R2, R3]);
impl_prefix!([] [R1, R2, R3, R4]);
impl_prefix!([] [R1, R2, R3, R4, R5]);
impl_prefix!([] [R1, R2, R3, R4, R5, R6]);
impl_prefix!([B1] []);
impl_prefix!([B1] [R1]);
impl_prefix!([B1] [R1, R2]);
impl_prefix!([B1] [R1, R2, R3]);
impl_prefix!([B1] [R1, R2, R3, R4]);
impl_prefix!([B1] [R1, R2, R3, R4, R5]);
impl_prefix!([B1, B2] []);
impl_prefix!([B1, B2] [R1]);
impl_prefix!([B1, B2] [R1, R2]);
impl_prefix!([B1, B2] [R1, R2, R3]);
impl_prefix!([B1, B2] [R1, R2, R3, R4]);
impl_prefix!([B1, B2, B3] []);
impl_prefix!([B1, B2, B3] [R1]);
impl_prefix!([B1, B2, B3] [R1, R2]);
impl_prefix!([B1, B2, B3] [R1, R2, R3]);
impl_prefix!([B1, B2, B3, B4] []);
impl_prefix!([B1, B2, B3, B4] [R1]);
impl_prefix!([B1, B2, B3, B4] [R1, R2]);
impl_prefix!([B1, B2, B3, B4, B5] []);
impl_prefix!([B1, B2, B3, B4, B5] [R1]);
impl_prefix!([B1, B2, B3, B4, B5, B6] []);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callable_with_six_arguments() {
        let sum = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
        assert_eq!(sum.call_with((1, 2, 3, 4, 5, 6)), 21);
    }

    #[test]
    fn test_prefix_preserves_order() {
        assert_eq!(('a', 'b').join(('c', 'd')), ('a', 'b', 'c', 'd'));
    }

    #[test]
    fn test_arguments_from_vec_is_unchanged() {
        assert_eq!(vec!["x", "y"].into_arguments(), vec!["x", "y"]);
    }
}
