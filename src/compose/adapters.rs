//! Arity adapters: convert between calling conventions.
//!
//! - [`splat`]: positional function → function of one argument tuple
//! - [`unsplat`]: function of a `Vec` → function of any homogeneous argument list
//! - [`curry`]: fix a function to exactly one argument
//! - [`partial`]: bind a prefix of the arguments
//!
//! None of these check arity at run time. A mismatch between the function
//! and the supplied argument list is a type error.

use super::callable::{Arguments, Callable, Prefix};

/// Returns a function taking one argument tuple and spreading it into
/// `function`'s positional parameters.
///
/// # Examples
///
/// ```
/// use combinate::compose::splat;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_pair = splat(add);
/// assert_eq!(add_pair((1, 2)), 3);
///
/// let pairs = vec![(1, 2), (10, 20)];
/// let sums: Vec<i32> = pairs.into_iter().map(splat(add)).collect();
/// assert_eq!(sums, vec![3, 30]);
/// ```
#[inline]
pub fn splat<F, Args>(function: F) -> impl Fn(Args) -> <F as Callable<Args>>::Output
where
    F: Callable<Args>,
{
    move |arguments| function.call_with(arguments)
}

/// Returns a function taking an argument list and passing it to `function`
/// collected into a single `Vec`.
///
/// The argument list may be a homogeneous tuple of up to six elements, an
/// array, or a `Vec`.
///
/// # Examples
///
/// ```
/// use combinate::compose::unsplat;
///
/// let join_three = unsplat(|parts: Vec<&str>| parts.join(" "));
/// assert_eq!(join_three(("joe", "frank", "moe")), "joe frank moe");
///
/// let join_array = unsplat(|parts: Vec<&str>| parts.join("-"));
/// assert_eq!(join_array(["a", "b"]), "a-b");
/// ```
#[inline]
pub fn unsplat<T, Args, F, R>(function: F) -> impl Fn(Args) -> R
where
    F: Fn(Vec<T>) -> R,
    Args: Arguments<T>,
{
    move |arguments| function(arguments.into_arguments())
}

/// Restricts `function` to exactly one argument.
///
/// Useful when handing a function to a caller whose invocation convention
/// does not match, for example when a method reference must be used where a
/// unary closure is expected.
///
/// # Examples
///
/// ```
/// use combinate::compose::curry;
///
/// let parse = curry(|text: &str| text.parse::<i32>().unwrap_or_default());
/// let numbers: Vec<i32> = ["11", "11", "x"].into_iter().map(parse).collect();
/// assert_eq!(numbers, vec![11, 11, 0]);
/// ```
#[inline]
pub fn curry<A, R, F>(function: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
{
    move |argument| function(argument)
}

/// Binds the leading arguments of `function`.
///
/// The result takes the remaining arguments as a tuple and calls `function`
/// with the bound prefix followed by them:
/// `partial(f, (a, b))((c,)) == f(a, b, c)`.
///
/// The bound prefix is cloned on every call, so the result can be invoked
/// any number of times.
///
/// # Examples
///
/// ```
/// use combinate::compose::partial;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
///
/// let unit_base = partial(volume, (1, 1));
/// assert_eq!(unit_base((7,)), 7);
///
/// let wide = partial(volume, (10,));
/// assert_eq!(wide((2, 3)), 60);
/// ```
#[inline]
pub fn partial<F, Bound, Rest>(
    function: F,
    bound: Bound,
) -> impl Fn(Rest) -> <F as Callable<<Bound as Prefix<Rest>>::Joined>>::Output
where
    Bound: Prefix<Rest> + Clone,
    F: Callable<<Bound as Prefix<Rest>>::Joined>,
{
    move |rest| function.call_with(bound.clone().join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat_thunk() {
        let thunk = splat(|| 42);
        assert_eq!(thunk(()), 42);
    }

    #[test]
    fn test_partial_binding_everything() {
        let thunk = partial(|first: i32, second: i32| first - second, (10, 4));
        assert_eq!(thunk(()), 6);
    }

    #[test]
    fn test_unsplat_of_vec_is_passthrough() {
        let total = unsplat(|values: Vec<i32>| values.iter().sum::<i32>());
        assert_eq!(total(vec![1, 2, 3]), 6);
    }
}
