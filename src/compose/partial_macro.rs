//! The `partial!` macro for positional prefix binding.
//!
//! `partial!(f, a, b, __, __)` binds the first two parameters of a
//! 4-argument function and returns a closure of the remaining two. Each
//! `__` marks one remaining parameter; placeholders must follow every bound
//! value, since only a prefix can be bound.

/// Binds a prefix of a function's arguments.
///
/// Write the bound values first, then one `__` (double underscore) per
/// remaining parameter:
///
/// - `partial!(f, a, __)` creates `|b| f(a, b)`
/// - `partial!(f, a, __, __)` creates `|b, c| f(a, b, c)`
/// - `partial!(f, a, b)` creates `|| f(a, b)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// **Important**: `__` is matched as a literal token. Do not import or
/// define anything named `__` for use with this macro.
///
/// # Type Requirements
///
/// - Bound values must implement [`Clone`] (the result may be called many times)
/// - The function must implement [`Fn`]
///
/// # Supported Argument Counts
///
/// Up to 8 positions in total.
///
/// # Examples
///
/// ```
/// use combinate::partial;
///
/// fn greet(greeting: &str, punctuation: char, name: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = partial!(greet, "Hello", __, __);
/// assert_eq!(hello('!', "Ada"), "Hello, Ada!");
///
/// let excited_hello = partial!(hello, '!', __);
/// assert_eq!(excited_hello("Alan"), "Hello, Alan!");
/// ```
///
/// ## Associativity
///
/// Splitting the bound prefix across several applications gives the same
/// result as binding it at once:
///
/// ```
/// use combinate::partial;
///
/// fn sum(first: i32, second: i32, third: i32) -> i32 { first + second + third }
///
/// let at_once = partial!(sum, 1, 2, __);
/// let step_by_step = partial!(partial!(sum, 1, __, __), 2, __);
/// assert_eq!(at_once(3), step_by_step(3));
/// ```
#[macro_export]
macro_rules! partial {
    // Bound values, before the first placeholder.
    (@bound $function:expr; [$($bound:tt)*]; [$($fresh:ident)*]; __ $(, $($tail:tt)*)?) => {
        $crate::partial!(@open $function; [$($bound)*]; []; [$($fresh)*]; __ $(, $($tail)*)?)
    };
    (@bound $function:expr; [$($bound:tt)*]; [$next:ident $($fresh:ident)*]; $value:expr $(, $($tail:tt)*)?) => {
        $crate::partial!(@bound $function; [$($bound)* ($next $value)]; [$($fresh)*]; $($($tail)*)?)
    };
    (@bound $function:expr; [$($bound:tt)*]; [$($fresh:ident)*];) => {
        $crate::partial!(@emit $function; [$($bound)*]; [])
    };

    // Remaining parameters, one per placeholder.
    (@open $function:expr; [$($bound:tt)*]; [$($parameter:ident)*]; [$next:ident $($fresh:ident)*]; __ $(, $($tail:tt)*)?) => {
        $crate::partial!(@open $function; [$($bound)*]; [$($parameter)* $next]; [$($fresh)*]; $($($tail)*)?)
    };
    (@open $function:expr; [$($bound:tt)*]; [$($parameter:ident)*]; [$($fresh:ident)*];) => {
        $crate::partial!(@emit $function; [$($bound)*]; [$($parameter)*])
    };
    (@open $function:expr; [$($bound:tt)*]; [$($parameter:ident)*]; [$($fresh:ident)*]; $($tail:tt)+) => {
        ::std::compile_error!("partial! binds a prefix: every `__` must come after all bound values")
    };

    (@emit $function:expr; [$(($name:ident $value:expr))*]; [$($parameter:ident)*]) => {{
        let function = $function;
        $(let $name = $value;)*
        move |$($parameter),*| function($(::std::clone::Clone::clone(&$name),)* $($parameter),*)
    }};

    ($function:expr $(, $($arguments:tt)*)?) => {
        $crate::partial!(
            @bound $function;
            [];
            [argument0 argument1 argument2 argument3 argument4 argument5 argument6 argument7];
            $($($arguments)*)?
        )
    };
}

#[cfg(test)]
mod tests {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn concat(first: String, second: String, third: String) -> String {
        first + &second + &third
    }

    #[test]
    fn test_partial_single_bound() {
        let add_five = partial!(add, 5, __);
        assert_eq!(add_five(3), 8);
        assert_eq!(add_five(-5), 0);
    }

    #[test]
    fn test_partial_thunk() {
        let thunk = partial!(add, 3, 5);
        assert_eq!(thunk(), 8);
    }

    #[test]
    fn test_partial_no_bound() {
        let same_as_add = partial!(add, __, __);
        assert_eq!(same_as_add(1, 2), 3);
    }

    #[test]
    fn test_partial_clones_non_copy_values() {
        let prefixed = partial!(concat, String::from("<"), __, __);
        assert_eq!(prefixed(String::from("a"), String::from(">")), "<a>");
        assert_eq!(prefixed(String::from("b"), String::from(">")), "<b>");
    }
}
