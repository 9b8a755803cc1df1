//! Fixed-depth currying macros.
//!
//! [`curry2!`] and [`curry3!`] convert a 2- or 3-argument function into a
//! chain of unary closures that bind arguments **right to left**: the first
//! call supplies the last parameter and the final call supplies the first.
//!
//! ```text
//! curry2!(f)(b)(a)    == f(a, b)
//! curry3!(f)(c)(b)(a) == f(a, b, c)
//! ```
//!
//! This lets a "mode" or "configuration" parameter be fixed ahead of time
//! while the subject is supplied last, at the call site.
//!
//! # Design Decisions
//!
//! The function and every captured argument are held in `std::rc::Rc`, so
//!
//! - the curried function can be called multiple times
//! - partial chains can be reused
//! - non-`Copy` arguments work (they are cloned out on each final call)
//!
//! For other arities, see the `curry!` procedural macro.

/// Converts a 2-argument function into a right-to-left curried form.
///
/// `curry2!(f)(b)(a) == f(a, b)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The second argument's type must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use combinate::curry2;
///
/// fn divide(numerator: i32, denominator: i32) -> i32 { numerator / denominator }
///
/// let divide_by = curry2!(divide);
/// let halve = divide_by(2);
///
/// assert_eq!(halve(10), 5);
/// assert_eq!(halve(7), 3);
/// ```
///
/// ## Binding configuration first
///
/// ```
/// use combinate::curry2;
///
/// let parse_radix = curry2!(|text: &str, radix: u32| i64::from_str_radix(text, radix).ok());
/// let parse_hex = parse_radix(16);
///
/// assert_eq!(parse_hex("ff"), Some(255));
/// assert_eq!(parse_hex("zz"), None);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |second| {
            let function = ::std::rc::Rc::clone(&function);
            let second = ::std::rc::Rc::new(second);
            move |first| {
                function(
                    first,
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a right-to-left curried form.
///
/// `curry3!(f)(c)(b)(a) == f(a, b, c)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The second and third arguments' types must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use combinate::curry3;
///
/// fn song_to_plays(song: &str, plays: u32, artist: &str) -> String {
///     format!("{artist} - {song}: {plays}")
/// }
///
/// let by_artist = curry3!(song_to_plays)("Steve");
/// let with_plays = by_artist(4);
///
/// assert_eq!(with_plays("care"), "Steve - care: 4");
/// assert_eq!(with_plays("water"), "Steve - water: 4");
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |third| {
            let function = ::std::rc::Rc::clone(&function);
            let third = ::std::rc::Rc::new(third);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let third = ::std::rc::Rc::clone(&third);
                let second = ::std::rc::Rc::new(second);
                move |first| {
                    function(
                        first,
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&third)),
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    fn describe(first: i32, second: i32, third: i32) -> String {
        format!("{first}-{second}-{third}")
    }

    #[test]
    fn test_curry2_binds_last_argument_first() {
        let curried = curry2!(subtract);
        assert_eq!(curried(3)(10), 7);
    }

    #[test]
    fn test_curry3_binds_right_to_left() {
        let curried = curry3!(describe);
        assert_eq!(curried(3)(2)(1), "1-2-3");
    }

    #[test]
    fn test_curry3_partial_chain_is_reusable() {
        let with_third = curry3!(describe)(30);
        let with_second = with_third(20);
        assert_eq!(with_second(1), "1-20-30");
        assert_eq!(with_second(2), "2-20-30");
        assert_eq!(with_third(0)(0), "0-0-30");
    }
}
