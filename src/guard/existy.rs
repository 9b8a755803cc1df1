//! Existence and truthiness.

/// Values that can be judged *truthy*.
///
/// Only `false` and absence are falsey. Zero, empty strings and empty
/// collections are truthy.
///
/// # Examples
///
/// ```
/// use combinate::guard::Truthy;
///
/// assert!(0_i32.is_truthy());
/// assert!("".is_truthy());
/// assert!(!false.is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(!Some(false).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` unless the value is `false` or absent.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_always_truthy {
    ($($type:ty),* $(,)?) => {
        $(
            impl Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_always_truthy!(
    (), char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

/// Returns `true` when the value is present.
///
/// # Examples
///
/// ```
/// use combinate::guard::existy;
///
/// assert!(existy(&Some(false)));
/// assert!(existy(&Some(0)));
/// assert!(!existy(&None::<i32>));
/// ```
#[inline]
pub const fn existy<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Returns `true` when the value is present and not `false`.
///
/// # Examples
///
/// ```
/// use combinate::guard::truthy;
///
/// assert!(truthy(&Some(0)));
/// assert!(!truthy(&Some(false)));
/// assert!(!truthy(&None::<bool>));
/// ```
#[inline]
pub fn truthy<T: Truthy>(value: &Option<T>) -> bool {
    value.is_truthy()
}

/// Runs `action` only when `condition` is truthy.
///
/// # Examples
///
/// ```
/// use combinate::guard::do_when;
///
/// assert_eq!(do_when(true, || "ran"), Some("ran"));
/// assert_eq!(do_when(Some(false), || "ran"), None);
/// assert_eq!(do_when(Some(0), || "ran"), Some("ran"));
/// ```
#[inline]
pub fn do_when<C, R, F>(condition: C, action: F) -> Option<R>
where
    C: Truthy,
    F: FnOnce() -> R,
{
    condition.is_truthy().then(action)
}
