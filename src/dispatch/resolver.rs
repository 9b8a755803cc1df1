//! Ordered dispatch: the first candidate with an answer wins.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

type Candidate<A, R> = Rc<dyn Fn(&A) -> Option<R>>;

/// An ordered list of candidate functions tried against the same arguments.
///
/// [`Dispatch::resolve`] calls each candidate in order and returns the first
/// `Some`. `None` means "not applicable here" and passes control to the next
/// candidate; `Some(false)` is an answer like any other and stops the search.
/// If no candidate answers, the result is `None`.
///
/// Every candidate up to the winner actually runs, so candidates should be
/// cheap and free of side effects.
///
/// Multiple arguments are passed as a tuple: `Dispatch<(A, B), R>`.
///
/// # Examples
///
/// ```
/// use combinate::dispatch::Dispatch;
///
/// let describe = Dispatch::new()
///     .or(|value: &i32| (*value < 0).then_some("negative"))
///     .or(|value: &i32| (*value == 0).then_some("zero"));
///
/// assert_eq!(describe.resolve(&-4), Some("negative"));
/// assert_eq!(describe.resolve(&0), Some("zero"));
/// assert_eq!(describe.resolve(&9), None);
/// ```
///
/// ## Layering
///
/// A dispatcher is itself a valid candidate. Special cases put in front of an
/// existing dispatcher override it without modifying it:
///
/// ```
/// use combinate::dispatch::Dispatch;
///
/// let general = Dispatch::new().or(|value: &i32| Some(format!("number {value}")));
/// let special = general.prepend(|value: &i32| (*value == 42).then(|| String::from("the answer")));
///
/// assert_eq!(special.resolve(&42).as_deref(), Some("the answer"));
/// assert_eq!(special.resolve(&7).as_deref(), Some("number 7"));
/// assert_eq!(general.resolve(&42).as_deref(), Some("number 42"));
/// ```
pub struct Dispatch<A: ?Sized, R> {
    candidates: SmallVec<[Candidate<A, R>; 4]>,
}

impl<A: ?Sized, R> Dispatch<A, R> {
    /// Creates a dispatcher with no candidates; it resolves to `None`.
    pub fn new() -> Self {
        Self {
            candidates: SmallVec::new(),
        }
    }

    /// Appends a candidate with lower priority than the existing ones.
    #[must_use]
    pub fn or<F>(mut self, candidate: F) -> Self
    where
        F: Fn(&A) -> Option<R> + 'static,
    {
        self.candidates.push(Rc::new(candidate));
        self
    }

    /// Returns a new dispatcher that tries `candidate` before every existing
    /// candidate. `self` is left untouched.
    #[must_use]
    pub fn prepend<F>(&self, candidate: F) -> Self
    where
        F: Fn(&A) -> Option<R> + 'static,
    {
        let mut candidates: SmallVec<[Candidate<A, R>; 4]> =
            SmallVec::with_capacity(self.candidates.len() + 1);
        candidates.push(Rc::new(candidate));
        candidates.extend(self.candidates.iter().cloned());
        Self { candidates }
    }

    /// Appends every candidate of `fallback` after the existing ones.
    #[must_use]
    pub fn then(mut self, fallback: &Self) -> Self {
        self.candidates.extend(fallback.candidates.iter().cloned());
        self
    }

    /// Tries each candidate in order and returns the first answer.
    pub fn resolve(&self, arguments: &A) -> Option<R> {
        self.candidates
            .iter()
            .find_map(|candidate| candidate(arguments))
    }

    /// The number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` when there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Converts the dispatcher into a plain function, usable as a candidate
    /// of another dispatcher.
    pub fn into_fn(self) -> impl Fn(&A) -> Option<R> {
        move |arguments: &A| self.resolve(arguments)
    }
}

impl<A: ?Sized, R> Default for Dispatch<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, R> Clone for Dispatch<A, R> {
    fn clone(&self) -> Self {
        Self {
            candidates: self.candidates.clone(),
        }
    }
}

impl<A: ?Sized, R> fmt::Debug for Dispatch<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Dispatch")
            .field("candidates", &self.candidates.len())
            .finish()
    }
}

/// Builds a [`Dispatch`] from a homogeneous sequence of candidates.
///
/// For candidates of different closure types, use [`dispatch!`](crate::dispatch!)
/// or the [`Dispatch::or`] builder.
///
/// # Examples
///
/// ```
/// use combinate::dispatch::dispatch;
///
/// let thresholds: Vec<Box<dyn Fn(&u32) -> Option<&'static str>>> = vec![
///     Box::new(|value| (*value > 100).then_some("large")),
///     Box::new(|value| (*value > 10).then_some("medium")),
///     Box::new(|_| Some("small")),
/// ];
///
/// let size = dispatch(thresholds);
/// assert_eq!(size.resolve(&500), Some("large"));
/// assert_eq!(size.resolve(&50), Some("medium"));
/// assert_eq!(size.resolve(&5), Some("small"));
/// ```
pub fn dispatch<A, R, F, I>(candidates: I) -> Dispatch<A, R>
where
    A: ?Sized,
    F: Fn(&A) -> Option<R> + 'static,
    I: IntoIterator<Item = F>,
{
    candidates
        .into_iter()
        .fold(Dispatch::new(), |dispatcher, candidate| dispatcher.or(candidate))
}

/// Builds a [`Dispatch`] from candidates of any closure type, in priority
/// order.
///
/// # Examples
///
/// ```
/// use combinate::dispatch;
///
/// let parity = dispatch!(
///     |value: &i32| (*value == 0).then_some("zero"),
///     |value: &i32| Some(if value % 2 == 0 { "even" } else { "odd" }),
/// );
///
/// assert_eq!(parity.resolve(&0), Some("zero"));
/// assert_eq!(parity.resolve(&3), Some("odd"));
/// ```
#[macro_export]
macro_rules! dispatch {
    ($($candidate:expr),+ $(,)?) => {
        $crate::dispatch::Dispatch::new()$(.or($candidate))+
    };
}

/// A subject that reports which variant it is.
///
/// Used by [`isa`] to select handlers for a closed set of tagged variants.
pub trait Tagged {
    /// The subject's type tag.
    fn tag(&self) -> &str;
}

/// A candidate that applies `action` only to subjects tagged `tag`.
///
/// # Examples
///
/// ```
/// use combinate::dispatch::{Tagged, isa};
///
/// enum Notice {
///     Warning(String),
///     Info(String),
/// }
///
/// impl Tagged for Notice {
///     fn tag(&self) -> &str {
///         match self {
///             Self::Warning(_) => "warning",
///             Self::Info(_) => "info",
///         }
///     }
/// }
///
/// let warn = isa("warning", |notice: &Notice| match notice {
///     Notice::Warning(text) | Notice::Info(text) => format!("WARNING: {text}"),
/// });
///
/// assert_eq!(warn(&Notice::Warning(String::from("low disk"))).as_deref(), Some("WARNING: low disk"));
/// assert_eq!(warn(&Notice::Info(String::from("ok"))), None);
/// ```
pub fn isa<T, R, F>(tag: impl Into<String>, action: F) -> impl Fn(&T) -> Option<R>
where
    T: Tagged + ?Sized,
    F: Fn(&T) -> R,
{
    let tag = tag.into();
    move |subject: &T| (subject.tag() == tag).then(|| action(subject))
}
