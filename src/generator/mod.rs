//! Counter-backed unique string generators.
//!
//! [`UniqueStrings`] is the exclusive form: generating needs `&mut self`, so
//! each instance has exactly one owner. With the `sync` feature,
//! [`SharedUniqueStrings`] keeps the counter behind a mutex and can be
//! shared between threads.
//!
//! Counters are per instance. Two instances starting at the same value
//! produce the same strings.
//!
//! A counter never wraps. The last value handed out is `u64::MAX - 1`;
//! after that, generation fails with [`GenerateError::Exhausted`].

use std::fmt;

#[cfg(feature = "sync")]
use parking_lot::Mutex;

/// Errors raised when generating a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The counter has no successor left.
    Exhausted,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(formatter, "Unique string counter is exhausted"),
        }
    }
}

impl std::error::Error for GenerateError {}

static_assertions::assert_impl_all!(GenerateError: Send, Sync, Copy, std::error::Error);

/// Produces `"{prefix}{counter}"` strings from a post-incremented counter.
///
/// # Examples
///
/// ```
/// use combinate::generator::UniqueStrings;
///
/// let mut ids = UniqueStrings::starting_at(0);
/// assert_eq!(ids.generate("argument").as_deref(), Ok("argument0"));
/// assert_eq!(ids.generate("argument").as_deref(), Ok("argument1"));
/// assert_eq!(ids.generate("field").as_deref(), Ok("field2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueStrings {
    counter: u64,
}

impl UniqueStrings {
    /// Creates a generator whose first string uses `start`.
    pub const fn starting_at(start: u64) -> Self {
        Self { counter: start }
    }

    /// Returns `prefix` followed by the current counter, then increments it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Exhausted`] when the counter is `u64::MAX`.
    /// The counter is left unchanged, so every later call fails as well.
    pub fn generate(&mut self, prefix: &str) -> Result<String, GenerateError> {
        let value = self.counter;
        self.counter = value.checked_add(1).ok_or(GenerateError::Exhausted)?;
        Ok(format!("{prefix}{value}"))
    }

    /// The counter value the next string will use.
    pub const fn peek(&self) -> u64 {
        self.counter
    }

    /// Adapts the generator into a closure over prefixes.
    pub fn into_fn(mut self) -> impl FnMut(&str) -> Result<String, GenerateError> {
        move |prefix: &str| self.generate(prefix)
    }
}

impl Default for UniqueStrings {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

/// [`UniqueStrings`] behind a mutex.
///
/// Each call to [`SharedUniqueStrings::generate`] reads and increments the
/// counter under one lock, so no value is handed out twice.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use combinate::generator::SharedUniqueStrings;
///
/// let ids = Arc::new(SharedUniqueStrings::starting_at(1));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let ids = Arc::clone(&ids);
///         thread::spawn(move || ids.generate("job"))
///     })
///     .collect();
///
/// let mut names: Vec<String> = handles
///     .into_iter()
///     .map(|handle| handle.join().unwrap().unwrap())
///     .collect();
/// names.sort();
/// assert_eq!(names, vec!["job1", "job2", "job3", "job4"]);
/// ```
#[cfg(feature = "sync")]
#[derive(Debug, Default)]
pub struct SharedUniqueStrings {
    inner: Mutex<UniqueStrings>,
}

#[cfg(feature = "sync")]
impl SharedUniqueStrings {
    /// Creates a shared generator whose first string uses `start`.
    pub const fn starting_at(start: u64) -> Self {
        Self {
            inner: Mutex::new(UniqueStrings::starting_at(start)),
        }
    }

    /// Returns `prefix` followed by the current counter, then increments it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Exhausted`] when the counter is `u64::MAX`.
    pub fn generate(&self, prefix: &str) -> Result<String, GenerateError> {
        self.inner.lock().generate(prefix)
    }

    /// The counter value the next string will use.
    pub fn peek(&self) -> u64 {
        self.inner.lock().peek()
    }

    /// Consumes the shared generator and returns the exclusive one.
    pub fn into_inner(self) -> UniqueStrings {
        self.inner.into_inner()
    }
}

#[cfg(feature = "sync")]
impl From<UniqueStrings> for SharedUniqueStrings {
    fn from(generator: UniqueStrings) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }
}

#[cfg(feature = "sync")]
static_assertions::assert_impl_all!(SharedUniqueStrings: Send, Sync);
