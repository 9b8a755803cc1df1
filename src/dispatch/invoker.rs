//! Method invocation on targets that may or may not carry the method.

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "fxhash")]
type Slots<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fxhash"))]
type Slots<K, V> = std::collections::HashMap<K, V>;

/// A named method body.
///
/// Two `Method`s are the same method only when they share the same body
/// allocation; equal names are not enough. Cloning shares the body.
pub struct Method<T: ?Sized, A, R> {
    name: Rc<str>,
    body: Rc<dyn Fn(&T, A) -> R>,
}

impl<T: ?Sized, A, R> Method<T, A, R> {
    /// Creates a method with a fresh identity.
    pub fn new<F>(name: impl Into<Rc<str>>, body: F) -> Self
    where
        F: Fn(&T, A) -> R + 'static,
    {
        Self {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    /// The method's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the body with `target` as the receiver.
    pub fn call(&self, target: &T, arguments: A) -> R {
        (self.body)(target, arguments)
    }

    /// Returns `true` when both values share the same body.
    pub fn is(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl<T: ?Sized, A, R> Clone for Method<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            body: Rc::clone(&self.body),
        }
    }
}

impl<T: ?Sized, A, R> fmt::Debug for Method<T, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Method")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A target that can be asked for its installed methods.
pub trait Receiver<A, R> {
    /// The method installed under `name`, if any.
    fn method(&self, name: &str) -> Option<Method<Self, A, R>>;
}

/// Methods installed on one receiver, keyed by name.
///
/// Receivers usually hold a `MethodTable` and delegate
/// [`Receiver::method`] to [`MethodTable::lookup`].
pub struct MethodTable<T: ?Sized, A, R> {
    slots: Slots<Rc<str>, Method<T, A, R>>,
}

impl<T: ?Sized, A, R> MethodTable<T, A, R> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: Slots::default(),
        }
    }

    /// Installs `method` under its name and returns the method it replaced.
    pub fn install(&mut self, method: Method<T, A, R>) -> Option<Method<T, A, R>> {
        self.slots.insert(Rc::clone(&method.name), method)
    }

    /// Builder form of [`MethodTable::install`].
    #[must_use]
    pub fn with(mut self, method: Method<T, A, R>) -> Self {
        self.install(method);
        self
    }

    /// Removes the method installed under `name`.
    pub fn uninstall(&mut self, name: &str) -> Option<Method<T, A, R>> {
        self.slots.remove(name)
    }

    /// The method installed under `name`.
    pub fn lookup(&self, name: &str) -> Option<Method<T, A, R>> {
        self.slots.get(name).cloned()
    }

    /// The number of installed methods.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: ?Sized, A, R> Default for MethodTable<T, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, A, R> Clone for MethodTable<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: ?Sized, A, R> fmt::Debug for MethodTable<T, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_set()
            .entries(self.slots.keys())
            .finish()
    }
}

/// Errors raised by [`Invoker::invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeError {
    /// No target was supplied.
    MissingTarget,
}

impl fmt::Display for InvokeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => {
                write!(formatter, "Must provide a target to invoke a method on")
            }
        }
    }
}

impl std::error::Error for InvokeError {}

static_assertions::assert_impl_all!(InvokeError: Send, Sync, Copy, std::error::Error);

/// Calls one specific method on targets that carry it.
///
/// Created by [`invoker`].
#[derive(Debug)]
pub struct Invoker<T: ?Sized, A, R> {
    method: Method<T, A, R>,
}

impl<T, A, R> Invoker<T, A, R>
where
    T: Receiver<A, R> + ?Sized,
{
    /// Calls the method on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::MissingTarget`] when `target` is `None`. A
    /// target without the identical method installed is not an error: the
    /// result is `Ok(None)`.
    pub fn invoke(&self, target: Option<&T>, arguments: A) -> Result<Option<R>, InvokeError> {
        let target = target.ok_or(InvokeError::MissingTarget)?;
        Ok(self.try_apply(target, arguments))
    }

    /// Calls the method on `target` if `target` has this exact method
    /// installed under the method's name.
    pub fn try_apply(&self, target: &T, arguments: A) -> Option<R> {
        let installed = target.method(self.method.name())?;
        installed
            .is(&self.method)
            .then(|| installed.call(target, arguments))
    }

    /// The method this invoker looks for.
    pub const fn method(&self) -> &Method<T, A, R> {
        &self.method
    }

    /// Binds `arguments` and returns a dispatch candidate over targets.
    pub fn candidate(self, arguments: A) -> impl Fn(&T) -> Option<R>
    where
        A: Clone,
    {
        move |target: &T| self.try_apply(target, arguments.clone())
    }
}

impl<T: ?Sized, A, R> Clone for Invoker<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
        }
    }
}

/// Creates an [`Invoker`] for `method`.
///
/// # Examples
///
/// ```
/// use combinate::dispatch::{Method, MethodTable, Receiver, invoker};
///
/// struct Counter {
///     value: i32,
///     methods: MethodTable<Counter, (i32,), i32>,
/// }
///
/// impl Receiver<(i32,), i32> for Counter {
///     fn method(&self, name: &str) -> Option<Method<Self, (i32,), i32>> {
///         self.methods.lookup(name)
///     }
/// }
///
/// let add = Method::new("add", |counter: &Counter, (amount,): (i32,)| counter.value + amount);
/// let counter = Counter {
///     value: 40,
///     methods: MethodTable::new().with(add.clone()),
/// };
///
/// let call_add = invoker(add);
/// assert_eq!(call_add.invoke(Some(&counter), (2,)), Ok(Some(42)));
/// assert!(call_add.invoke(None, (2,)).is_err());
///
/// // Same name, different body: not the method we asked for.
/// let impostor = invoker(Method::new("add", |_: &Counter, _: (i32,)| 0));
/// assert_eq!(impostor.invoke(Some(&counter), (2,)), Ok(None));
/// ```
pub const fn invoker<T: ?Sized, A, R>(method: Method<T, A, R>) -> Invoker<T, A, R> {
    Invoker { method }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shelf {
        methods: MethodTable<Shelf, (), usize>,
    }

    impl Receiver<(), usize> for Shelf {
        fn method(&self, name: &str) -> Option<Method<Self, (), usize>> {
            self.methods.lookup(name)
        }
    }

    #[test]
    fn test_clone_keeps_identity() {
        let method: Method<Shelf, (), usize> = Method::new("size", |shelf: &Shelf, ()| shelf.methods.len());
        let copy = method.clone();
        assert!(method.is(&copy));
        assert!(!method.is(&Method::new("size", |_: &Shelf, ()| 0)));
    }

    #[test]
    fn test_install_replaces_by_name() {
        let first: Method<Shelf, (), usize> = Method::new("size", |_: &Shelf, ()| 1);
        let second: Method<Shelf, (), usize> = Method::new("size", |_: &Shelf, ()| 2);
        let mut table = MethodTable::new();

        assert!(table.install(first.clone()).is_none());
        let replaced = table.install(second.clone());

        assert!(replaced.is_some_and(|method| method.is(&first)));
        assert!(table.lookup("size").is_some_and(|method| method.is(&second)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_method_yields_none() {
        let size: Method<Shelf, (), usize> = Method::new("size", |_: &Shelf, ()| 3);
        let shelf = Shelf {
            methods: MethodTable::new(),
        };
        assert_eq!(invoker(size).invoke(Some(&shelf), ()), Ok(None));
    }

    #[test]
    fn test_invoke_error_display() {
        assert_eq!(
            InvokeError::MissingTarget.to_string(),
            "Must provide a target to invoke a method on"
        );
    }
}
