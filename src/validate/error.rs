//! Error type for guarded calls.

/// The failure returned by a [`Condition`](super::Condition) when its
/// subject violates one or more labeled predicates.
///
/// Holds every violated message in declaration order. The [`Display`]
/// output joins them with `", "`.
///
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// ```rust
/// use combinate::validate::GuardError;
///
/// let error = GuardError::new(vec![
///     String::from("arg must not be zero"),
///     String::from("arg must be even"),
/// ]);
/// assert_eq!(error.to_string(), "arg must not be zero, arg must be even");
/// assert_eq!(error.messages().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardError {
    messages: Vec<String>,
}

impl GuardError {
    /// Creates a guard failure from the violated messages.
    pub const fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The violated messages, in declaration order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the error and returns its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl std::fmt::Display for GuardError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.messages.join(", "))
    }
}

impl std::error::Error for GuardError {}

static_assertions::assert_impl_all!(GuardError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_error_display_single_message() {
        let error = GuardError::new(vec![String::from("arg must be a number")]);
        assert_eq!(format!("{error}"), "arg must be a number");
    }

    #[test]
    fn test_guard_error_into_messages() {
        let error = GuardError::new(vec![String::from("a"), String::from("b")]);
        assert_eq!(error.into_messages(), vec!["a", "b"]);
    }
}
