//! Result of a host-facing call
//!
//! Host calls never fail. They always produce a value the host can use, and
//! optionally say that the value is a fallback rather than the real result.

use crate::ErrorKind;

/// A host-visible value plus the reason it degraded, if it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    value: T,
    degraded: Option<ErrorKind>,
}

impl<T> Outcome<T> {
    /// The call did what was asked
    pub fn ok(value: T) -> Self {
        Self {
            value,
            degraded: None,
        }
    }

    /// The call fell back to `value` because of `kind`
    pub fn degraded(value: T, kind: ErrorKind) -> Self {
        Self {
            value,
            degraded: Some(kind),
        }
    }

    /// Attach a degradation reason unless one is already set
    pub fn or_degraded(mut self, kind: Option<ErrorKind>) -> Self {
        if self.degraded.is_none() {
            self.degraded = kind;
        }
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn degraded_kind(&self) -> Option<ErrorKind> {
        self.degraded
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_outcome() {
        let outcome = Outcome::ok(true);
        assert!(!outcome.is_degraded());
        assert!(outcome.into_value());
    }

    #[test]
    fn test_or_degraded_keeps_first_reason() {
        let outcome = Outcome::degraded(false, ErrorKind::InputParse)
            .or_degraded(Some(ErrorKind::FileWrite));
        assert_eq!(outcome.degraded_kind(), Some(ErrorKind::InputParse));

        let outcome = Outcome::ok(1).or_degraded(Some(ErrorKind::FileRead));
        assert_eq!(outcome.degraded_kind(), Some(ErrorKind::FileRead));
        assert_eq!(*outcome.value(), 1);
    }
}
