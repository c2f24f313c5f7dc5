//! Inclusive argument-count bounds.

use std::fmt;

/// Inclusive `[min, max]` bound on how many arguments a callable accepts.
///
/// `max == usize::MAX` stands for "unbounded".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentRange {
    min: usize,
    max: usize,
}

impl ArgumentRange {
    /// Exactly `count` arguments.
    #[inline]
    pub const fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    /// Between `min` and `max` arguments, both inclusive.
    #[inline]
    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// No arguments at all.
    #[inline]
    pub const fn none() -> Self {
        Self::exact(0)
    }

    /// Zero up to `max` arguments.
    #[inline]
    pub const fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }

    /// `min` or more arguments.
    #[inline]
    pub const fn at_least(min: usize) -> Self {
        Self {
            min,
            max: usize::MAX,
        }
    }

    /// Any number of arguments, including zero.
    #[inline]
    pub const fn any() -> Self {
        Self::at_least(0)
    }

    #[inline]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Whether `count` lies inside the range.
    #[inline]
    pub const fn contains(self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }

    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.max == usize::MAX
    }
}

impl fmt::Display for ArgumentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "at least {}", self.min)
        } else if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}
