//! Byte-offset spans into a single input line.
//!
//! Spans use `u32` offsets. An interactive input line never approaches
//! 4 GiB, so the narrower type keeps `Token` and `Expr` small.

use std::fmt;

/// A half-open byte range `start..end` into the source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from a byte range, saturating at `u32::MAX`.
    ///
    /// Interactive input is read line-by-line, so saturation is
    /// unreachable in practice and not worth a fallible API.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Span {
            start: clamp(range.start),
            end: clamp(range.end),
        }
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Used by the parser to span a binary node from its operands.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
