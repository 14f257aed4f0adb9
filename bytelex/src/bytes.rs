//! Byte predicates used to classify the current byte.
//!
//! Two closed predicate families exist: [`ByteRange`] for interval-style
//! tests and [`BytePoints`] for exact membership. Both carry an explicit
//! `Never` variant, which is what unconfigured lexer settings fall back to.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// End-of-input sentinel returned by [`Cursor::char`](crate::Cursor::char).
pub const EOF: u8 = 0x00;

/// A predicate over a single byte based on inclusive intervals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteRange {
    /// Inclusive interval `[from, to]`.
    Single { from: u8, to: u8 },
    /// Conjunction of sub-ranges: a byte is accepted only when *every*
    /// sub-range accepts it. This is an AND, not a union; to express
    /// alternatives use [`BytePoints::from_range`] and [`BytePoints::union`].
    Compound(Vec<ByteRange>),
    /// Accepts nothing.
    #[default]
    Never,
}

impl ByteRange {
    /// Creates an inclusive interval. `from > to` yields an empty range.
    pub fn single(from: u8, to: u8) -> Self {
        ByteRange::Single { from, to }
    }

    /// Creates a conjunction of the given ranges.
    pub fn compound<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = ByteRange>,
    {
        ByteRange::Compound(ranges.into_iter().collect())
    }

    /// Returns true if `byte` satisfies this range.
    #[inline]
    pub fn is_in_range(&self, byte: u8) -> bool {
        match self {
            ByteRange::Single { from, to } => byte >= *from && byte <= *to,
            ByteRange::Compound(ranges) => ranges.iter().all(|range| range.is_in_range(byte)),
            ByteRange::Never => false,
        }
    }
}

/// A predicate testing exact membership in a set of bytes.
///
/// Order of the points is irrelevant and duplicates are harmless.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BytePoints {
    Points(Vec<u8>),
    /// Contains nothing.
    #[default]
    Never,
}

impl BytePoints {
    /// Creates a point set from the given bytes.
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        BytePoints::Points(points.into_iter().collect())
    }

    /// Expands an inclusive interval into an explicit point set.
    pub fn from_range(from: u8, to: u8) -> Self {
        BytePoints::Points((from..=to).collect())
    }

    /// Returns a set containing the points of both `self` and `other`.
    pub fn union(&self, other: &BytePoints) -> BytePoints {
        match (self, other) {
            (BytePoints::Never, BytePoints::Never) => BytePoints::Never,
            (BytePoints::Points(p), BytePoints::Never) | (BytePoints::Never, BytePoints::Points(p)) => {
                BytePoints::Points(p.clone())
            }
            (BytePoints::Points(a), BytePoints::Points(b)) => {
                BytePoints::Points(a.iter().chain(b.iter()).copied().collect())
            }
        }
    }

    /// Returns true if `byte` is one of the points.
    #[inline]
    pub fn has_point(&self, byte: u8) -> bool {
        match self {
            BytePoints::Points(points) => points.contains(&byte),
            BytePoints::Never => false,
        }
    }
}

impl FromIterator<u8> for BytePoints {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        BytePoints::new(iter)
    }
}

impl From<&[u8]> for BytePoints {
    fn from(points: &[u8]) -> Self {
        BytePoints::Points(points.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for BytePoints {
    fn from(points: &[u8; N]) -> Self {
        BytePoints::Points(points.to_vec())
    }
}
