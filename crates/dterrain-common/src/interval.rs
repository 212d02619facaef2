//! Inclusive integer intervals.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// An inclusive range `[min, max]` of rows (or any other integer axis).
///
/// Construction normalizes the bounds, so `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawInterval")]
pub struct Interval {
    min: i32,
    max: i32,
}

/// Unchecked wire form; bounds are normalized on the way in.
#[derive(Deserialize)]
struct RawInterval {
    min: i32,
    max: i32,
}

impl From<RawInterval> for Interval {
    fn from(raw: RawInterval) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl Interval {
    /// Creates an interval covering `a` and `b` and everything in between.
    #[must_use]
    pub const fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Single-point interval.
    #[must_use]
    pub const fn point(p: i32) -> Self {
        Self { min: p, max: p }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Span between the bounds, `|max - min|`.
    ///
    /// A single-point interval has length 0.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.max.abs_diff(self.min)
    }

    /// True when the interval covers a single point.
    #[must_use]
    pub const fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Checks if `point` lies within the interval (bounds included).
    #[must_use]
    pub const fn contains(&self, point: i32) -> bool {
        point >= self.min && point <= self.max
    }

    /// Iterates over every covered value, `min..=max`.
    pub fn iter(&self) -> std::ops::RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Intersection with another interval, if they overlap.
    #[must_use]
    pub fn intersect(&self, other: Interval) -> Option<Interval> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Interval { min, max })
    }
}

/// Translation saturates at the ends of the `i32` range, so a bound pushed
/// past it is clamped rather than wrapped.
impl Add<i32> for Interval {
    type Output = Interval;

    fn add(self, offset: i32) -> Interval {
        Interval {
            min: self.min.saturating_add(offset),
            max: self.max.saturating_add(offset),
        }
    }
}

impl Sub<i32> for Interval {
    type Output = Interval;

    fn sub(self, offset: i32) -> Interval {
        Interval {
            min: self.min.saturating_sub(offset),
            max: self.max.saturating_sub(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_span() {
        assert_eq!(Interval::new(-4, 4).length(), 8);
        assert_eq!(Interval::point(3).length(), 0);
        assert!(Interval::point(3).is_point());
    }

    #[test]
    fn test_inverted_bounds_normalized() {
        let i = Interval::new(5, -2);
        assert_eq!(i.min(), -2);
        assert_eq!(i.max(), 5);
        assert_eq!(i.length(), 7);
        assert!(i.contains(0));
    }

    #[test]
    fn test_contains_inclusive() {
        let i = Interval::new(2, 6);
        assert!(i.contains(2));
        assert!(i.contains(6));
        assert!(!i.contains(1));
        assert!(!i.contains(7));
    }

    #[test]
    fn test_translation() {
        let i = Interval::new(2, 6);
        assert_eq!(i + 10, Interval::new(12, 16));
        assert_eq!(i - 3, Interval::new(-1, 3));
        // Original value is untouched
        assert_eq!(i, Interval::new(2, 6));
    }

    #[test]
    fn test_translation_saturates() {
        let wide = Interval::new(0, i32::MAX);
        assert_eq!(wide + 10, Interval::new(10, i32::MAX));
        assert_eq!(Interval::new(i32::MIN, 0) - 1, Interval::new(i32::MIN, -1));
    }

    #[test]
    fn test_intersect() {
        let i = Interval::new(0, 10);
        assert_eq!(i.intersect(Interval::new(5, 20)), Some(Interval::new(5, 10)));
        assert_eq!(i.intersect(Interval::new(11, 20)), None);
    }

    #[test]
    fn test_iter_covers_bounds() {
        let rows: Vec<i32> = Interval::new(-1, 2).iter().collect();
        assert_eq!(rows, vec![-1, 0, 1, 2]);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let i: Interval = toml::from_str("min = 9\nmax = 1").expect("parse failed");
        assert_eq!(i, Interval::new(1, 9));
    }
}
