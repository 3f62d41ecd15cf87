// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Closed intervals `[start, end]`.
//!
//! The overlap predicate is inclusive on both boundaries: `[0, 10]` and
//! `[10, 15]` overlap. Everything downstream (clustering, column
//! partitioning) relies on exactly this semantic.

use std::cmp::Ordering;
use std::fmt;

/// A closed interval `[start, end]`.
///
/// Both bounds are inclusive, so the interval contains every value `x`
/// with `start <= x <= end`. A degenerate interval with `start == end`
/// still contains its single anchor point.
///
/// # Examples
///
/// ```
/// use order_lane_core::interval::Interval;
/// let interval = Interval::new(1, 5);
/// assert_eq!(interval.start(), 1);
/// assert_eq!(interval.end(), 5);
/// assert!(interval.contains(5));
/// assert!(!interval.contains(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T> Interval<T> {
    /// Creates a new closed interval `[start, end]`.
    ///
    /// The bounds are normalized: if `b < a` they are swapped, so the
    /// invariant `start <= end` always holds.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` are not comparable (e.g. NaN).
    ///
    /// # Examples
    ///
    /// ```
    /// use order_lane_core::interval::Interval;
    ///
    /// let interval = Interval::new(5, 3);
    /// assert_eq!(interval.start(), 3);
    /// assert_eq!(interval.end(), 5);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        let ord = a
            .partial_cmp(&b)
            .expect("Interval::new: non-comparable bounds (NaN?)");
        let (s, e) = match ord {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Self { start: s, end: e }
    }

    /// Returns the inclusive start of the interval.
    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start
    }

    /// Returns the inclusive end of the interval.
    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end
    }

    /// Checks if the interval contains a value, boundaries included.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_lane_core::interval::Interval;
    ///
    /// let interval = Interval::new(1, 5);
    /// assert!(interval.contains(1));
    /// assert!(interval.contains(5));
    /// assert!(!interval.contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.start && x <= self.end
    }

    /// Checks if this interval overlaps another, boundaries included.
    ///
    /// Two closed intervals overlap iff they share at least one point,
    /// so intervals that merely touch at an endpoint do overlap.
    /// The predicate is symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_lane_core::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(10, 15);
    /// assert!(a.overlaps(&b)); // touching endpoints count
    /// assert!(b.overlaps(&a));
    ///
    /// let c = Interval::new(11, 15);
    /// assert!(!a.overlaps(&c));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the smallest interval covering both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_lane_core::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(20, 30);
    /// assert_eq!(a.hull(&b), Interval::new(0, 30));
    /// ```
    #[inline]
    pub fn hull(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Returns the length of the interval (`end - start`).
    ///
    /// A degenerate interval has length zero even though it contains
    /// its anchor point.
    #[inline]
    pub fn length<D>(&self) -> D
    where
        T: Copy + std::ops::Sub<Output = D>,
    {
        self.end - self.start
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    /// Formats the interval as `[start, end]`.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_order() {
        let i = Interval::new(5i32, 3i32);
        assert_eq!(i.start(), 3);
        assert_eq!(i.end(), 5);
    }

    #[test]
    fn test_new_keeps_order_when_sorted() {
        let i = Interval::new(-4i64, 9i64);
        assert_eq!(i.start(), -4);
        assert_eq!(i.end(), 9);
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_nan() {
        let _ = Interval::new(f64::NAN, 1.0f64);
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let i = Interval::new(10i32, 20i32);
        assert!(i.contains(10));
        assert!(i.contains(20));
        assert!(!i.contains(9));
        assert!(!i.contains(21));
    }

    #[test]
    fn test_degenerate_interval_contains_anchor() {
        let i = Interval::new(3i32, 3i32);
        assert!(i.contains(3));
        assert!(!i.contains(2));
    }

    #[test]
    fn test_overlaps_true_on_proper_overlap() {
        let a = Interval::new(0i32, 10i32);
        let b = Interval::new(5i32, 15i32);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_true_when_touching_at_endpoint() {
        let a = Interval::new(0i32, 10i32);
        let b = Interval::new(10i32, 15i32);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_true_on_containment() {
        let outer = Interval::new(0i32, 100i32);
        let inner = Interval::new(40i32, 60i32);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_overlaps_false_when_disjoint() {
        let a = Interval::new(0i32, 10i32);
        let b = Interval::new(11i32, 20i32);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_with_itself() {
        let a = Interval::new(1i32, 5i32);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_hull_spans_disjoint_intervals() {
        let a = Interval::new(0i32, 10i32);
        let b = Interval::new(20i32, 30i32);
        assert_eq!(a.hull(&b), Interval::new(0, 30));
        assert_eq!(b.hull(&a), Interval::new(0, 30));
    }

    #[test]
    fn test_hull_of_nested_is_outer() {
        let outer = Interval::new(0i32, 10i32);
        let inner = Interval::new(2i32, 4i32);
        assert_eq!(outer.hull(&inner), outer);
    }

    #[test]
    fn test_length() {
        let i = Interval::new(-3i32, 2i32);
        assert_eq!(i.length(), 5);
        let degenerate = Interval::new(5i32, 5i32);
        assert_eq!(degenerate.length(), 0);
    }

    #[test]
    fn test_display_formats_as_closed() {
        let i = Interval::new(1i32, 5i32);
        assert_eq!(format!("{}", i), "[1, 5]");
    }
}
