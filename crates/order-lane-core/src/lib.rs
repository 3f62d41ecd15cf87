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

//! # Order Lane Core (`order-lane-core`)
//!
//! Foundational, type-safe primitives for laying out time-bounded orders
//! on a calendar-like timeline.
//!
//! - `TimePoint<T>`: a specific point on the timeline (seconds offset).
//! - `TimeDelta<T>`: a duration or the difference between two time points.
//! - `Interval<T>` / `TimeInterval<T>`: a **closed** interval `[start, end]`.
//!
//! Unlike the half-open intervals common in occupancy bookkeeping, the
//! intervals here are closed on both ends: two spans that merely touch at
//! a boundary point count as overlapping. This is what drives cluster
//! membership at exact boundary alignment, so it is part of the contract
//! and not an implementation detail.

use num_traits::{PrimInt, Signed, Zero};
use std::fmt::{Debug, Display};

pub mod interval;
pub mod time;

/// Numeric primitive usable as the timeline scalar.
pub trait LayoutVariable: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
impl<T> LayoutVariable for T where T: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
