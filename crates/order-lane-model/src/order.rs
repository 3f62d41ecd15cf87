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

//! Orders and the order book.
//!
//! An [`Order`] is immutable after construction; the layout engine never
//! mutates starts or durations, it only reads the closed time span
//! `[start, start + duration]`. The [`OrderBook`] owns the collection and
//! answers id lookups for the layout crate.

use crate::{
    err::{
        DuplicateOrderIdError, NegativeStartError, NonPositiveDurationError, OrderValidationError,
    },
    id::OrderId,
};
use order_lane_core::{
    LayoutVariable,
    time::{TimeDelta, TimeInterval, TimePoint},
};
use std::{collections::HashMap, fmt::Display, slice};

/// One order's processing window on the timeline.
///
/// Invariants, checked at construction: `duration > 0` and
/// `start >= 0`. The derived end is `start + duration` and the occupied
/// span is the closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order<T: LayoutVariable> {
    id: OrderId,
    start: TimePoint<T>,
    duration: TimeDelta<T>,
}

impl<T: LayoutVariable> Order<T> {
    /// Creates a validated order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderValidationError::NonPositiveDuration`] if
    /// `duration <= 0` and [`OrderValidationError::NegativeStart`] if the
    /// start lies before the timeline origin.
    pub fn new(
        id: OrderId,
        start: TimePoint<T>,
        duration: TimeDelta<T>,
    ) -> Result<Self, OrderValidationError<T>> {
        if !duration.is_positive() {
            return Err(NonPositiveDurationError::new(id, duration).into());
        }
        if start < TimePoint::zero() {
            return Err(NegativeStartError::new(id, start).into());
        }
        Ok(Self {
            id,
            start,
            duration,
        })
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn start(&self) -> TimePoint<T> {
        self.start
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta<T> {
        self.duration
    }

    #[inline]
    pub fn end(&self) -> TimePoint<T> {
        self.start + self.duration
    }

    /// The closed span `[start, end]` occupied by this order.
    #[inline]
    pub fn interval(&self) -> TimeInterval<T> {
        self.start
            .span_of(self.duration)
            .expect("validated order span")
    }

    /// Whether this order shares at least one point in time with another,
    /// boundaries inclusive.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.interval().overlaps(&other.interval())
    }
}

impl<T: LayoutVariable> Display for Order<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {{ id: {}, start: {}, duration: {} }}",
            self.id, self.start, self.duration
        )
    }
}

/// The collection of orders handed to the layout engine.
///
/// Keeps insertion order (which breaks start-time ties during layout) and
/// rejects duplicate ids at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBook<T: LayoutVariable> {
    orders: Vec<Order<T>>,
    index: HashMap<OrderId, usize>,
}

impl<T: LayoutVariable> OrderBook<T> {
    /// Builds a book from a collection of validated orders.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateOrderIdError`] if two orders carry the same id.
    pub fn new(orders: Vec<Order<T>>) -> Result<Self, DuplicateOrderIdError> {
        let mut index = HashMap::with_capacity(orders.len());
        for (position, order) in orders.iter().enumerate() {
            if index.insert(order.id(), position).is_some() {
                return Err(DuplicateOrderIdError::new(order.id()));
            }
        }
        Ok(Self { orders, index })
    }

    /// Looks up an order by id.
    #[inline]
    pub fn get(&self, id: OrderId) -> Option<&Order<T>> {
        self.index.get(&id).map(|&position| &self.orders[position])
    }

    /// All orders in insertion order.
    #[inline]
    pub fn orders(&self) -> &[Order<T>] {
        &self.orders
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Order<T>> {
        self.orders.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl<'a, T: LayoutVariable> IntoIterator for &'a OrderBook<T> {
    type Item = &'a Order<T>;
    type IntoIter = slice::Iter<'a, Order<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
