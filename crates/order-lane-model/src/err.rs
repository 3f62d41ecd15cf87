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

use crate::id::OrderId;
use order_lane_core::{
    LayoutVariable,
    time::{TimeDelta, TimePoint},
};
use std::fmt::Display;

/// An order was declared with `duration <= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveDurationError<T: LayoutVariable> {
    id: OrderId,
    duration: TimeDelta<T>,
}

impl<T: LayoutVariable> NonPositiveDurationError<T> {
    #[inline]
    pub fn new(id: OrderId, duration: TimeDelta<T>) -> Self {
        Self { id, duration }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta<T> {
        self.duration
    }
}

impl<T: LayoutVariable> Display for NonPositiveDurationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} has non-positive duration {}",
            self.id, self.duration
        )
    }
}

impl<T: LayoutVariable> std::error::Error for NonPositiveDurationError<T> {}

/// An order was declared with a start before the timeline origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeStartError<T: LayoutVariable> {
    id: OrderId,
    start: TimePoint<T>,
}

impl<T: LayoutVariable> NegativeStartError<T> {
    #[inline]
    pub fn new(id: OrderId, start: TimePoint<T>) -> Self {
        Self { id, start }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn start(&self) -> TimePoint<T> {
        self.start
    }
}

impl<T: LayoutVariable> Display for NegativeStartError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} starts before the timeline origin: {}",
            self.id, self.start
        )
    }
}

impl<T: LayoutVariable> std::error::Error for NegativeStartError<T> {}

/// Validation failure when constructing a single [`crate::order::Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderValidationError<T: LayoutVariable> {
    NonPositiveDuration(NonPositiveDurationError<T>),
    NegativeStart(NegativeStartError<T>),
}

impl<T: LayoutVariable> Display for OrderValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderValidationError::NonPositiveDuration(e) => write!(f, "{e}"),
            OrderValidationError::NegativeStart(e) => write!(f, "{e}"),
        }
    }
}

impl<T: LayoutVariable> std::error::Error for OrderValidationError<T> {}

impl<T: LayoutVariable> From<NonPositiveDurationError<T>> for OrderValidationError<T> {
    fn from(value: NonPositiveDurationError<T>) -> Self {
        OrderValidationError::NonPositiveDuration(value)
    }
}

impl<T: LayoutVariable> From<NegativeStartError<T>> for OrderValidationError<T> {
    fn from(value: NegativeStartError<T>) -> Self {
        OrderValidationError::NegativeStart(value)
    }
}

/// Two orders in one collection carried the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateOrderIdError {
    id: OrderId,
}

impl DuplicateOrderIdError {
    #[inline]
    pub fn new(id: OrderId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }
}

impl Display for DuplicateOrderIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duplicate order id: {}", self.id)
    }
}

impl std::error::Error for DuplicateOrderIdError {}
