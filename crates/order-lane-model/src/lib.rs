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

//! # Order Lane Model (`order-lane-model`)
//!
//! Domain model for time-bounded orders on a timeline. It builds on the
//! typed primitives of `order-lane-core` and provides:
//!
//! - **`OrderId`**: a unique, stable identifier for one order.
//! - **`Order<T>`**: a validated, immutable order with a start offset and
//!   a strictly positive duration. Its closed time span is
//!   `[start, start + duration]`.
//! - **`OrderBook<T>`**: the collection handed to the layout engine, with
//!   id-based lookup and duplicate-id rejection.
//! - **`OrderGenerator`**: a seeded synthetic data source that fills an
//!   `OrderBook` with random orders inside a configured horizon, for
//!   demos and benchmarks.
//!
//! The model is deliberately free of any layout logic; clustering and
//! column assignment live in `order-lane-layout`.

pub mod err;
pub mod generator;
pub mod id;
pub mod order;

pub mod prelude {
    pub use crate::err::{
        DuplicateOrderIdError, NegativeStartError, NonPositiveDurationError, OrderValidationError,
    };
    pub use crate::generator::{OrderGenConfig, OrderGenConfigBuilder, OrderGenerator};
    pub use crate::id::OrderId;
    pub use crate::order::{Order, OrderBook};
}
