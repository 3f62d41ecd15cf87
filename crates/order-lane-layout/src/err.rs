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

use order_lane_model::id::OrderId;
use std::fmt::Display;

/// A cluster referenced an id with no corresponding order in the book.
///
/// Cluster ids are always derived from the same book they are resolved
/// against, so hitting this means the caller mixed a cluster with a
/// foreign book. The pipeline surfaces it instead of producing partial
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownOrderError {
    id: OrderId,
}

impl UnknownOrderError {
    #[inline]
    pub fn new(id: OrderId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }
}

impl Display for UnknownOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No order in the book for id {}", self.id)
    }
}

impl std::error::Error for UnknownOrderError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutError {
    UnknownOrder(UnknownOrderError),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::UnknownOrder(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<UnknownOrderError> for LayoutError {
    fn from(value: UnknownOrderError) -> Self {
        LayoutError::UnknownOrder(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_order_display() {
        let e = UnknownOrderError::new(OrderId::new(5));
        assert_eq!(format!("{}", e), "No order in the book for id OrderId(5)");
    }

    #[test]
    fn test_layout_error_wraps_unknown_order() {
        let e: LayoutError = UnknownOrderError::new(OrderId::new(5)).into();
        assert!(matches!(e, LayoutError::UnknownOrder(inner) if inner.id() == OrderId::new(5)));
    }
}
