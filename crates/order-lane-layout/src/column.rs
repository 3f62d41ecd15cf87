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

//! Column partitioning within one cluster.
//!
//! Each column is a set of mutually non-overlapping orders that can share
//! one horizontal slot, stacked vertically. Orders in different columns
//! of the same cluster are rendered side by side.
//!
//! The partition is a greedy merge: walking the cluster's members in
//! ascending start order, each order seeds the next column and absorbs
//! every later, still unplaced order that overlaps none of the column's
//! current members. Column order is first-formed-first and deterministic,
//! which fixes the left-to-right position on screen. The merge is greedy,
//! not a minimum coloring of the overlap graph, so it may use more
//! columns than strictly necessary for some configurations.

use crate::{
    cluster::{Cluster, resolve},
    err::LayoutError,
};
use order_lane_core::{LayoutVariable, time::TimeInterval};
use order_lane_model::{id::OrderId, order::OrderBook};

/// One horizontal slot: a set of orders that pairwise do not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    members: Vec<OrderId>,
}

impl Column {
    #[inline]
    fn new(members: Vec<OrderId>) -> Self {
        Self { members }
    }

    /// Member ids in ascending start order.
    #[inline]
    pub fn members(&self) -> &[OrderId] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.members.contains(&id)
    }
}

/// Partitions one cluster into columns of mutually non-overlapping orders.
///
/// The columns are disjoint and their union is exactly the cluster's
/// member set. A cluster of size one yields one singleton column; a
/// cluster of mutually overlapping orders yields one column per order.
///
/// Each pass builds a fresh column rather than mutating the member list
/// in place, so the scan order is never invalidated mid-iteration.
///
/// # Errors
///
/// Returns [`LayoutError::UnknownOrder`] if a member id has no order in
/// the book (the cluster was built from a different book).
pub fn partition_columns<T: LayoutVariable>(
    cluster: &Cluster,
    book: &OrderBook<T>,
) -> Result<Vec<Column>, LayoutError> {
    let members = cluster.members();
    let mut placed = vec![false; members.len()];
    let mut columns = Vec::new();

    for seed_position in 0..members.len() {
        if placed[seed_position] {
            continue;
        }
        placed[seed_position] = true;
        let mut column_members = vec![members[seed_position]];
        let mut spans: Vec<TimeInterval<T>> = vec![resolve(book, members[seed_position])?.interval()];

        for candidate_position in seed_position + 1..members.len() {
            if placed[candidate_position] {
                continue;
            }
            let candidate = resolve(book, members[candidate_position])?.interval();
            if spans.iter().all(|span| !span.overlaps(&candidate)) {
                column_members.push(members[candidate_position]);
                spans.push(candidate);
                placed[candidate_position] = true;
            }
        }
        columns.push(Column::new(column_members));
    }
    Ok(columns)
}
