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

//! Maximal overlap-connected clusters.
//!
//! A cluster is a maximal set of orders connected transitively by
//! pairwise overlap: if A overlaps C and C overlaps B, all three share a
//! cluster even when A and B are disjoint. Clusters partition the book,
//! and no order outside a cluster overlaps any order inside it.

use crate::err::{LayoutError, UnknownOrderError};
use order_lane_core::{LayoutVariable, time::TimeInterval};
use order_lane_model::{
    id::OrderId,
    order::{Order, OrderBook},
};
use std::collections::HashMap;

/// One maximal overlap-connected set of order ids.
///
/// Members are kept in ascending start order (insertion order breaks
/// ties), which is the order the column partitioner consumes them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    members: Vec<OrderId>,
}

impl Cluster {
    #[inline]
    fn seeded(id: OrderId) -> Self {
        Self { members: vec![id] }
    }

    #[inline]
    fn push(&mut self, id: OrderId) {
        self.members.push(id);
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

    /// The closed time span covered by the whole cluster.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownOrder`] if a member id is missing
    /// from the book.
    pub fn span<T: LayoutVariable>(
        &self,
        book: &OrderBook<T>,
    ) -> Result<TimeInterval<T>, LayoutError> {
        let mut members = self.members.iter();
        let first = members
            .next()
            .expect("a cluster always holds at least its seed order");
        let mut span = resolve(book, *first)?.interval();
        for id in members {
            span = span.hull(&resolve(book, *id)?.interval());
        }
        Ok(span)
    }
}

/// Partitions the book into maximal overlap-connected clusters.
///
/// Orders are visited in ascending start order (stable, so equal starts
/// keep their insertion order). Each order joins the cluster of the
/// nearest preceding order it overlaps; if none overlaps, it seeds a new
/// cluster. Scanning predecessors nearest-first is what makes a chain of
/// overlaps land in a single cluster.
///
/// An empty book yields an empty cluster sequence.
pub fn build_clusters<T: LayoutVariable>(book: &OrderBook<T>) -> Vec<Cluster> {
    let mut sorted: Vec<&Order<T>> = book.iter().collect();
    sorted.sort_by_key(|order| order.start());

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut cluster_of: HashMap<OrderId, usize> = HashMap::with_capacity(sorted.len());

    for (position, order) in sorted.iter().enumerate() {
        let joined = sorted[..position]
            .iter()
            .rev()
            .find(|compare| order.overlaps(compare))
            .map(|compare| {
                *cluster_of
                    .get(&compare.id())
                    .expect("every processed order belongs to a cluster")
            });
        match joined {
            Some(cluster_index) => {
                clusters[cluster_index].push(order.id());
                cluster_of.insert(order.id(), cluster_index);
            }
            None => {
                cluster_of.insert(order.id(), clusters.len());
                clusters.push(Cluster::seeded(order.id()));
            }
        }
    }
    clusters
}

#[inline]
pub(crate) fn resolve<T: LayoutVariable>(
    book: &OrderBook<T>,
    id: OrderId,
) -> Result<&Order<T>, LayoutError> {
    book.get(id)
        .ok_or_else(|| UnknownOrderError::new(id).into())
}
