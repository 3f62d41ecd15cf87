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

//! The layout engine: clustering composed with column partitioning.

use crate::{
    cluster::{Cluster, build_clusters},
    column::{Column, partition_columns},
    err::LayoutError,
};
use order_lane_core::LayoutVariable;
use order_lane_model::{id::OrderId, order::OrderBook};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Where one order lands on the timeline grid.
///
/// `column_count` is the number of columns in the order's cluster, so the
/// horizontal geometry follows directly: the order is drawn
/// `100 / column_count` percent wide at offset `width * column_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    cluster_index: usize,
    column_index: usize,
    column_count: usize,
}

impl Placement {
    #[inline]
    fn new(cluster_index: usize, column_index: usize, column_count: usize) -> Self {
        Self {
            cluster_index,
            column_index,
            column_count,
        }
    }

    #[inline]
    pub fn cluster_index(&self) -> usize {
        self.cluster_index
    }

    #[inline]
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Rendered width as a percentage of the cluster's horizontal space.
    #[inline]
    pub fn width_percent(&self) -> f64 {
        100.0 / self.column_count as f64
    }

    /// Horizontal offset as a percentage of the cluster's horizontal space.
    #[inline]
    pub fn x_percent(&self) -> f64 {
        self.width_percent() * self.column_index as f64
    }
}

/// One cluster together with its partitioned columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLayout {
    cluster: Cluster,
    columns: Vec<Column>,
}

impl ClusterLayout {
    #[inline]
    fn new(cluster: Cluster, columns: Vec<Column>) -> Self {
        Self { cluster, columns }
    }

    #[inline]
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Columns in left-to-right render order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// The complete result of one layout run.
///
/// Holds the cluster/column structure plus a flat per-id placement map.
/// A fresh run fully replaces any previous `TimelineLayout`; nothing is
/// merged incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    clusters: Vec<ClusterLayout>,
    placements: HashMap<OrderId, Placement>,
}

impl TimelineLayout {
    /// The placement of one order, if the order was part of the input.
    #[inline]
    pub fn placement(&self, id: OrderId) -> Option<&Placement> {
        self.placements.get(&id)
    }

    /// Clusters in ascending start order.
    #[inline]
    pub fn clusters(&self) -> &[ClusterLayout] {
        &self.clusters
    }

    #[inline]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Number of placed orders.
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &Placement)> {
        self.placements.iter().map(|(&id, placement)| (id, placement))
    }
}

/// Composes clustering and column partitioning into per-order placements.
///
/// The engine is stateless; [`LayoutEngine::layout`] is a pure function
/// of the order book it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    #[inline]
    pub fn new() -> Self {
        LayoutEngine
    }

    /// Computes the full timeline layout for a book.
    ///
    /// An empty book yields an empty layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownOrder`] only on a caller bug (ids in
    /// a cluster that the book cannot resolve); no partial output is ever
    /// produced.
    #[instrument(skip_all, fields(orders = book.len()))]
    pub fn layout<T: LayoutVariable>(
        &self,
        book: &OrderBook<T>,
    ) -> Result<TimelineLayout, LayoutError> {
        let clusters = build_clusters(book);
        let mut cluster_layouts = Vec::with_capacity(clusters.len());
        let mut placements = HashMap::with_capacity(book.len());

        for (cluster_index, cluster) in clusters.into_iter().enumerate() {
            let columns = partition_columns(&cluster, book)?;
            let column_count = columns.len();
            for (column_index, column) in columns.iter().enumerate() {
                for &id in column.members() {
                    placements.insert(id, Placement::new(cluster_index, column_index, column_count));
                }
            }
            cluster_layouts.push(ClusterLayout::new(cluster, columns));
        }

        debug!(
            clusters = cluster_layouts.len(),
            placements = placements.len(),
            "timeline layout computed"
        );
        Ok(TimelineLayout {
            clusters: cluster_layouts,
            placements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_lane_core::time::{TimeDelta, TimePoint};
    use order_lane_model::order::Order;

    fn order(id: u64, start: i64, duration: i64) -> Order<i64> {
        Order::new(
            OrderId::new(id),
            TimePoint::new(start),
            TimeDelta::new(duration),
        )
        .expect("valid test order")
    }

    fn book(orders: Vec<Order<i64>>) -> OrderBook<i64> {
        OrderBook::new(orders).expect("unique test ids")
    }

    #[test]
    fn test_empty_book_yields_empty_layout() {
        let layout = LayoutEngine::new()
            .layout(&book(Vec::new()))
            .expect("empty input is not an error");
        assert!(layout.is_empty());
        assert_eq!(layout.cluster_count(), 0);
    }

    #[test]
    fn test_singleton_order_gets_full_width() {
        let layout = LayoutEngine::new()
            .layout(&book(vec![order(1, 0, 50)]))
            .expect("layout");
        let placement = layout.placement(OrderId::new(1)).expect("placed");
        assert_eq!(placement.cluster_index(), 0);
        assert_eq!(placement.column_index(), 0);
        assert_eq!(placement.column_count(), 1);
        assert_eq!(placement.width_percent(), 100.0);
        assert_eq!(placement.x_percent(), 0.0);
    }

    #[test]
    fn test_three_mutually_overlapping_orders_share_a_cluster_three_wide() {
        let layout = LayoutEngine::new()
            .layout(&book(vec![
                order(1, 0, 100),
                order(2, 10, 100),
                order(3, 20, 100),
            ]))
            .expect("layout");
        assert_eq!(layout.cluster_count(), 1);
        let mut column_indices = Vec::new();
        for id in 1..=3 {
            let placement = layout.placement(OrderId::new(id)).expect("placed");
            assert_eq!(placement.column_count(), 3);
            column_indices.push(placement.column_index());
        }
        column_indices.sort();
        assert_eq!(column_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_disjoint_orders_land_in_separate_full_width_clusters() {
        let layout = LayoutEngine::new()
            .layout(&book(vec![order(1, 0, 10), order(2, 20, 10)]))
            .expect("layout");
        assert_eq!(layout.cluster_count(), 2);
        let a = layout.placement(OrderId::new(1)).expect("placed");
        let b = layout.placement(OrderId::new(2)).expect("placed");
        assert_eq!((a.cluster_index(), a.column_count()), (0, 1));
        assert_eq!((b.cluster_index(), b.column_count()), (1, 1));
    }

    #[test]
    fn test_chain_scenario_placements() {
        // A [0, 10] and B [20, 30] stack in column 0; C [5, 25] sits beside them.
        let layout = LayoutEngine::new()
            .layout(&book(vec![
                order(1, 0, 10),
                order(2, 20, 10),
                order(3, 5, 20),
            ]))
            .expect("layout");
        assert_eq!(layout.cluster_count(), 1);
        let a = layout.placement(OrderId::new(1)).expect("placed");
        let b = layout.placement(OrderId::new(2)).expect("placed");
        let c = layout.placement(OrderId::new(3)).expect("placed");
        assert_eq!(a.column_index(), 0);
        assert_eq!(b.column_index(), 0);
        assert_eq!(c.column_index(), 1);
        assert_eq!(a.column_count(), 2);
        assert_eq!(a.width_percent(), 50.0);
        assert_eq!(c.x_percent(), 50.0);
    }

    #[test]
    fn test_every_order_receives_exactly_one_placement() {
        let orders = vec![
            order(1, 0, 60),
            order(2, 30, 60),
            order(3, 200, 40),
            order(4, 95, 60),
            order(5, 50, 60),
        ];
        let book = book(orders);
        let layout = LayoutEngine::new().layout(&book).expect("layout");
        assert_eq!(layout.len(), book.len());
        for order in &book {
            assert!(layout.placement(order.id()).is_some());
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let book = book(vec![
            order(1, 0, 60),
            order(2, 30, 60),
            order(3, 200, 40),
            order(4, 95, 60),
            order(5, 50, 60),
        ]);
        let engine = LayoutEngine::new();
        let first = engine.layout(&book).expect("layout");
        let second = engine.layout(&book).expect("layout");
        assert_eq!(first, second);
    }

    #[test]
    fn test_overlapping_orders_never_share_cluster_and_column() {
        let book = book(vec![
            order(1, 0, 60),
            order(2, 30, 60),
            order(3, 200, 40),
            order(4, 95, 60),
            order(5, 50, 60),
        ]);
        let layout = LayoutEngine::new().layout(&book).expect("layout");
        for a in &book {
            for b in &book {
                if a.id() != b.id() && a.overlaps(b) {
                    let pa = layout.placement(a.id()).expect("placed");
                    let pb = layout.placement(b.id()).expect("placed");
                    let same_slot = pa.cluster_index() == pb.cluster_index()
                        && pa.column_index() == pb.column_index();
                    assert!(!same_slot, "{} and {} share a slot", a.id(), b.id());
                }
            }
        }
    }
}
