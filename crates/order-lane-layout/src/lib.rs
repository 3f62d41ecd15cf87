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

//! # Order Lane Layout (`order-lane-layout`)
//!
//! The layout pipeline for drawing overlapping orders side by side on a
//! timeline, in two stages:
//!
//! 1. **Clustering** ([`cluster`]): partition the order book into maximal
//!    overlap-connected clusters. Orders linked by a chain of pairwise
//!    overlaps share a cluster even when the chain's endpoints do not
//!    themselves overlap.
//! 2. **Column partitioning** ([`column`]): within each cluster, greedily
//!    pack orders into columns whose members pairwise do not overlap, so
//!    each column can occupy one horizontal slot.
//!
//! [`engine::LayoutEngine`] composes the two stages into per-order
//! placements `(cluster_index, column_index, column_count)` from which a
//! renderer derives horizontal geometry (`width = 100 / column_count`
//! percent, `x = width * column_index`).
//!
//! The whole pipeline is a pure, synchronous function of the order book:
//! no state survives between invocations, and recomputing fully replaces
//! any previous result.

pub mod cluster;
pub mod column;
pub mod engine;
pub mod err;

pub use cluster::{Cluster, build_clusters};
pub use column::{Column, partition_columns};
pub use engine::{ClusterLayout, LayoutEngine, Placement, TimelineLayout};
pub use err::{LayoutError, UnknownOrderError};
