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

use order_lane_layout::{LayoutEngine, TimelineLayout};
use order_lane_model::prelude::*;
use serde::Serialize;
use std::{
    env,
    fs::File,
    io::BufWriter,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

/// Formats a second count on the timeline clock as `m:ss`.
fn format_clock(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, (seconds % 60).abs())
}

fn summary_line(id: u64, start: i64, duration: i64) -> String {
    format!("Order {id} whose processing starts at {start} and lasts {duration} seconds.")
}

#[derive(Debug, Clone, Serialize)]
struct OrderReport {
    id: u64,
    start: i64,
    end: i64,
    duration: i64,
    start_clock: String,
    end_clock: String,
    cluster_index: usize,
    column_index: usize,
    column_count: usize,
    width_percent: f64,
    x_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
struct ClusterReport {
    index: usize,
    span_start: i64,
    span_end: i64,
    column_count: usize,
    order_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
struct TimelineReport {
    seed: u64,
    horizon: i64,
    order_count: usize,
    layout_elapsed_us: u128,
    orders: Vec<OrderReport>,
    clusters: Vec<ClusterReport>,
}

fn build_report(
    book: &OrderBook<i64>,
    layout: &TimelineLayout,
    seed: u64,
    horizon: i64,
    layout_elapsed_us: u128,
) -> TimelineReport {
    let mut orders: Vec<OrderReport> = book
        .orders()
        .iter()
        .map(|order| {
            let placement = layout
                .placement(order.id())
                .expect("every order in the book is placed");
            OrderReport {
                id: order.id().value(),
                start: order.start().value(),
                end: order.end().value(),
                duration: order.duration().value(),
                start_clock: format_clock(order.start().value()),
                end_clock: format_clock(order.end().value()),
                cluster_index: placement.cluster_index(),
                column_index: placement.column_index(),
                column_count: placement.column_count(),
                width_percent: placement.width_percent(),
                x_percent: placement.x_percent(),
            }
        })
        .collect();
    orders.sort_by_key(|o| o.id);

    let clusters = layout
        .clusters()
        .iter()
        .enumerate()
        .map(|(index, cluster_layout)| {
            let span = cluster_layout
                .cluster()
                .span(book)
                .expect("cluster ids come from this book");
            ClusterReport {
                index,
                span_start: span.start().value(),
                span_end: span.end().value(),
                column_count: cluster_layout.column_count(),
                order_ids: cluster_layout
                    .cluster()
                    .members()
                    .iter()
                    .map(|id| id.value())
                    .collect(),
            }
        })
        .collect();

    TimelineReport {
        seed,
        horizon,
        order_count: book.len(),
        layout_elapsed_us,
        orders,
        clusters,
    }
}

fn print_timeline(report: &TimelineReport) {
    println!();
    println!(
        "Timeline ({} orders, horizon {}, seed {})",
        report.order_count,
        format_clock(report.horizon),
        report.seed
    );
    println!();
    for order in &report.orders {
        println!("  {}", summary_line(order.id, order.start, order.duration));
    }
    println!();
    for cluster in &report.clusters {
        println!(
            "  Cluster {} [{} - {}] with {} column(s):",
            cluster.index,
            format_clock(cluster.span_start),
            format_clock(cluster.span_end),
            cluster.column_count
        );
        for order in report
            .orders
            .iter()
            .filter(|o| o.cluster_index == cluster.index)
        {
            println!(
                "    Order {:>3}  {} - {}  column {}  width {:.1}%  x {:.1}%",
                order.id,
                format_clock(order.start),
                format_clock(order.end),
                order.column_index,
                order.width_percent,
                order.x_percent
            );
        }
    }
}

fn seed_from_args() -> u64 {
    env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(42)
        })
}

fn main() {
    enable_tracing();

    let seed = seed_from_args();
    let config: OrderGenConfig<i64> = OrderGenConfigBuilder::new()
        .seed(seed)
        .build()
        .expect("default generator config is valid");
    let horizon = config.horizon().value();

    let mut generator: OrderGenerator<i64> = config.into();
    let book = generator.generate();

    let engine = LayoutEngine::new();
    let t0 = Instant::now();
    let layout = engine
        .layout(&book)
        .expect("a book and its layout share ids");
    let elapsed = t0.elapsed();
    info!(
        seed,
        orders = book.len(),
        clusters = layout.cluster_count(),
        elapsed_us = elapsed.as_micros() as u64,
        "timeline layout complete"
    );

    let report = build_report(&book, &layout, seed, horizon, elapsed.as_micros());
    print_timeline(&report);

    let file = File::create("timeline_layout.json").expect("create timeline_layout.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("Wrote: timeline_layout.json");
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_lane_core::time::{TimeDelta, TimePoint};

    fn order(id: u64, start: i64, duration: i64) -> Order<i64> {
        Order::new(
            OrderId::new(id),
            TimePoint::new(start),
            TimeDelta::new(duration),
        )
        .expect("valid test order")
    }

    #[test]
    fn test_format_clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(61), "1:01");
        assert_eq!(format_clock(119), "1:59");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_summary_line_wording() {
        assert_eq!(
            summary_line(3, 120, 45),
            "Order 3 whose processing starts at 120 and lasts 45 seconds."
        );
    }

    #[test]
    fn test_report_orders_are_sorted_by_id() {
        let book = OrderBook::new(vec![order(2, 50, 40), order(1, 0, 40), order(3, 200, 40)])
            .expect("unique ids");
        let layout = LayoutEngine::new().layout(&book).expect("layout");
        let report = build_report(&book, &layout, 7, 600, 0);
        let ids: Vec<u64> = report.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_report_geometry_matches_placements() {
        let book = OrderBook::new(vec![order(1, 0, 100), order(2, 50, 100)]).expect("unique ids");
        let layout = LayoutEngine::new().layout(&book).expect("layout");
        let report = build_report(&book, &layout, 7, 600, 0);
        for entry in &report.orders {
            assert_eq!(entry.width_percent, 50.0);
            assert_eq!(entry.x_percent, 50.0 * entry.column_index as f64);
        }
        assert_eq!(report.clusters.len(), 1);
        assert_eq!(report.clusters[0].column_count, 2);
        assert_eq!(report.clusters[0].span_start, 0);
        assert_eq!(report.clusters[0].span_end, 150);
    }

    #[test]
    fn test_generated_book_round_trips_into_a_report() {
        let config: OrderGenConfig<i64> = OrderGenConfigBuilder::new()
            .seed(11)
            .build()
            .expect("valid config");
        let horizon = config.horizon().value();
        let mut generator: OrderGenerator<i64> = config.into();
        let book = generator.generate();
        let layout = LayoutEngine::new().layout(&book).expect("layout");
        let report = build_report(&book, &layout, 11, horizon, 0);
        assert_eq!(report.order_count, book.len());
        assert_eq!(report.orders.len(), book.len());
        let placed: usize = report.clusters.iter().map(|c| c.order_ids.len()).sum();
        assert_eq!(placed, book.len());
    }
}
