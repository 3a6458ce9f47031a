//! Collapses fragmented selection rectangles into a minimal covering set.
//!
//! Text layout engines report one rectangle per inline run, so a single
//! highlighted line often arrives as several overlapping or abutting pieces.
//! Pieces on the same visual line are merged pairwise until no pair qualifies.
//! Pieces on different lines are left apart so a highlight never bridges two
//! lines of text, except when one rectangle sits entirely inside another.

use crate::config::OptimizerConfig;
use crate::geometry::PageRect;
use core::cmp::Ordering;
use log::{debug, trace};
use std::collections::BTreeMap;
use tracing::trace_span;

/// Merge rectangles using the default tolerances.
///
/// Output is ordered by page number, then `top`, then `left`, which makes the
/// operation idempotent.
#[must_use]
pub fn optimize(rects: &[PageRect]) -> Vec<PageRect> {
    optimize_with(rects, &OptimizerConfig::default())
}

/// Merge rectangles using explicit tolerances.
#[must_use]
pub fn optimize_with(rects: &[PageRect], config: &OptimizerConfig) -> Vec<PageRect> {
    let _span = trace_span!("highlight_rects.optimize", input = rects.len()).entered();
    let mut out: Vec<PageRect> = Vec::with_capacity(rects.len());
    let mut merges = 0usize;
    for (page_number, mut page_rects) in group_by_page(rects) {
        let merged_here = merge_to_fixed_point(&mut page_rects, config);
        trace!(
            target: "highlight_rects",
            "page {page_number}: {merged_here} merges, {} rects left",
            page_rects.len()
        );
        merges += merged_here;
        page_rects.sort_by(reading_order);
        out.extend(page_rects);
    }
    debug!(
        target: "highlight_rects",
        "optimized {} rects into {} ({merges} merges)",
        rects.len(),
        out.len()
    );
    out
}

/// Partition rectangles by page number, keeping input order within each page.
#[must_use]
pub fn group_by_page(rects: &[PageRect]) -> BTreeMap<u32, Vec<PageRect>> {
    let mut pages: BTreeMap<u32, Vec<PageRect>> = BTreeMap::new();
    for rect in rects {
        pages.entry(rect.page_number).or_default().push(*rect);
    }
    pages
}

/// Whether two rectangles sit on the same visual line.
#[inline]
#[must_use]
pub fn same_line(first: &PageRect, second: &PageRect, config: &OptimizerConfig) -> bool {
    (first.top - second.top).abs() < config.line_tolerance
        && (first.height - second.height).abs() < config.line_tolerance
}

/// Horizontal distance between two rectangles; negative when they overlap.
#[inline]
fn horizontal_gap(first: &PageRect, second: &PageRect) -> f64 {
    first.left.max(second.left) - first.right().min(second.right())
}

/// Whether two rectangles may be replaced by their union.
#[must_use]
pub fn mergeable(first: &PageRect, second: &PageRect, config: &OptimizerConfig) -> bool {
    if first.page_number != second.page_number {
        return false;
    }
    if first.contains(second) || second.contains(first) {
        return true;
    }
    same_line(first, second, config) && horizontal_gap(first, second) <= config.gap_tolerance
}

/// Merge rects until no pair qualifies. Returns the number of merges.
///
/// Settled rects are pairwise unmergeable. Each pending rect is tested only
/// against the settled set; a hit pulls the partner out and requeues the
/// union, so every merge costs one linear scan.
fn merge_to_fixed_point(rects: &mut Vec<PageRect>, config: &OptimizerConfig) -> usize {
    rects.sort_by(reading_order);
    let mut pending: Vec<PageRect> = rects.drain(..).rev().collect();
    let mut merges = 0usize;
    while let Some(candidate) = pending.pop() {
        let partner = rects
            .iter()
            .rposition(|settled| mergeable(settled, &candidate, config));
        match partner {
            Some(idx) => {
                let absorbed = rects.swap_remove(idx);
                pending.push(absorbed.union(&candidate));
                merges += 1;
            }
            None => rects.push(candidate),
        }
    }
    merges
}

fn reading_order(first: &PageRect, second: &PageRect) -> Ordering {
    first
        .page_number
        .cmp(&second.page_number)
        .then_with(|| first.top.total_cmp(&second.top))
        .then_with(|| first.left.total_cmp(&second.left))
        .then_with(|| first.width.total_cmp(&second.width))
        .then_with(|| first.height.total_cmp(&second.height))
}
