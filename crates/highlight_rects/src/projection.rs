//! Maps viewport-space selection geometry onto page-relative rectangles.

use crate::config::OptimizerConfig;
use crate::geometry::{PageRect, ViewportRect};
use crate::optimizer::optimize_with;
use crate::page::{ClientRects, Page, PageNode, PointerEvent};
use log::{debug, trace};
use tracing::trace_span;

/// Check if a selection fragment lies entirely within a page's bounds.
///
/// Fragments straddling a page edge are rejected outright, never split.
#[inline]
#[must_use]
pub fn is_inside_page(fragment: &ViewportRect, page_rect: &ViewportRect) -> bool {
    fragment.contained_in(page_rect)
}

/// Check if a contained fragment is a real piece of selected text.
///
/// Drops zero-size fragments and the page-sized rectangles some layout engines
/// emit for collapsed ranges.
#[inline]
#[must_use]
pub fn is_valid_selection_fragment(fragment: &ViewportRect, page_rect: &ViewportRect) -> bool {
    fragment.width > 0.0
        && fragment.height > 0.0
        && fragment.width < page_rect.width
        && fragment.left > page_rect.left
        && fragment.height < page_rect.height
}

/// Translate a viewport rectangle into the coordinates of `page`.
fn to_page_rect<N: PageNode>(
    fragment: &ViewportRect,
    page: &Page<N>,
    page_rect: &ViewportRect,
) -> PageRect {
    PageRect {
        top: fragment.top + page.node.scroll_top() - page_rect.top,
        left: fragment.left + page.node.scroll_left() - page_rect.left,
        width: fragment.width,
        height: fragment.height,
        page_number: page.number,
    }
}

/// Computes page-relative highlight rectangles for a selection range.
///
/// Every fragment reported by `range` is tested against every page; it is
/// emitted once for each page that fully and validly contains it. Output is
/// grouped by fragment, not by page, unless `should_optimize` is set, in which
/// case the list goes through [`optimize`](crate::optimizer::optimize) with
/// default tolerances.
///
/// # Arguments
///
/// * `range` - The selection whose client rectangles are projected
/// * `pages` - Pages to project onto, in any order
/// * `should_optimize` - Whether to merge redundant fragments
///
/// # Returns
///
/// Page-relative rectangles, possibly empty. Never fails.
#[must_use]
pub fn project_selection_rects<R, N>(
    range: &R,
    pages: &[Page<N>],
    should_optimize: bool,
) -> Vec<PageRect>
where
    R: ClientRects + ?Sized,
    N: PageNode,
{
    let config = should_optimize.then(OptimizerConfig::default);
    project_selection_rects_with(range, pages, config.as_ref())
}

/// Like [`project_selection_rects`], with explicit optimizer tolerances.
/// `None` returns the raw projected list.
#[must_use]
pub fn project_selection_rects_with<R, N>(
    range: &R,
    pages: &[Page<N>],
    config: Option<&OptimizerConfig>,
) -> Vec<PageRect>
where
    R: ClientRects + ?Sized,
    N: PageNode,
{
    let _span = trace_span!("highlight_rects.project_selection", pages = pages.len()).entered();
    let fragments = range.client_rects();
    let mut rects: Vec<PageRect> = Vec::new();
    for fragment in &fragments {
        for page in pages {
            let page_rect = page.node.bounding_rect();
            if !is_inside_page(fragment, &page_rect) {
                continue;
            }
            if !is_valid_selection_fragment(fragment, &page_rect) {
                trace!(
                    target: "highlight_rects",
                    "dropping degenerate fragment {fragment:?} on page {}",
                    page.number
                );
                continue;
            }
            rects.push(to_page_rect(fragment, page, &page_rect));
        }
    }
    debug!(
        target: "highlight_rects",
        "projected {} fragments onto {} pages: {} rects",
        fragments.len(),
        pages.len(),
        rects.len()
    );
    match config {
        Some(config) => optimize_with(&rects, config),
        None => rects,
    }
}

/// Computes a zero-area rectangle at a pointer event's page-relative position.
///
/// The first page whose node contains the event target wins. Returns an empty
/// list when the target is missing or lies outside every page. The optimizer
/// is never involved.
#[must_use]
pub fn project_point_rect<N: PageNode>(
    event: &PointerEvent<N::Node>,
    pages: &[Page<N>],
) -> Vec<PageRect> {
    let Some(target) = event.target.as_ref() else {
        return Vec::new();
    };
    let Some(page) = pages.iter().find(|page| page.node.contains(target)) else {
        trace!(target: "highlight_rects", "pointer target outside every page");
        return Vec::new();
    };
    let page_rect = page.node.bounding_rect();
    let left = event.client_x + page.node.scroll_left() - page_rect.left;
    let top = event.client_y + page.node.scroll_top() - page_rect.top;
    vec![PageRect::point(top, left, page.number)]
}
