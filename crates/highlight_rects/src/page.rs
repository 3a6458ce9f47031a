//! Host-environment seams: pages, selection ranges and pointer events.
//!
//! The core never owns or mutates host objects. It only queries geometry and
//! subtree membership through these traits.

use crate::geometry::ViewportRect;
use serde::{Deserialize, Serialize};

/// A rendered page's root node as seen by the core.
pub trait PageNode {
    /// The host's node handle, used for subtree membership tests.
    type Node;

    /// Bounding rectangle of the page in viewport coordinates.
    fn bounding_rect(&self) -> ViewportRect;

    /// Vertical scroll offset of the page's content.
    fn scroll_top(&self) -> f64;

    /// Horizontal scroll offset of the page's content.
    fn scroll_left(&self) -> f64;

    /// Whether `node` is this page node or one of its descendants.
    fn contains(&self, node: &Self::Node) -> bool;
}

/// A page descriptor: its ordinal number and root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<N> {
    pub number: u32,
    pub node: N,
}

impl<N> Page<N> {
    #[inline]
    #[must_use]
    pub const fn new(number: u32, node: N) -> Self {
        Self { number, node }
    }
}

/// A selection range able to describe its visual extent as viewport rectangles.
///
/// One range yields several rectangles when it spans lines or inline runs.
pub trait ClientRects {
    fn client_rects(&self) -> Vec<ViewportRect>;
}

impl ClientRects for [ViewportRect] {
    fn client_rects(&self) -> Vec<ViewportRect> {
        self.to_vec()
    }
}

impl ClientRects for Vec<ViewportRect> {
    fn client_rects(&self) -> Vec<ViewportRect> {
        self.clone()
    }
}

/// A pointer event: client coordinates plus the node it was dispatched to.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent<T> {
    pub client_x: f64,
    pub client_y: f64,
    /// Dispatch target; `None` when the host reports no target.
    pub target: Option<T>,
}

impl<T> PointerEvent<T> {
    #[inline]
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64, target: Option<T>) -> Self {
        Self {
            client_x,
            client_y,
            target,
        }
    }
}
