//! Recorded page geometry for hosts that measure pages up front.
//!
//! A [`Scene`] captures everything the projector would otherwise query live:
//! page bounds, scroll offsets, subtree membership and the selection's client
//! rectangles. Scenes round-trip through JSON, which is useful for:
//! - Replaying a selection captured in a browser
//! - Regression fixtures
//! - Passing geometry across a process or FFI boundary

use crate::geometry::{PageRect, ViewportRect};
use crate::page::{ClientRects, Page, PageNode, PointerEvent};
use crate::projection::{project_point_rect, project_selection_rects};
use anyhow::{Context as _, Result as AnyResult};
use serde::{Deserialize, Serialize};

/// Opaque node id used by recorded scenes.
pub type NodeId = u64;

/// A page node whose geometry was measured ahead of time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPage {
    pub bounding_rect: ViewportRect,
    #[serde(default)]
    pub scroll_top: f64,
    #[serde(default)]
    pub scroll_left: f64,
    /// Ids of the nodes in this page's subtree, the page node included.
    #[serde(default)]
    pub nodes: Vec<NodeId>,
}

impl StaticPage {
    #[must_use]
    pub fn new(bounding_rect: ViewportRect) -> Self {
        Self {
            bounding_rect,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll_top: f64, scroll_left: f64) -> Self {
        self.scroll_top = scroll_top;
        self.scroll_left = scroll_left;
        self
    }

    #[must_use]
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.nodes.extend(nodes);
        self
    }
}

impl PageNode for StaticPage {
    type Node = NodeId;

    fn bounding_rect(&self) -> ViewportRect {
        self.bounding_rect
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }
}

/// Client rectangles recorded from a selection range.
///
/// Serializes as a bare array of viewport rects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticRange {
    pub rects: Vec<ViewportRect>,
}

impl StaticRange {
    #[must_use]
    pub fn new(rects: Vec<ViewportRect>) -> Self {
        Self { rects }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl From<Vec<ViewportRect>> for StaticRange {
    fn from(rects: Vec<ViewportRect>) -> Self {
        Self::new(rects)
    }
}

impl ClientRects for StaticRange {
    fn client_rects(&self) -> Vec<ViewportRect> {
        self.rects.clone()
    }
}

/// Pages plus the client rectangles of one selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub pages: Vec<Page<StaticPage>>,
    #[serde(default)]
    pub selection: StaticRange,
}

impl Scene {
    /// Parse a scene from JSON.
    ///
    /// # Errors
    /// Returns an error if the input is not valid scene JSON.
    pub fn from_json(json: &str) -> AnyResult<Self> {
        serde_json::from_str(json).context("failed to parse scene JSON")
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> AnyResult<String> {
        serde_json::to_string(self).context("failed to serialize scene")
    }

    /// Project the recorded selection onto the recorded pages.
    #[must_use]
    pub fn project(&self, should_optimize: bool) -> Vec<PageRect> {
        project_selection_rects(&self.selection, &self.pages, should_optimize)
    }

    /// Project a click on `target` at the given client coordinates.
    #[must_use]
    pub fn project_click(&self, client_x: f64, client_y: f64, target: Option<NodeId>) -> Vec<PageRect> {
        project_point_rect(&PointerEvent::new(client_x, client_y, target), &self.pages)
    }
}
