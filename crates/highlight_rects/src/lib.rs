//! Highlight rectangles for text selections spanning rendered pages.
//!
//! This crate turns the viewport-space rectangles of a selection range (or a
//! single pointer position) into page-relative rectangles, then collapses the
//! fragments produced by inline runs into a minimal set ready to be drawn as
//! highlight overlays. Page layout, painting and event capture stay with the
//! host, which reaches the core through the traits in [`page`].

pub mod config;
pub mod geometry;
pub mod optimizer;
pub mod page;
pub mod projection;
pub mod scene;

pub use config::OptimizerConfig;
pub use geometry::{PageRect, ViewportRect};
pub use optimizer::{group_by_page, optimize, optimize_with};
pub use page::{ClientRects, Page, PageNode, PointerEvent};
pub use projection::{project_point_rect, project_selection_rects, project_selection_rects_with};
pub use scene::{NodeId, Scene, StaticPage, StaticRange};
