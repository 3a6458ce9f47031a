//! Rectangle types shared by the projector and the optimizer.
//!
//! Two coordinate spaces are involved:
//! - viewport space, where the host reports selection fragments and page bounds
//! - page space, measured from a page's content origin with its scroll offset applied

use serde::{Deserialize, Serialize};

/// A rectangle in viewport coordinates, as reported by the host's range geometry query.
///
/// All six edges are carried because hosts report them independently and the
/// projector tests them as given; nothing here re-derives `right` from `left + width`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    /// Top edge in viewport pixels.
    pub top: f64,
    /// Left edge in viewport pixels.
    pub left: f64,
    /// Right edge in viewport pixels.
    pub right: f64,
    /// Bottom edge in viewport pixels.
    pub bottom: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ViewportRect {
    /// Create a viewport rectangle from its origin and size, deriving the far edges.
    #[inline]
    #[must_use]
    pub fn from_xywh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Check if this rectangle lies entirely within `outer`. Touching edges count as inside.
    #[inline]
    #[must_use]
    pub fn contained_in(&self, outer: &Self) -> bool {
        self.top >= outer.top
            && self.bottom <= outer.bottom
            && self.right <= outer.right
            && self.left >= outer.left
    }
}

/// A page-relative rectangle tagged with its owning page (the LTWHP record).
///
/// Serializes as `{ top, left, width, height, pageNumber }`. A zero-area rect
/// is a point, e.g. a click location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRect {
    /// Distance from the page's content top, in pixels.
    pub top: f64,
    /// Distance from the page's content left, in pixels.
    pub left: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Number of the page this rectangle belongs to.
    pub page_number: u32,
}

impl PageRect {
    /// Create a new page rectangle.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64, page_number: u32) -> Self {
        Self {
            top,
            left,
            width,
            height,
            page_number,
        }
    }

    /// Create a zero-area rectangle at the given page position.
    #[inline]
    #[must_use]
    pub const fn point(top: f64, left: f64, page_number: u32) -> Self {
        Self::new(top, left, 0.0, 0.0, page_number)
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Area in square pixels.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Whether this rectangle marks a point rather than a span.
    #[inline]
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Check if `inner` lies entirely within this rectangle on the same page.
    #[inline]
    #[must_use]
    pub fn contains(&self, inner: &Self) -> bool {
        self.page_number == inner.page_number
            && inner.left >= self.left
            && inner.top >= self.top
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }

    /// Check if the two rectangles share interior area on the same page.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.page_number == other.page_number
            && self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// Compute the bounding rectangle of two rectangles.
    ///
    /// The page number of `self` is kept; callers only union rectangles of one page.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let top = self.top.min(other.top);
        let left = self.left.min(other.left);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            top,
            left,
            width: right - left,
            height: bottom - top,
            page_number: self.page_number,
        }
    }
}
