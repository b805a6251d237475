// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance helpers used to rank directional focus candidates.
//!
//! Directional navigation compares an edge of the focused region against the
//! facing edge of each candidate. Both edges are axis-aligned segments
//! ([`kurbo::Line`]), and the helpers here turn a pair of segments into a
//! squared distance:
//!
//! - When the segments overlap along their shared axis, only the orthogonal
//!   gap matters.
//! - When they are disjoint, the closest endpoints are compared, with the
//!   along-axis component scaled by a cross-range penalty so that candidates
//!   in another "lane" rank behind candidates in the same one.
//!
//! All distances are left squared; callers only compare them.

use kurbo::{Line, Point};

/// Which pair of edges a direction compares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SegmentAxis {
    /// Compare horizontal edges (top/bottom); used for up and down.
    Horizontal,
    /// Compare vertical edges (left/right); used for left and right.
    Vertical,
}

impl SegmentAxis {
    /// Squared distance between two segments along this axis.
    ///
    /// Dispatches to [`horizontal_segment_distance`] or
    /// [`vertical_segment_distance`].
    pub fn distance(self, a: Line, b: Line, crossrange_penalty: f64) -> f64 {
        match self {
            Self::Horizontal => horizontal_segment_distance(a, b, crossrange_penalty),
            Self::Vertical => vertical_segment_distance(a, b, crossrange_penalty),
        }
    }
}

/// Weighted squared distance between two points.
///
/// Each axis delta is multiplied by its weight before squaring.
///
/// ```
/// use kurbo::Point;
/// use understory_spatial_focus::geometry::squared_distance;
///
/// let d = squared_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 1.0, 1.0);
/// assert_eq!(d, 25.0);
/// ```
pub fn squared_distance(p0: Point, p1: Point, x_weight: f64, y_weight: f64) -> f64 {
    let dx = (p0.x - p1.x) * x_weight;
    let dy = (p0.y - p1.y) * y_weight;
    dx * dx + dy * dy
}

/// Squared distance between two horizontal segments.
///
/// Both segments must run left to right (`p0.x <= p1.x`). If their x-ranges
/// overlap (touching counts), the result is the squared vertical gap between
/// the segments. Otherwise the facing endpoints are compared with the
/// horizontal component scaled by `crossrange_penalty`.
///
/// # Panics
///
/// Panics if the segments are in none of the recognized configurations,
/// which happens when a segment runs right to left or a coordinate is NaN.
pub fn horizontal_segment_distance(a: Line, b: Line, crossrange_penalty: f64) -> f64 {
    let (ax0, ax1) = (a.p0.x, a.p1.x);
    let (bx0, bx1) = (b.p0.x, b.p1.x);

    if spans_overlap(ax0, ax1, bx0, bx1) {
        let dy = a.p0.y - b.p0.y;
        return dy * dy;
    }

    // A ends before B starts.
    if ax0 <= ax1 && ax1 <= bx0 && bx0 <= bx1 {
        return squared_distance(a.p1, b.p0, crossrange_penalty, 1.0);
    }

    // B ends before A starts.
    if bx0 <= bx1 && bx1 <= ax0 && ax0 <= ax1 {
        return squared_distance(a.p0, b.p1, crossrange_penalty, 1.0);
    }

    panic!("horizontal segments {a:?} and {b:?} are in no recognized configuration");
}

/// Squared distance between two vertical segments.
///
/// The mirror of [`horizontal_segment_distance`]: both segments must run top
/// to bottom (`p0.y <= p1.y`), overlapping y-ranges yield the squared
/// horizontal gap, and disjoint ranges scale the vertical component by
/// `crossrange_penalty`.
///
/// # Panics
///
/// Panics if the segments are in none of the recognized configurations.
pub fn vertical_segment_distance(a: Line, b: Line, crossrange_penalty: f64) -> f64 {
    let (ay0, ay1) = (a.p0.y, a.p1.y);
    let (by0, by1) = (b.p0.y, b.p1.y);

    if spans_overlap(ay0, ay1, by0, by1) {
        let dx = a.p0.x - b.p0.x;
        return dx * dx;
    }

    if ay0 <= ay1 && ay1 <= by0 && by0 <= by1 {
        return squared_distance(a.p1, b.p0, 1.0, crossrange_penalty);
    }

    if by0 <= by1 && by1 <= ay0 && ay0 <= ay1 {
        return squared_distance(a.p0, b.p1, 1.0, crossrange_penalty);
    }

    panic!("vertical segments {a:?} and {b:?} are in no recognized configuration");
}

/// Whether `[a0, a1]` and `[b0, b1]` overlap in one of the four ordered ways:
/// A inside B, B inside A, A then B, or B then A.
fn spans_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    (b0 <= a0 && a0 <= a1 && a1 <= b1)
        || (a0 <= b0 && b0 <= b1 && b1 <= a1)
        || (a0 <= b0 && b0 <= a1 && a1 <= b1)
        || (b0 <= a0 && a0 <= b1 && b1 <= a1)
}
