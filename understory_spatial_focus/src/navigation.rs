// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional focus navigation.
//!
//! ## Overview
//!
//! Moving focus in a [`Direction`] compares an edge of the focused region
//! against the facing edge of every other region:
//!
//! - Edges are placed with fractional [`EdgeAnchor`]s, so the compared
//!   segment spans 10%–90% of the region's side rather than its corners.
//! - Candidates must pass the direction's admissibility test, which requires
//!   them to lie strictly beyond the focused region (no overlap on the
//!   travel axis).
//! - Admissible candidates are ranked by [`SegmentAxis::distance`]; the first
//!   candidate with the smallest distance wins.
//! - If no geometric candidate qualifies, the last placeless region is used.
//!
//! When nothing is focused, the first region is focused. When the focused
//! widget is placeless, navigation falls back to [`FocusState::focus_extreme`]
//! with the direction's [`ExtremeWeights`].
//!
//! ## Bindings
//!
//! | Direction | From edge | To edge | Distance | Admissible when | Extreme weights |
//! |-----------|-----------|---------|----------|-----------------|-----------------|
//! | Right | right | left | vertical | `old.x1 <= new.x0` | `(-1, 0, 0, 0)` |
//! | Left | left | right | vertical | `new.x1 <= old.x0` | `(1, 0, 1, 0)` |
//! | Up | top | bottom | horizontal | `new.y1 <= old.y0` | `(0, 1, 0, 1)` |
//! | Down | bottom | top | horizontal | `old.y1 <= new.y0` | `(0, -1, 0, 0)` |

use alloc::rc::Rc;

use kurbo::{Line, Point, Rect};

use crate::geometry::SegmentAxis;
use crate::keymap::{FOCUS_DOWN, FOCUS_LEFT, FOCUS_RIGHT, FOCUS_UP};
use crate::state::FocusState;
use crate::widget::Focusable;

/// Direction of a focus move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
}

impl Direction {
    /// All directions, in the order key events are tested against them.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// The geometric binding for this direction.
    pub fn binding(self) -> &'static DirectionBinding {
        match self {
            Self::Left => &LEFT,
            Self::Right => &RIGHT,
            Self::Up => &UP,
            Self::Down => &DOWN,
        }
    }

    /// The keymap action that triggers a move in this direction.
    pub fn action(self) -> &'static str {
        match self {
            Self::Left => FOCUS_LEFT,
            Self::Right => FOCUS_RIGHT,
            Self::Up => FOCUS_UP,
            Self::Down => FOCUS_DOWN,
        }
    }
}

/// Fractional placement of a segment on a rectangle.
///
/// Endpoint `i` is `(x0 + width * xi, y0 + height * yi)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeAnchor {
    /// Fraction of the width for the first endpoint.
    pub x0: f64,
    /// Fraction of the height for the first endpoint.
    pub y0: f64,
    /// Fraction of the width for the second endpoint.
    pub x1: f64,
    /// Fraction of the height for the second endpoint.
    pub y1: f64,
}

impl EdgeAnchor {
    /// Create an anchor from two fractional endpoints.
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The segment this anchor describes on `rect`.
    ///
    /// `rect` is normalized first, so the segment always runs left to right
    /// or top to bottom when the anchor does.
    pub fn on(&self, rect: Rect) -> Line {
        let rect = rect.abs();
        let at = |fx: f64, fy: f64| {
            Point::new(rect.x0 + rect.width() * fx, rect.y0 + rect.height() * fy)
        };
        Line::new(at(self.x0, self.y0), at(self.x1, self.y1))
    }
}

/// Weights used to pick an extreme region when geometry gives no anchor.
///
/// A region scores `x * self.x + y * self.y + w * self.w + h * self.h`,
/// and the highest score wins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtremeWeights {
    /// Weight of the left edge.
    pub x: f64,
    /// Weight of the top edge.
    pub y: f64,
    /// Weight of the width.
    pub w: f64,
    /// Weight of the height.
    pub h: f64,
}

impl ExtremeWeights {
    /// Create a set of weights.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Score `rect` under these weights.
    pub fn score(&self, rect: Rect) -> f64 {
        let rect = rect.abs();
        rect.x0 * self.x + rect.y0 * self.y + rect.width() * self.w + rect.height() * self.h
    }
}

/// Everything directional navigation needs to know about one direction.
#[derive(Copy, Clone, Debug)]
pub struct DirectionBinding {
    /// Segment on the focused region.
    pub from: EdgeAnchor,
    /// Segment on each candidate region.
    pub to: EdgeAnchor,
    /// Which segment distance ranks candidates.
    pub axis: SegmentAxis,
    /// Whether a candidate (second argument) lies in this direction from
    /// the focused region (first argument).
    pub admits: fn(Rect, Rect) -> bool,
    /// Fallback weights used when the focused widget is placeless.
    pub extreme: ExtremeWeights,
}

fn right_of(old: Rect, new: Rect) -> bool {
    let (old, new) = (old.abs(), new.abs());
    old.x1 <= new.x0
}

fn left_of(old: Rect, new: Rect) -> bool {
    let (old, new) = (old.abs(), new.abs());
    new.x1 <= old.x0
}

fn above(old: Rect, new: Rect) -> bool {
    let (old, new) = (old.abs(), new.abs());
    new.y1 <= old.y0
}

fn below(old: Rect, new: Rect) -> bool {
    let (old, new) = (old.abs(), new.abs());
    old.y1 <= new.y0
}

const RIGHT: DirectionBinding = DirectionBinding {
    from: EdgeAnchor::new(0.9, 0.1, 0.9, 0.9),
    to: EdgeAnchor::new(0.1, 0.1, 0.1, 0.9),
    axis: SegmentAxis::Vertical,
    admits: right_of,
    extreme: ExtremeWeights::new(-1.0, 0.0, 0.0, 0.0),
};

const LEFT: DirectionBinding = DirectionBinding {
    from: EdgeAnchor::new(0.1, 0.1, 0.1, 0.9),
    to: EdgeAnchor::new(0.9, 0.1, 0.9, 0.9),
    axis: SegmentAxis::Vertical,
    admits: left_of,
    extreme: ExtremeWeights::new(1.0, 0.0, 1.0, 0.0),
};

const UP: DirectionBinding = DirectionBinding {
    from: EdgeAnchor::new(0.1, 0.1, 0.9, 0.1),
    to: EdgeAnchor::new(0.1, 0.9, 0.9, 0.9),
    axis: SegmentAxis::Horizontal,
    admits: above,
    extreme: ExtremeWeights::new(0.0, 1.0, 0.0, 1.0),
};

const DOWN: DirectionBinding = DirectionBinding {
    from: EdgeAnchor::new(0.1, 0.9, 0.9, 0.9),
    to: EdgeAnchor::new(0.1, 0.1, 0.9, 0.1),
    axis: SegmentAxis::Horizontal,
    admits: below,
    extreme: ExtremeWeights::new(0.0, -1.0, 0.0, 0.0),
};

impl<W: Focusable + ?Sized, A> FocusState<W, A> {
    /// Move focus to `target`, notifying the old and new widgets.
    ///
    /// Does nothing while a grab is held or when `target` is already
    /// focused. Otherwise the old widget is sent `unfocus`, the new one is
    /// sent `focus(false)`, and the new focus is stored. Returns whether
    /// focus moved.
    pub fn change_focus(&mut self, target: Option<Rc<W>>) -> bool {
        if self.grab.is_some() {
            tracing::trace!("focus change suppressed by grab");
            return false;
        }

        let unchanged = match (&self.focused, &target) {
            (Some(current), Some(target)) => Rc::ptr_eq(current, target),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        if let Some(current) = &self.focused {
            current.unfocus();
        }
        if let Some(target) = &target {
            target.focus(false);
        }
        tracing::debug!(cleared = target.is_none(), "focus changed");
        self.focused = target;
        true
    }

    fn focus_region(&mut self, index: usize) -> bool {
        let widget = Rc::clone(&self.regions[index].widget);
        self.change_focus(Some(widget))
    }

    /// Focus the region with the highest [`ExtremeWeights::score`].
    ///
    /// Placeless regions are skipped, and the first of several equal scores
    /// wins. Does nothing when no region has geometry. Returns whether focus
    /// moved.
    pub fn focus_extreme(&mut self, weights: ExtremeWeights) -> bool {
        let mut best: Option<(usize, f64)> = None;
        for (i, region) in self.regions.iter().enumerate() {
            let Some(rect) = region.rect else {
                continue;
            };
            let score = weights.score(rect);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        match best {
            Some((i, _)) => self.focus_region(i),
            None => false,
        }
    }

    /// Move focus one step in `direction`.
    ///
    /// See the [module docs](self) for the selection rules. Returns whether
    /// focus moved.
    pub fn focus_nearest(&mut self, direction: Direction) -> bool {
        self.focus_nearest_with(direction.binding())
    }

    /// Move focus using an explicit [`DirectionBinding`].
    ///
    /// [`FocusState::focus_nearest`] calls this with the built-in binding
    /// for its direction.
    pub fn focus_nearest_with(&mut self, binding: &DirectionBinding) -> bool {
        if self.regions.is_empty() {
            return false;
        }

        let Some(current) = self.focused.clone() else {
            return self.focus_region(0);
        };

        let Some(from_index) = self.regions.iter().position(|r| r.is_for(&current)) else {
            tracing::trace!("focused widget has no region; focusing the first region");
            return self.focus_region(0);
        };

        let Some(from_rect) = self.regions[from_index].rect else {
            return self.focus_extreme(binding.extreme);
        };

        let from = binding.from.on(from_rect);
        let penalty = self.config.crossrange_penalty;

        let mut placeless = None;
        let mut best: Option<(usize, f64)> = None;
        for (i, region) in self.regions.iter().enumerate() {
            if i == from_index {
                continue;
            }
            let Some(rect) = region.rect else {
                placeless = Some(i);
                continue;
            };
            if !(binding.admits)(from_rect, rect) {
                continue;
            }

            let distance = binding.axis.distance(from, binding.to.on(rect), penalty);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((i, distance));
            }
        }

        match best.map(|(i, _)| i).or(placeless) {
            Some(i) => {
                tracing::trace!(region = i, "directional candidate chosen");
                self.focus_region(i)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Seen, TestWidget};
    use crate::types::FocusRegion;
    use alloc::vec;
    use alloc::vec::Vec;

    type State = FocusState<TestWidget>;

    fn state_with(regions: Vec<FocusRegion<TestWidget>>) -> State {
        let mut state = State::new();
        state.take_regions(regions);
        state
    }

    fn rect(label: &'static str, x: f64, y: f64, w: f64, h: f64) -> FocusRegion<TestWidget> {
        FocusRegion::new(TestWidget::new(label), x, y, w, h)
    }

    fn focus(state: &mut State, label: &str) {
        let widget = state
            .regions()
            .iter()
            .find(|r| r.widget.label == label)
            .map(|r| Rc::clone(&r.widget));
        state.set_focused(widget);
    }

    fn focused_label(state: &State) -> Option<&'static str> {
        state.focused().map(|w| w.label)
    }

    #[test]
    fn right_skips_inadmissible_candidates() {
        let mut state = state_with(vec![
            rect("origin", 0.0, 0.0, 10.0, 10.0),
            rect("left", -20.0, 0.0, 10.0, 10.0),
            rect("right", 20.0, 0.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        assert!(state.focus_nearest(Direction::Right), "focus should move");
        assert_eq!(focused_label(&state), Some("right"));
    }

    #[test]
    fn each_direction_finds_its_neighbor() {
        let grid = || {
            state_with(vec![
                rect("center", 20.0, 20.0, 10.0, 10.0),
                rect("left", 0.0, 20.0, 10.0, 10.0),
                rect("right", 40.0, 20.0, 10.0, 10.0),
                rect("up", 20.0, 0.0, 10.0, 10.0),
                rect("down", 20.0, 40.0, 10.0, 10.0),
            ])
        };
        for (direction, expected) in [
            (Direction::Left, "left"),
            (Direction::Right, "right"),
            (Direction::Up, "up"),
            (Direction::Down, "down"),
        ] {
            let mut state = grid();
            focus(&mut state, "center");
            state.focus_nearest(direction);
            assert_eq!(focused_label(&state), Some(expected), "moving {direction:?}");
        }
    }

    #[test]
    fn same_row_beats_closer_diagonal() {
        let mut state = state_with(vec![
            rect("origin", 0.0, 0.0, 10.0, 10.0),
            rect("diagonal", 15.0, 30.0, 10.0, 10.0),
            rect("far", 100.0, 0.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        state.focus_nearest(Direction::Right);
        assert_eq!(focused_label(&state), Some("far"));
    }

    #[test]
    fn equal_distances_keep_first_candidate() {
        let mut state = state_with(vec![
            rect("origin", 0.0, 0.0, 10.0, 10.0),
            rect("first", 20.0, 0.0, 10.0, 10.0),
            rect("second", 20.0, 0.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        state.focus_nearest(Direction::Right);
        assert_eq!(focused_label(&state), Some("first"));
    }

    #[test]
    fn nothing_focused_takes_first_region() {
        let mut state = state_with(vec![
            rect("a", 50.0, 0.0, 10.0, 10.0),
            rect("b", 0.0, 0.0, 10.0, 10.0),
        ]);
        assert!(state.focus_nearest(Direction::Left), "focus should move");
        assert_eq!(focused_label(&state), Some("a"));
    }

    #[test]
    fn stale_focus_takes_first_region() {
        let mut state = state_with(vec![
            rect("a", 50.0, 0.0, 10.0, 10.0),
            rect("b", 0.0, 0.0, 10.0, 10.0),
        ]);
        state.set_focused(Some(TestWidget::new("gone")));
        state.focus_nearest(Direction::Down);
        assert_eq!(focused_label(&state), Some("a"));
    }

    #[test]
    fn empty_regions_do_nothing() {
        let mut state = State::new();
        let widget = TestWidget::new("solo");
        state.set_focused(Some(Rc::clone(&widget)));
        assert!(!state.focus_nearest(Direction::Up), "no regions, no move");
        assert!(state.is_focused(&widget), "focus is unchanged");
    }

    #[test]
    fn blocked_direction_falls_back_to_placeless() {
        let mut state = state_with(vec![
            rect("origin", 0.0, 0.0, 10.0, 10.0),
            FocusRegion::placeless(TestWidget::new("menu")),
            rect("left", -20.0, 0.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        state.focus_nearest(Direction::Right);
        assert_eq!(focused_label(&state), Some("menu"));
    }

    #[test]
    fn blocked_direction_without_placeless_keeps_focus() {
        let mut state = state_with(vec![
            rect("origin", 0.0, 0.0, 10.0, 10.0),
            rect("left", -20.0, 0.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        assert!(!state.focus_nearest(Direction::Right), "no candidate");
        assert_eq!(focused_label(&state), Some("origin"));
    }

    #[test]
    fn reversed_rects_navigate_like_normalized_ones() {
        let mut state = state_with(vec![
            FocusRegion::from_rect(TestWidget::new("origin"), Rect::new(10.0, 0.0, 0.0, 10.0)),
            rect("below", 0.0, 20.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        assert!(state.focus_nearest(Direction::Down), "candidate below");
        assert_eq!(focused_label(&state), Some("below"));

        // A reversed rect written straight into the public field.
        state.regions[1].rect = Some(Rect::new(10.0, 30.0, 0.0, 20.0));
        assert!(state.focus_nearest(Direction::Up), "candidate above");
        assert_eq!(focused_label(&state), Some("origin"));
    }

    #[test]
    fn placeless_focus_uses_extremes() {
        let regions = || {
            vec![
                FocusRegion::placeless(TestWidget::new("menu")),
                rect("mid", 50.0, 50.0, 10.0, 10.0),
                rect("top_left", 0.0, 0.0, 10.0, 10.0),
                rect("bottom_right", 100.0, 100.0, 10.0, 10.0),
            ]
        };
        for (direction, expected) in [
            (Direction::Right, "top_left"),
            (Direction::Left, "bottom_right"),
            (Direction::Up, "bottom_right"),
            (Direction::Down, "top_left"),
        ] {
            let mut state = state_with(regions());
            focus(&mut state, "menu");
            state.focus_nearest(direction);
            assert_eq!(focused_label(&state), Some(expected), "moving {direction:?}");
        }
    }

    #[test]
    fn extreme_is_argmax_with_first_tie() {
        let mut state = state_with(vec![
            FocusRegion::placeless(TestWidget::new("menu")),
            rect("a", 0.0, 0.0, 10.0, 10.0),
            rect("b", 30.0, 0.0, 10.0, 10.0),
            rect("c", 30.0, 50.0, 10.0, 10.0),
        ]);
        assert!(
            state.focus_extreme(ExtremeWeights::new(1.0, 0.0, 0.0, 0.0)),
            "focus should move"
        );
        assert_eq!(focused_label(&state), Some("b"), "first maximum wins");
    }

    #[test]
    fn extreme_ignores_placeless_only_lists() {
        let mut state = state_with(vec![FocusRegion::placeless(TestWidget::new("menu"))]);
        assert!(!state.focus_extreme(ExtremeWeights::new(1.0, 1.0, 1.0, 1.0)), "nothing to score");
        assert!(state.focused().is_none(), "focus is unchanged");
    }

    #[test]
    fn change_focus_notifies_both_sides() {
        let a = TestWidget::new("a");
        let b = TestWidget::new("b");
        let mut state = State::new();
        state.change_focus(Some(Rc::clone(&a)));
        assert_eq!(a.last(), Seen::Focused { default: false });

        state.change_focus(Some(Rc::clone(&b)));
        assert_eq!(a.last(), Seen::Unfocused);
        assert_eq!(b.last(), Seen::Focused { default: false });

        assert!(!state.change_focus(Some(Rc::clone(&b))), "already focused");
        assert_eq!(b.focus_calls(), 1, "no repeat notification");

        state.change_focus(None);
        assert_eq!(b.unfocus_calls(), 1);
        assert!(state.focused().is_none(), "focus cleared");
    }

    #[test]
    fn grab_suppresses_focus_changes_until_next_frame() {
        let mut state = state_with(vec![
            rect("origin", 0.0, 0.0, 10.0, 10.0),
            rect("right", 20.0, 0.0, 10.0, 10.0),
        ]);
        focus(&mut state, "origin");
        let holder = Rc::clone(&state.regions()[0].widget);
        state.request_grab(holder);

        let right = Rc::clone(&state.regions()[1].widget);
        assert!(!state.change_focus(Some(Rc::clone(&right))), "grab blocks change_focus");
        assert!(!state.focus_nearest(Direction::Right), "grab blocks navigation");
        assert_eq!(focused_label(&state), Some("origin"));

        let tree: Vec<(Rc<TestWidget>, Option<crate::FocusSymbol>)> = state
            .regions()
            .iter()
            .map(|r| (Rc::clone(&r.widget), None))
            .collect();
        state.begin_frame(&tree[..]);
        assert!(state.change_focus(Some(right)), "grab was cleared by the frame");
        assert_eq!(focused_label(&state), Some("right"));
    }

    #[test]
    fn bindings_match_the_table() {
        let b = Direction::Down.binding();
        assert_eq!(b.axis, SegmentAxis::Horizontal);
        assert_eq!(b.from, EdgeAnchor::new(0.1, 0.9, 0.9, 0.9));
        assert_eq!(b.extreme, ExtremeWeights::new(0.0, -1.0, 0.0, 0.0));

        let old = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let overlapping = Rect::new(5.0, 0.0, 15.0, 10.0);
        assert!((Direction::Right.binding().admits)(old, touching), "touching is admissible");
        assert!(!(Direction::Right.binding().admits)(old, overlapping), "overlap is not");
        assert_eq!(Direction::Up.action(), FOCUS_UP);
    }

    #[test]
    fn anchors_place_segments_inside_the_edge() {
        let line = Direction::Right.binding().from.on(Rect::new(0.0, 0.0, 10.0, 100.0));
        assert_eq!(line.p0, Point::new(9.0, 10.0));
        assert_eq!(line.p1, Point::new(9.0, 90.0));
    }
}
