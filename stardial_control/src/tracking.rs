// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking: the begin → continue → end-or-cancel state machine.
//!
//! ## Overview
//!
//! One continuous pointer interaction maps onto four callbacks. Each returns
//! the ordered [`ControlEvent`] sequence it emitted; the control hands back
//! its transitions rather than invoking handlers, so hosts dispatch however
//! they like:
//!
//! - [`begin_tracking`](crate::control::RatingControl::begin_tracking) —
//!   updates the value, emits `TouchDown`.
//! - [`continue_tracking`](crate::control::RatingControl::continue_tracking)
//!   — inside the control's bounds updates the value and emits
//!   `TouchDragInside`; outside, emits `TouchDragOutside` only.
//! - [`end_tracking`](crate::control::RatingControl::end_tracking) — inside,
//!   updates the value, emits `TouchUpInside`, and starts the flare;
//!   outside (or with no final point), emits `TouchUpOutside`.
//! - [`cancel_tracking`](crate::control::RatingControl::cancel_tracking) —
//!   emits `TouchCancel`, never changes the value.
//!
//! Inside/outside is judged against the whole-control
//! [`bounds`](crate::control::RatingControl::bounds), not per-glyph bounds.
//!
//! ## Host contract
//!
//! Callbacks are expected in strict begin → continue (zero or more) →
//! end-or-cancel order on a single thread; the control records its
//! [`TrackPhase`] but does not police the host. There is no timeout:
//! cancellation is a terminal callback, not a timer.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::Point;

use crate::control::RatingControl;
use crate::flare::Flare;
use crate::types::ControlEvent;

/// Where the control is in the tracking lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TrackPhase {
    /// No interaction yet, or the previous one is long gone.
    Idle,
    /// A pointer is down and being tracked.
    Tracking,
    /// The last interaction ended with a release.
    Ended,
    /// The last interaction was cancelled.
    Cancelled,
}

impl RatingControl {
    /// The current tracking phase.
    pub fn phase(&self) -> TrackPhase {
        self.phase
    }

    /// True while a pointer is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.phase == TrackPhase::Tracking
    }

    /// Initial pointer contact. Always accepts the touch.
    ///
    /// Runs [`update_value`](Self::update_value) at the contact point and
    /// emits [`ControlEvent::TouchDown`]; a value change precedes it.
    pub fn begin_tracking(&mut self, at: Point) -> Vec<ControlEvent> {
        self.phase = TrackPhase::Tracking;
        let mut out = Vec::new();
        if let Some(changed) = self.update_value(at) {
            out.push(changed);
        }
        out.push(ControlEvent::TouchDown);
        out
    }

    /// Pointer movement while tracking. Always continues the interaction.
    ///
    /// While the point stays inside [`bounds`](Self::bounds), the value
    /// follows the pointer; once outside, the value freezes and only
    /// [`ControlEvent::TouchDragOutside`] is reported.
    pub fn continue_tracking(&mut self, at: Point) -> Vec<ControlEvent> {
        let mut out = Vec::new();
        if self.bounds().contains(at) {
            if let Some(changed) = self.update_value(at) {
                out.push(changed);
            }
            out.push(ControlEvent::TouchDragInside);
        } else {
            out.push(ControlEvent::TouchDragOutside);
        }
        out
    }

    /// Pointer release, with the final point if the host still has one.
    ///
    /// A release inside [`bounds`](Self::bounds) runs the final value
    /// update, emits [`ControlEvent::TouchUpInside`], and starts the
    /// [`Flare`]. A release outside — including `None`, the
    /// system-cancelled end where no final point exists — emits
    /// [`ControlEvent::TouchUpOutside`] and leaves the value untouched.
    pub fn end_tracking(&mut self, at: Option<Point>) -> Vec<ControlEvent> {
        self.phase = TrackPhase::Ended;
        let mut out = Vec::new();
        match at {
            Some(p) if self.bounds().contains(p) => {
                if let Some(changed) = self.update_value(p) {
                    out.push(changed);
                }
                out.push(ControlEvent::TouchUpInside);
                self.flare = Some(Flare::new());
            }
            _ => out.push(ControlEvent::TouchUpOutside),
        }
        out
    }

    /// The interaction was cancelled. Never changes the value.
    pub fn cancel_tracking(&mut self) -> Vec<ControlEvent> {
        self.phase = TrackPhase::Cancelled;
        vec![ControlEvent::TouchCancel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use crate::style::ControlStyle;

    fn control() -> RatingControl {
        RatingControl::new(ControlStyle::default())
    }

    fn center_of(control: &RatingControl, index: usize) -> Point {
        control.glyphs()[index - 1].bounds().center()
    }

    #[test]
    fn begin_updates_value_then_reports_down() {
        let mut c = control();
        let out = c.begin_tracking(center_of(&c, 3));
        assert_eq!(
            out,
            vec![ControlEvent::ValueChanged(3), ControlEvent::TouchDown]
        );
        assert!(c.is_tracking());
        assert_eq!(c.phase(), TrackPhase::Tracking);
    }

    // Beginning on the already-current glyph reports only the down event.
    #[test]
    fn begin_without_change_reports_down_only() {
        let mut c = control();
        let out = c.begin_tracking(center_of(&c, 1));
        assert_eq!(out, vec![ControlEvent::TouchDown]);
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn drag_inside_follows_pointer() {
        let mut c = control();
        let _ = c.begin_tracking(center_of(&c, 2));
        let out = c.continue_tracking(center_of(&c, 5));
        assert_eq!(
            out,
            vec![ControlEvent::ValueChanged(5), ControlEvent::TouchDragInside]
        );
        assert_eq!(c.value(), 5);
    }

    // Outside the control's outer bounds the value never moves, no matter
    // which glyph the point would nominally overlap in x.
    #[test]
    fn drag_outside_freezes_value() {
        let mut c = control();
        let _ = c.begin_tracking(center_of(&c, 2));
        // Below the control, but at glyph 5's x position.
        let below = Point::new(center_of(&c, 5).x, 60.0);
        let out = c.continue_tracking(below);
        assert_eq!(out, vec![ControlEvent::TouchDragOutside]);
        assert_eq!(c.value(), 2);
        assert!(c.is_tracking(), "drag outside keeps tracking");
    }

    #[test]
    fn end_inside_reports_up_inside_and_flares() {
        let mut c = control();
        let _ = c.begin_tracking(center_of(&c, 2));
        let out = c.end_tracking(Some(center_of(&c, 4)));
        assert_eq!(
            out,
            vec![ControlEvent::ValueChanged(4), ControlEvent::TouchUpInside]
        );
        assert_eq!(c.value(), 4);
        assert_eq!(c.phase(), TrackPhase::Ended);
        assert!(c.flare().is_some(), "release inside starts the flare");
    }

    #[test]
    fn end_outside_reports_up_outside_without_flare() {
        let mut c = control();
        let _ = c.begin_tracking(center_of(&c, 2));
        let out = c.end_tracking(Some(Point::new(-10.0, 5.0)));
        assert_eq!(out, vec![ControlEvent::TouchUpOutside]);
        assert_eq!(c.value(), 2);
        assert!(c.flare().is_none());
    }

    // A missing final pointer is equivalent to "ended outside": no value
    // update, no flare, one up-outside event.
    #[test]
    fn end_without_point_is_outside() {
        let mut c = control();
        let _ = c.begin_tracking(center_of(&c, 3));
        let out = c.end_tracking(None);
        assert_eq!(out, vec![ControlEvent::TouchUpOutside]);
        assert_eq!(c.value(), 3);
        assert!(c.flare().is_none());
    }

    #[test]
    fn cancel_reports_once_and_keeps_value() {
        let mut c = control();
        let _ = c.begin_tracking(center_of(&c, 4));
        let out = c.cancel_tracking();
        assert_eq!(out, vec![ControlEvent::TouchCancel]);
        assert_eq!(c.value(), 4);
        assert_eq!(c.phase(), TrackPhase::Cancelled);
        assert!(c.flare().is_none());
    }

    // The full scenario: fresh control, tap glyph 4 twice. The first tap
    // changes the value; the second is a no-op for the value but the flare
    // still plays, because tap-inside feedback is independent of change.
    #[test]
    fn tap_glyph_four_twice() {
        let mut c = control();
        let pt = center_of(&c, 4);

        let down = c.begin_tracking(pt);
        assert_eq!(
            down,
            vec![ControlEvent::ValueChanged(4), ControlEvent::TouchDown]
        );
        let up = c.end_tracking(Some(pt));
        assert_eq!(up, vec![ControlEvent::TouchUpInside]);
        assert_eq!(c.value(), 4);
        for glyph in c.glyphs() {
            assert_eq!(glyph.is_active(), glyph.index() <= 4);
        }
        assert!(c.flare().is_some());

        // Drain the first flare, then tap again.
        let _ = c.advance_flare(1.0);
        assert!(c.flare().is_none());

        let down = c.begin_tracking(pt);
        assert_eq!(down, vec![ControlEvent::TouchDown], "no duplicate change");
        let up = c.end_tracking(Some(pt));
        assert_eq!(up, vec![ControlEvent::TouchUpInside]);
        assert_eq!(c.value(), 4);
        assert!(c.flare().is_some(), "flare replays on an unchanged tap");
    }
}
