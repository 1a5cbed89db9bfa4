// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flare: tap feedback as a passive scale timeline.
//!
//! ## Overview
//!
//! A release inside the control plays a fixed two-step tween: scale up to
//! 1.6× over 0.3 time units, then back to identity over 0.1. The timeline
//! carries no clock and no state beyond elapsed time; the host advances it
//! with frame deltas and draws with the resulting [`Affine`]. Once finished
//! it reports identity forever, and
//! [`RatingControl::advance_flare`](crate::control::RatingControl::advance_flare)
//! drops it.
//!
//! The tween is a plain linear interpolation; the timing constants are the
//! contract, the easing curve is not.

use kurbo::Affine;

use crate::control::RatingControl;

/// A running tap-feedback animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flare {
    elapsed: f64,
}

impl Flare {
    /// Peak uniform scale reached at the end of the expand step.
    pub const PEAK_SCALE: f64 = 1.6;
    /// Duration of the scale-up step.
    pub const EXPAND_DURATION: f64 = 0.3;
    /// Duration of the settle-back step.
    pub const SETTLE_DURATION: f64 = 0.1;

    /// Start a flare at its beginning.
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advance the timeline by a frame delta. Negative deltas are ignored;
    /// time does not run backwards.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
    }

    /// Time elapsed since the flare started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The current uniform scale factor.
    pub fn scale(&self) -> f64 {
        let t = self.elapsed;
        if t <= 0.0 {
            1.0
        } else if t < Self::EXPAND_DURATION {
            1.0 + (Self::PEAK_SCALE - 1.0) * (t / Self::EXPAND_DURATION)
        } else if t < Self::EXPAND_DURATION + Self::SETTLE_DURATION {
            let settle = (t - Self::EXPAND_DURATION) / Self::SETTLE_DURATION;
            Self::PEAK_SCALE - (Self::PEAK_SCALE - 1.0) * settle
        } else {
            1.0
        }
    }

    /// The current transform: a uniform scale about the origin.
    ///
    /// Hosts that want to scale about the control's center should conjugate
    /// with translations to and from [`Rect::center`](kurbo::Rect::center).
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale())
    }

    /// True once both steps have fully played out.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= Self::EXPAND_DURATION + Self::SETTLE_DURATION
    }
}

impl Default for Flare {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingControl {
    /// The running flare, if a tap inside recently started one.
    pub fn flare(&self) -> Option<&Flare> {
        self.flare.as_ref()
    }

    /// Advance the running flare by a frame delta and return the transform
    /// to draw with.
    ///
    /// Returns identity when no flare is running. A finished flare is
    /// dropped so no state outlives the animation.
    pub fn advance_flare(&mut self, dt: f64) -> Affine {
        let Some(flare) = self.flare.as_mut() else {
            return Affine::IDENTITY;
        };
        flare.advance(dt);
        let transform = flare.transform();
        if flare.is_finished() {
            self.flare = None;
        }
        transform
    }
}
