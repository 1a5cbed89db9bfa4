// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stardial_control --heading-base-level=0

//! Stardial Control: a Kurbo-native interactive rating control.
//!
//! ## Overview
//!
//! This crate models a fixed-size row of selectable star glyphs with an
//! integer value, driven entirely by pointer input in the control's own
//! coordinate space.
//! It owns the layout, the hit testing, the pointer-tracking state machine,
//! and the tap feedback timeline.
//! It does not render: the control exposes glyph geometry and colors, and the
//! host draws them with whatever toolkit it uses.
//!
//! ## Inputs
//!
//! Feed the control one pointer interaction at a time through
//! [`begin_tracking`](control::RatingControl::begin_tracking),
//! [`continue_tracking`](control::RatingControl::continue_tracking), and
//! [`end_tracking`](control::RatingControl::end_tracking) or
//! [`cancel_tracking`](control::RatingControl::cancel_tracking), with points
//! given in control-local coordinates.
//! The host is responsible for delivering callbacks in begin → continue
//! (zero or more) → end-or-cancel order; the control assumes that ordering.
//!
//! ## Outputs
//!
//! Each tracking callback returns the ordered [`ControlEvent`](types::ControlEvent)
//! sequence it emitted — a [`ValueChanged`](types::ControlEvent::ValueChanged)
//! when the hit glyph differs from the current value, followed by the gesture
//! phase for that callback.
//! Hosts that only care about a subset of the taxonomy can filter with an
//! [`EventMask`](types::EventMask).
//!
//! ## Feedback
//!
//! A pointer-up inside the control starts the [`Flare`](flare::Flare): a
//! transient scale-up/scale-down timeline the host advances with frame
//! deltas via [`advance_flare`](control::RatingControl::advance_flare).
//! The library holds no clock; the timeline is passive.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use stardial_control::control::RatingControl;
//! use stardial_control::style::ControlStyle;
//! use stardial_control::types::ControlEvent;
//!
//! let mut control = RatingControl::new(ControlStyle::default());
//! assert_eq!(control.value(), 1);
//!
//! // Tap the fourth glyph: press and release at its center.
//! let center = control.glyphs()[3].bounds().center();
//! let down = control.begin_tracking(center);
//! assert_eq!(
//!     down,
//!     vec![ControlEvent::ValueChanged(4), ControlEvent::TouchDown],
//! );
//! let up = control.end_tracking(Some(center));
//! assert_eq!(up, vec![ControlEvent::TouchUpInside]);
//! assert_eq!(control.value(), 4);
//! assert!(control.flare().is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod control;
pub mod flare;
pub mod style;
pub mod tracking;
pub mod types;
