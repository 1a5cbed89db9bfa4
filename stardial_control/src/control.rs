// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The control itself: glyph row, layout, hit testing, value updates.
//!
//! ## Overview
//!
//! [`RatingControl`] owns a fixed row of [`Glyph`]s created once at
//! construction and never resized. The integer value is always in
//! `[1, count]`; each glyph's active state is derived from the value and
//! recomputed wholesale on every change rather than patched incrementally —
//! the row is tiny, so simplicity wins over bookkeeping.
//!
//! Pointer input enters through the tracking callbacks in
//! [`tracking`](crate::tracking); this module holds the shared
//! [`update_value`](RatingControl::update_value) core they call into.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};

use crate::flare::Flare;
use crate::style::{ControlStyle, Rgba};
use crate::tracking::TrackPhase;
use crate::types::ControlEvent;

/// One selectable glyph in the row.
///
/// The index is a 1-based, immutable identity; the bounds are fixed at
/// construction. The active state is derived from the control's value and
/// cannot be set independently.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    index: usize,
    bounds: Rect,
    active: bool,
}

impl Glyph {
    /// The glyph's 1-based index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The glyph's bounds in control-local coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// True if this glyph counts toward the current value.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// An interactive star-rating control.
///
/// ## Usage
///
/// - Construct with [`RatingControl::new`]; the value starts at 1 with the
///   first glyph active.
/// - Drive it with the tracking callbacks in [`crate::tracking`], or set the
///   value directly with [`RatingControl::set_value`].
/// - Read back [`RatingControl::glyphs`] and
///   [`RatingControl::glyph_color`] to draw.
#[derive(Clone, Debug)]
pub struct RatingControl {
    style: ControlStyle,
    glyphs: Vec<Glyph>,
    value: usize,
    pub(crate) phase: TrackPhase,
    pub(crate) flare: Option<Flare>,
}

impl RatingControl {
    /// Build the glyph row from a style.
    ///
    /// Glyphs are laid out left to right per
    /// [`ControlStyle::glyph_bounds`]; a `glyph_count` of 0 is clamped to 1
    /// so the value invariant is always satisfiable.
    pub fn new(style: ControlStyle) -> Self {
        let mut style = style;
        style.glyph_count = style.glyph_count.max(1);
        let glyphs = (1..=style.glyph_count)
            .map(|index| Glyph {
                index,
                bounds: style.glyph_bounds(index),
                active: index == 1,
            })
            .collect();
        Self {
            style,
            glyphs,
            value: 1,
            phase: TrackPhase::Idle,
            flare: None,
        }
    }

    /// The current value, always in `[1, count]`.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Number of glyphs in the row.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The glyph row, in index order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The style this control was built with.
    pub fn style(&self) -> &ControlStyle {
        &self.style
    }

    /// The control's preferred size; a layout hint for the host.
    pub fn natural_size(&self) -> Size {
        self.style.natural_size()
    }

    /// The whole-control rectangle in control-local coordinates.
    ///
    /// Tracking uses this (not per-glyph bounds) to decide inside versus
    /// outside for drag and release.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.natural_size())
    }

    /// The color a glyph should currently be painted with.
    pub fn glyph_color(&self, glyph: &Glyph) -> Rgba {
        if glyph.active {
            self.style.active_color
        } else {
            self.style.inactive_color
        }
    }

    /// Set the value directly, clamping into `[1, count]`.
    ///
    /// Recomputes every glyph's active state either way, so an external
    /// write behaves exactly like a pointer-driven update. Returns the
    /// change event only if the value actually changed.
    pub fn set_value(&mut self, value: usize) -> Option<ControlEvent> {
        let value = value.clamp(1, self.glyphs.len());
        let changed = value != self.value;
        self.value = value;
        self.refresh_active();
        changed.then_some(ControlEvent::ValueChanged(value))
    }

    /// Hit-test a control-local point and update the value.
    ///
    /// If the point lands in a glyph whose index differs from the current
    /// value, the value becomes that index and a
    /// [`ControlEvent::ValueChanged`] is returned — at most one per call,
    /// and only on an actual change. Hit or not, every glyph's active state
    /// is recomputed: glyph `i` is active iff `i <= value`.
    pub fn update_value(&mut self, at: Point) -> Option<ControlEvent> {
        let mut emitted = None;
        for glyph in &self.glyphs {
            if glyph.bounds.contains(at) && glyph.index != self.value {
                self.value = glyph.index;
                emitted = Some(ControlEvent::ValueChanged(glyph.index));
            }
        }
        self.refresh_active();
        emitted
    }

    fn refresh_active(&mut self) {
        for glyph in &mut self.glyphs {
            glyph.active = glyph.index <= self.value;
        }
    }
}
