// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration: glyph metrics, colors, and layout rule.

use kurbo::{Rect, Size};

/// A plain 8-bit-per-channel RGBA color.
///
/// The control does not render; it only reports which color a glyph should be
/// painted with. Hosts convert this into whatever color type their toolkit
/// uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `255` is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the default active color.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque mid gray, the default inactive color.
    pub const GRAY: Self = Self::new(128, 128, 128, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Styling and metrics for a [`RatingControl`](crate::control::RatingControl).
///
/// All of these are fixed at construction; the control never re-reads a
/// changed style. The defaults reproduce the classic six-star layout: 40-unit
/// glyph squares, 8-unit spacing, a bold outlined star at font size 32.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlStyle {
    /// Number of selectable glyphs. Values below 1 are clamped to 1 at
    /// construction so the value invariant stays satisfiable.
    pub glyph_count: usize,
    /// Side length of each glyph's square bounds.
    pub glyph_dimension: f64,
    /// Nominal spacing between glyphs. See [`Self::glyph_bounds`] for how it
    /// actually enters the layout.
    pub glyph_spacing: f64,
    /// Font size the host should render the glyph character at.
    pub font_size: f64,
    /// The glyph character itself.
    pub glyph: char,
    /// Color of glyphs counting toward the current value.
    pub active_color: Rgba,
    /// Color of glyphs above the current value.
    pub inactive_color: Rgba,
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self {
            glyph_count: 6,
            glyph_dimension: 40.0,
            glyph_spacing: 8.0,
            font_size: 32.0,
            glyph: '☆',
            active_color: Rgba::BLACK,
            inactive_color: Rgba::GRAY,
        }
    }
}

impl ControlStyle {
    /// The control's preferred size: width `N·D + (N+1)·S`, height `D`.
    ///
    /// This is a layout hint for whatever system hosts the control; it is
    /// also the rectangle used for whole-control containment during
    /// tracking.
    pub fn natural_size(&self) -> Size {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Glyph counts are tiny; exact in f64."
        )]
        let count = self.glyph_count as f64;
        Size::new(
            count * self.glyph_dimension + (count + 1.0) * self.glyph_spacing,
            self.glyph_dimension,
        )
    }

    /// Bounds of glyph `index` (1-based) in control-local coordinates.
    ///
    /// Glyph 1 sits at `x = S`; glyphs 2..=N sit at `x = (i-1)·D + 2·S`.
    /// The asymmetry for glyph 1 is the historical layout of this control
    /// and is kept as-is; callers relying on visually even spacing should
    /// not "correct" it here without adjusting every consumer.
    pub fn glyph_bounds(&self, index: usize) -> Rect {
        let x = if index <= 1 {
            self.glyph_spacing
        } else {
            #[allow(
                clippy::cast_precision_loss,
                reason = "Glyph indices are tiny; exact in f64."
            )]
            let i = (index - 1) as f64;
            i * self.glyph_dimension + 2.0 * self.glyph_spacing
        };
        Rect::new(x, 0.0, x + self.glyph_dimension, self.glyph_dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Default metrics are the classic six-star constants.
    #[test]
    fn default_style_constants() {
        let style = ControlStyle::default();
        assert_eq!(style.glyph_count, 6);
        assert_eq!(style.glyph_dimension, 40.0);
        assert_eq!(style.glyph_spacing, 8.0);
        assert_eq!(style.font_size, 32.0);
        assert_eq!(style.glyph, '☆');
        assert_eq!(style.active_color, Rgba::BLACK);
        assert_eq!(style.inactive_color, Rgba::GRAY);
    }

    #[test]
    fn natural_size_formula() {
        let style = ControlStyle::default();
        // 6 * 40 + 7 * 8 = 296
        assert_eq!(style.natural_size(), Size::new(296.0, 40.0));
    }

    // Glyph 1 is offset by S, all others by 2S; this asymmetry is pinned on
    // purpose so a future layout "fix" shows up as a deliberate change.
    #[test]
    fn glyph_layout_preserves_first_glyph_offset() {
        let style = ControlStyle::default();
        assert_eq!(style.glyph_bounds(1), Rect::new(8.0, 0.0, 48.0, 40.0));
        assert_eq!(style.glyph_bounds(2), Rect::new(56.0, 0.0, 96.0, 40.0));
        assert_eq!(style.glyph_bounds(3), Rect::new(96.0, 0.0, 136.0, 40.0));
        assert_eq!(style.glyph_bounds(6), Rect::new(216.0, 0.0, 256.0, 40.0));
    }

    // Adjacent glyphs from index 2 on share edges; half-open containment in
    // kurbo means a point on the shared edge hits exactly one glyph.
    #[test]
    fn shared_edges_hit_one_glyph() {
        use kurbo::Point;
        let style = ControlStyle::default();
        let edge = Point::new(96.0, 20.0);
        assert!(!style.glyph_bounds(2).contains(edge));
        assert!(style.glyph_bounds(3).contains(edge));
    }
}
