// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating control basics.
//!
//! This minimal example builds a control with the default style, taps the
//! fourth glyph, and prints the emitted events and resulting glyph states.
//!
//! Run:
//! - `cargo run -p stardial_demos --example rating_basics`

use stardial_control::control::RatingControl;
use stardial_control::style::ControlStyle;

fn main() {
    let mut control = RatingControl::new(ControlStyle::default());
    println!(
        "natural size: {:?}, value: {}",
        control.natural_size(),
        control.value()
    );

    // Tap glyph 4: press and release at its center.
    let center = control.glyphs()[3].bounds().center();
    let down = control.begin_tracking(center);
    let up = control.end_tracking(Some(center));

    println!("== Events ==");
    for ev in down.iter().chain(up.iter()) {
        println!("  {ev:?}");
    }

    println!("== Glyphs ==");
    for glyph in control.glyphs() {
        let color = control.glyph_color(glyph);
        println!(
            "  {} {} at {:?}  color {:?}",
            control.style().glyph,
            if glyph.is_active() { "active  " } else { "inactive" },
            glyph.bounds(),
            color,
        );
    }
}
