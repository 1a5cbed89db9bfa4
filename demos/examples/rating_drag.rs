// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full drag interaction.
//!
//! This example walks one pointer interaction across the glyph row, leaves
//! the control's bounds mid-drag, and releases back inside, printing the
//! events each callback emits.
//!
//! Run:
//! - `cargo run -p stardial_demos --example rating_drag`

use kurbo::Point;
use stardial_control::control::RatingControl;
use stardial_control::style::ControlStyle;
use stardial_control::types::ControlEvent;

fn report(label: &str, events: &[ControlEvent]) {
    println!("{label}:");
    for ev in events {
        println!("  {ev:?}");
    }
}

fn main() {
    let mut control = RatingControl::new(ControlStyle::default());
    let glyph = |i: usize| control.glyphs()[i - 1].bounds().center();

    let (g2, g5, g6) = (glyph(2), glyph(5), glyph(6));
    report("begin at glyph 2", &control.begin_tracking(g2));
    report("drag to glyph 5", &control.continue_tracking(g5));

    // Wander below the control: the value freezes at 5.
    let outside = Point::new(g5.x, control.bounds().height() + 20.0);
    report("drag outside", &control.continue_tracking(outside));
    println!("  (value still {})", control.value());

    report("drag back to glyph 6", &control.continue_tracking(g6));
    report("release on glyph 6", &control.end_tracking(Some(g6)));

    // Step the flare like a 60fps host would.
    print!("flare scales:");
    while control.flare().is_some() {
        let tf = control.advance_flare(1.0 / 60.0);
        print!(" {:.3}", tf.as_coeffs()[0]);
    }
    println!();
    println!("final value: {}", control.value());
}
