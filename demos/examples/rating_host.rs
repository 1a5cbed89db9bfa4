// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host screen subscribing to the control.
//!
//! The host registers for value changes with an [`EventMask`], renders a
//! title string from the value (with the singular form for one star), and
//! steps the flare after a successful tap — the screen-level half of the
//! classic rating widget.
//!
//! Run:
//! - `cargo run -p stardial_demos --example rating_host`

use stardial_control::control::RatingControl;
use stardial_control::style::ControlStyle;
use stardial_control::types::{ControlEvent, EventMask};

/// The parent screen: owns a title and listens for value changes only.
struct HostScreen {
    title: String,
    subscription: EventMask,
}

impl HostScreen {
    fn new() -> Self {
        Self {
            title: String::new(),
            subscription: EventMask::VALUE_CHANGED,
        }
    }

    /// Deliver one emitted event; events outside the subscription are
    /// dropped here, the way a toolkit's action dispatch would.
    fn notify(&mut self, event: &ControlEvent) {
        if !self.subscription.accepts(event) {
            return;
        }
        if let ControlEvent::ValueChanged(value) = event {
            let stars = match value {
                1 => "1 star".to_string(),
                n => format!("{n} stars"),
            };
            self.title = format!("User Rating: {stars}");
            println!("title -> {}", self.title);
        }
    }
}

fn tap(control: &mut RatingControl, host: &mut HostScreen, index: usize) {
    println!("tap glyph {index}");
    let at = control.glyphs()[index - 1].bounds().center();
    for ev in control
        .begin_tracking(at)
        .into_iter()
        .chain(control.end_tracking(Some(at)))
    {
        host.notify(&ev);
    }
    // Play the feedback out before the next interaction.
    while control.flare().is_some() {
        let _ = control.advance_flare(1.0 / 60.0);
    }
}

fn main() {
    let mut control = RatingControl::new(ControlStyle::default());
    let mut host = HostScreen::new();

    tap(&mut control, &mut host, 4);
    tap(&mut control, &mut host, 4); // no change, no title update
    tap(&mut control, &mut host, 1);
    tap(&mut control, &mut host, 6);
}
