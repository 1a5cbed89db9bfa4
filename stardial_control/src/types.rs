// Copyright 2025 the Stardial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event taxonomy: the discriminated control event and the subscription mask.
//!
//! ## Overview
//!
//! Every tracking callback on
//! [`RatingControl`](crate::control::RatingControl) returns the ordered
//! sequence of [`ControlEvent`]s it emitted. The taxonomy follows the
//! standard pointer-gesture phases, plus one semantic value-change event;
//! hosts that distinguish them (for example, playing feedback only on
//! [`TouchUpInside`](ControlEvent::TouchUpInside)) get the full detail, and
//! hosts that do not can filter with an [`EventMask`].

/// An event emitted by the control during a pointer interaction.
///
/// At most one [`ValueChanged`](Self::ValueChanged) is emitted per tracking
/// callback, and only on an actual change; the gesture-phase event for the
/// callback always follows it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ControlEvent {
    /// The value changed; carries the new value.
    ValueChanged(usize),
    /// Initial pointer contact.
    TouchDown,
    /// Pointer moved while remaining inside the control's bounds.
    TouchDragInside,
    /// Pointer moved outside the control's bounds; the value is untouched.
    TouchDragOutside,
    /// Pointer released inside the control's bounds.
    TouchUpInside,
    /// Pointer released outside the control's bounds, or the final pointer
    /// position was unavailable.
    TouchUpOutside,
    /// The interaction was cancelled by the host or system.
    TouchCancel,
}

bitflags::bitflags! {
    /// A set of event kinds a host subscribes to.
    ///
    /// This is the registration half of the observer pattern: a listener
    /// holds a mask and tests each emitted event with [`EventMask::accepts`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// [`ControlEvent::ValueChanged`].
        const VALUE_CHANGED      = 0b0000_0001;
        /// [`ControlEvent::TouchDown`].
        const TOUCH_DOWN         = 0b0000_0010;
        /// [`ControlEvent::TouchDragInside`].
        const TOUCH_DRAG_INSIDE  = 0b0000_0100;
        /// [`ControlEvent::TouchDragOutside`].
        const TOUCH_DRAG_OUTSIDE = 0b0000_1000;
        /// [`ControlEvent::TouchUpInside`].
        const TOUCH_UP_INSIDE    = 0b0001_0000;
        /// [`ControlEvent::TouchUpOutside`].
        const TOUCH_UP_OUTSIDE   = 0b0010_0000;
        /// [`ControlEvent::TouchCancel`].
        const TOUCH_CANCEL       = 0b0100_0000;
    }
}

impl Default for EventMask {
    fn default() -> Self {
        Self::all()
    }
}

impl EventMask {
    /// The mask bit corresponding to a single event.
    pub fn of(event: &ControlEvent) -> Self {
        match event {
            ControlEvent::ValueChanged(_) => Self::VALUE_CHANGED,
            ControlEvent::TouchDown => Self::TOUCH_DOWN,
            ControlEvent::TouchDragInside => Self::TOUCH_DRAG_INSIDE,
            ControlEvent::TouchDragOutside => Self::TOUCH_DRAG_OUTSIDE,
            ControlEvent::TouchUpInside => Self::TOUCH_UP_INSIDE,
            ControlEvent::TouchUpOutside => Self::TOUCH_UP_OUTSIDE,
            ControlEvent::TouchCancel => Self::TOUCH_CANCEL,
        }
    }

    /// True if this mask subscribes to `event`'s kind.
    pub fn accepts(&self, event: &ControlEvent) -> bool {
        self.contains(Self::of(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every event kind maps to exactly one mask bit.
    #[test]
    fn mask_bits_are_distinct() {
        let events = [
            ControlEvent::ValueChanged(3),
            ControlEvent::TouchDown,
            ControlEvent::TouchDragInside,
            ControlEvent::TouchDragOutside,
            ControlEvent::TouchUpInside,
            ControlEvent::TouchUpOutside,
            ControlEvent::TouchCancel,
        ];
        let mut seen = EventMask::empty();
        for ev in &events {
            let bit = EventMask::of(ev);
            assert_eq!(bit.bits().count_ones(), 1, "one bit per kind");
            assert!(!seen.intersects(bit), "bits must not collide");
            seen |= bit;
        }
        assert_eq!(seen, EventMask::all());
    }

    #[test]
    fn default_mask_accepts_everything() {
        let mask = EventMask::default();
        assert!(mask.accepts(&ControlEvent::ValueChanged(1)));
        assert!(mask.accepts(&ControlEvent::TouchCancel));
    }

    #[test]
    fn narrow_mask_filters() {
        let mask = EventMask::VALUE_CHANGED | EventMask::TOUCH_UP_INSIDE;
        assert!(mask.accepts(&ControlEvent::ValueChanged(5)));
        assert!(mask.accepts(&ControlEvent::TouchUpInside));
        assert!(!mask.accepts(&ControlEvent::TouchDown));
        assert!(!mask.accepts(&ControlEvent::TouchDragOutside));
    }
}
