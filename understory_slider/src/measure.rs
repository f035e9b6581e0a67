// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured-rectangle registry for slider parts.
//!
//! The host's layout system records the track and handle rects once per layout
//! pass. Reads are synchronous snapshots; nothing here owns the host's
//! elements.
//!
//! Geometry must always be computed from a `(track, handle)` pair measured in
//! the same pass. [`MeasuredRects::layout`] only yields a [`SliderLayout`] once
//! both parts have been recorded since the last [`MeasuredRects::begin_pass`].
//!
//! ```
//! use kurbo::Rect;
//! use understory_slider::{MeasuredRects, SliderPart};
//!
//! let mut rects = MeasuredRects::new();
//! rects.begin_pass();
//! rects.record(SliderPart::Track, Rect::new(0.0, 0.0, 200.0, 20.0));
//! assert!(rects.layout().is_none());
//!
//! rects.record(SliderPart::Handle, Rect::new(0.0, 0.0, 40.0, 40.0));
//! let layout = rects.layout().unwrap();
//! assert_eq!(layout.track.width(), 200.0);
//! ```

use kurbo::{Point, Rect};

use crate::Axis;
use crate::geometry::{handle_position, handle_rect, travel, value_from_drag};

/// Logical slider element whose bounds the host measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderPart {
    /// The region the handle travels within.
    Track,
    /// The draggable indicator.
    Handle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Measured {
    rect: Rect,
    pass: u64,
}

/// Last-known rects for the track and handle, tagged with the pass that
/// recorded them.
#[derive(Clone, Debug, Default)]
pub struct MeasuredRects {
    pass: u64,
    track: Option<Measured>,
    handle: Option<Measured>,
}

impl MeasuredRects {
    /// Creates an empty registry at pass `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current layout pass.
    #[must_use]
    pub fn pass(&self) -> u64 {
        self.pass
    }

    /// Starts a new layout pass and returns its number.
    ///
    /// Previously recorded rects stay readable through [`Self::get`] but no
    /// longer pair up in [`Self::layout`].
    pub fn begin_pass(&mut self) -> u64 {
        self.pass = self.pass.wrapping_add(1);
        self.pass
    }

    /// Records `rect` for `part` in the current pass.
    pub fn record(&mut self, part: SliderPart, rect: Rect) {
        let measured = Some(Measured {
            rect,
            pass: self.pass,
        });
        match part {
            SliderPart::Track => self.track = measured,
            SliderPart::Handle => self.handle = measured,
        }
    }

    /// Returns the last-known rect for `part`, which may be from an earlier pass.
    #[must_use]
    pub fn get(&self, part: SliderPart) -> Option<Rect> {
        self.slot(part).map(|m| m.rect)
    }

    /// Returns `true` if `part` was recorded during the current pass.
    #[must_use]
    pub fn is_current(&self, part: SliderPart) -> bool {
        self.slot(part).is_some_and(|m| m.pass == self.pass)
    }

    /// Returns the track/handle pair if both were recorded this pass.
    #[must_use]
    pub fn layout(&self) -> Option<SliderLayout> {
        match (self.track, self.handle) {
            (Some(track), Some(handle)) if track.pass == self.pass && handle.pass == self.pass => {
                Some(SliderLayout {
                    track: track.rect,
                    handle: handle.rect,
                })
            }
            _ => None,
        }
    }

    /// Forgets all recorded rects. The pass counter is kept.
    pub fn clear(&mut self) {
        self.track = None;
        self.handle = None;
    }

    fn slot(&self, part: SliderPart) -> Option<&Measured> {
        match part {
            SliderPart::Track => self.track.as_ref(),
            SliderPart::Handle => self.handle.as_ref(),
        }
    }
}

/// A consistent `(track, handle)` pair from a single layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderLayout {
    /// Bounds of the track.
    pub track: Rect,
    /// Bounds of the handle; only its size is used.
    pub handle: Rect,
}

impl SliderLayout {
    /// Creates a layout from explicitly measured rects.
    #[must_use]
    pub fn new(track: Rect, handle: Rect) -> Self {
        Self { track, handle }
    }

    /// See [`handle_position`].
    #[must_use]
    pub fn handle_position(&self, axis: Axis, value: f64) -> Point {
        handle_position(axis, value, self.track, self.handle)
    }

    /// See [`handle_rect`].
    #[must_use]
    pub fn handle_rect(&self, axis: Axis, value: f64) -> Rect {
        handle_rect(axis, value, self.track, self.handle)
    }

    /// See [`value_from_drag`].
    #[must_use]
    pub fn value_at(&self, drag: Point, axis: Axis) -> f64 {
        value_from_drag(drag, self.track, self.handle, axis)
    }

    /// See [`travel`].
    #[must_use]
    pub fn travel(&self, axis: Axis) -> f64 {
        travel(axis, self.track, self.handle)
    }
}
