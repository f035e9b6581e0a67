// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider state: orientation, value, and handle press/anchor state.
//!
//! ## Usage
//!
//! 1) Each layout pass, report the handle's measured rect with
//!    [`SliderState::on_handle_measured`] (or [`SliderState::apply_layout`]).
//! 2) Place the handle at [`SliderState::handle_position`].
//! 3) Feed pointer input through [`SliderState::on_drag_start`],
//!    [`SliderState::on_drag_move`] and [`SliderState::on_drag_end`].
//!
//! Every transition returns the [`SliderChange`] it caused, or `None` when
//! nothing observable changed.

use kurbo::{Point, Rect};

use crate::Axis;
use crate::geometry::{clamp_unit, handle_position, handle_rect, value_from_drag};
use crate::measure::SliderLayout;

/// Whether the handle is currently pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SliderPhase {
    /// Not pressed.
    #[default]
    Idle,
    /// Pressed; drag moves update the value.
    Dragging,
}

/// An observable change produced by a [`SliderState`] transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderChange {
    /// The handle was pressed.
    Pressed,
    /// The handle was released. The value is committed as-is.
    Released,
    /// The value changed.
    Value {
        /// Value before the change.
        old: f64,
        /// Value after the change, always in `[0, 1]`.
        new: f64,
    },
    /// The orientation changed. The value is preserved.
    Axis {
        /// Previous orientation.
        old: Axis,
        /// New orientation.
        new: Axis,
    },
    /// The handle was measured at a different rect.
    Measured {
        /// Previous measurement, if any.
        old: Option<Rect>,
        /// New measurement.
        new: Rect,
    },
}

/// State of a single slider control.
///
/// The value is kept in `[0, 1]` by every write path.
#[derive(Clone, Debug, Default)]
pub struct SliderState {
    axis: Axis,
    value: f64,
    handle_anchor: Option<Rect>,
    phase: SliderPhase,
    drag_axis: Option<Axis>,
    revision: u64,
}

impl SliderState {
    /// Creates an idle slider with the given orientation and initial value.
    ///
    /// `value` is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(axis: Axis, value: f64) -> Self {
        Self {
            axis,
            value: clamp_unit(value),
            ..Self::default()
        }
    }

    /// Returns the orientation.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the current value in `[0, 1]`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the press phase.
    #[must_use]
    pub fn phase(&self) -> SliderPhase {
        self.phase
    }

    /// Returns `true` while the handle is pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.phase == SliderPhase::Dragging
    }

    /// Returns the last measured handle rect, if any.
    #[must_use]
    pub fn handle_anchor(&self) -> Option<Rect> {
        self.handle_anchor
    }

    /// Returns the last measured handle rect, or [`Rect::ZERO`] if unmeasured.
    #[must_use]
    pub fn handle_frame(&self) -> Rect {
        self.handle_anchor.unwrap_or(Rect::ZERO)
    }

    /// Monotonic counter bumped on every observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets the value, clamping into `[0, 1]`.
    pub fn set_value(&mut self, value: f64) -> Option<SliderChange> {
        let new = clamp_unit(value);
        let old = self.value;
        if old == new {
            return None;
        }
        self.value = new;
        self.bump();
        Some(SliderChange::Value { old, new })
    }

    /// Changes the orientation.
    ///
    /// The numeric value is preserved, so the rendered position moves. A drag
    /// in progress keeps mapping along the axis it started with.
    pub fn set_axis(&mut self, axis: Axis) -> Option<SliderChange> {
        let old = self.axis;
        if old == axis {
            return None;
        }
        self.axis = axis;
        self.bump();
        Some(SliderChange::Axis { old, new: axis })
    }

    /// Switches to the perpendicular orientation.
    pub fn toggle_axis(&mut self) -> Option<SliderChange> {
        self.set_axis(self.axis.cross())
    }

    /// Records the handle's measured rect for this layout pass.
    ///
    /// Valid in either phase. Re-measuring the same rect is a no-op.
    pub fn on_handle_measured(&mut self, rect: Rect) -> Option<SliderChange> {
        let old = self.handle_anchor;
        if old == Some(rect) {
            return None;
        }
        self.handle_anchor = Some(rect);
        self.bump();
        Some(SliderChange::Measured { old, new: rect })
    }

    /// Records the handle rect from a consistent layout pair.
    pub fn apply_layout(&mut self, layout: &SliderLayout) -> Option<SliderChange> {
        self.on_handle_measured(layout.handle)
    }

    /// Presses the handle. The value is unchanged.
    ///
    /// The current axis is latched for the rest of the drag.
    pub fn on_drag_start(&mut self) -> Option<SliderChange> {
        if self.is_pressed() {
            return None;
        }
        self.phase = SliderPhase::Dragging;
        self.drag_axis = Some(self.axis);
        self.bump();
        Some(SliderChange::Pressed)
    }

    /// Updates the value from a drag location in track-local coordinates.
    ///
    /// Ignored while idle or before the handle has been measured. The drag
    /// is interpreted along the axis latched by [`Self::on_drag_start`].
    pub fn on_drag_move(&mut self, drag: Point, track: Rect) -> Option<SliderChange> {
        let axis = self.drag_axis?;
        let handle = self.handle_anchor?;
        self.set_value(value_from_drag(drag, track, handle, axis))
    }

    /// Releases the handle, committing the last computed value.
    pub fn on_drag_end(&mut self) -> Option<SliderChange> {
        if !self.is_pressed() {
            return None;
        }
        self.phase = SliderPhase::Idle;
        self.drag_axis = None;
        self.bump();
        Some(SliderChange::Released)
    }

    /// Center point for the handle inside `track`.
    ///
    /// Returns [`Point::ZERO`] until the handle has been measured; callers
    /// should not render the handle before then.
    #[must_use]
    pub fn handle_position(&self, track: Rect) -> Point {
        match self.handle_anchor {
            Some(handle) => handle_position(self.axis, self.value, track, handle),
            None => Point::ZERO,
        }
    }

    /// Rect for the handle inside `track`, or `None` until measured.
    #[must_use]
    pub fn handle_rect(&self, track: Rect) -> Option<Rect> {
        self.handle_anchor
            .map(|handle| handle_rect(self.axis, self.value, track, handle))
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SliderDebugInfo {
        SliderDebugInfo {
            axis: self.axis,
            value: self.value,
            phase: self.phase,
            drag_axis: self.drag_axis,
            handle_anchor: self.handle_anchor,
            revision: self.revision,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Debug snapshot of a [`SliderState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderDebugInfo {
    /// Current orientation.
    pub axis: Axis,
    /// Current value in `[0, 1]`.
    pub value: f64,
    /// Current press phase.
    pub phase: SliderPhase,
    /// Axis latched for the drag in progress, if any.
    pub drag_axis: Option<Axis>,
    /// Last measured handle rect.
    pub handle_anchor: Option<Rect>,
    /// Revision counter at snapshot time.
    pub revision: u64,
}
