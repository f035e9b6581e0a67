// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Slider: headless slider geometry and interaction state.
//!
//! This crate contains the part of a slider control that has to be exactly
//! right regardless of the rendering technology:
//! - Mapping a normalized value in `[0, 1]` to a handle position inside a track.
//! - Mapping a drag location back to a value.
//! - Tracking whether the handle is pressed and what size it was last measured at.
//!
//! It does **not** render, recognize gestures, or walk a view tree. Callers are
//! expected to:
//! - Measure the track and handle rects each layout pass (see [`MeasuredRects`]).
//! - Place the handle at the position returned by [`SliderState::handle_position`].
//! - Forward press, move, and release events to [`SliderState`].
//!
//! ## Geometry
//!
//! The handle never overshoots the track. At value `0` its leading edge is
//! flush with the start of the track; at value `1` its trailing edge is flush
//! with the end. Horizontal sliders grow to the right. Vertical sliders grow
//! **upward**, which is inverted relative to the y-down coordinate space this
//! crate assumes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{Axis, SliderChange, SliderState};
//!
//! let track = Rect::new(0.0, 0.0, 200.0, 20.0);
//! let mut slider = SliderState::new(Axis::Horizontal, 0.5);
//!
//! // Nothing to place until the handle has been measured.
//! assert_eq!(slider.handle_position(track), Point::ZERO);
//!
//! slider.on_handle_measured(Rect::new(0.0, 0.0, 40.0, 40.0));
//! assert_eq!(slider.handle_position(track), Point::new(100.0, 10.0));
//!
//! // Drag the handle; points are in track-local coordinates.
//! slider.on_drag_start();
//! let change = slider.on_drag_move(Point::new(150.0, 10.0), track);
//! assert_eq!(change, Some(SliderChange::Value { old: 0.5, new: 0.8125 }));
//! slider.on_drag_end();
//! assert_eq!(slider.value(), 0.8125);
//! ```
//!
//! ## Layout passes
//!
//! Position and value computations must use a track and handle measured in the
//! same layout pass. [`MeasuredRects`] enforces this by only returning a
//! [`SliderLayout`] when both parts were recorded since the last
//! [`MeasuredRects::begin_pass`]:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{Axis, MeasuredRects, SliderPart, SliderState};
//!
//! let mut rects = MeasuredRects::new();
//! let mut slider = SliderState::new(Axis::Vertical, 0.25);
//!
//! rects.begin_pass();
//! rects.record(SliderPart::Track, Rect::new(0.0, 0.0, 20.0, 200.0));
//! rects.record(SliderPart::Handle, Rect::new(0.0, 0.0, 40.0, 40.0));
//!
//! if let Some(layout) = rects.layout() {
//!     slider.apply_layout(&layout);
//!     assert_eq!(slider.handle_position(layout.track), Point::new(10.0, 140.0));
//! }
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod geometry;
mod measure;
mod state;

pub use axis::Axis;
pub use geometry::{clamp, clamp_unit, handle_position, handle_rect, travel, value_from_drag};
pub use measure::{MeasuredRects, SliderLayout, SliderPart};
pub use state::{SliderChange, SliderDebugInfo, SliderPhase, SliderState};
