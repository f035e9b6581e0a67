// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value/position mapping between a normalized slider value and handle placement.
//!
//! Both directions account for the handle's extent along the primary axis so
//! that the handle never overshoots the track: at value `0` the handle's
//! leading edge is flush with the track start, at value `1` its trailing edge
//! is flush with the track end.
//!
//! Positions are handle *centers*. The primary coordinate is relative to the
//! track's local origin; the cross coordinate is the track's midpoint.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_slider::{Axis, handle_position, value_from_drag};
//!
//! let track = Rect::new(0.0, 0.0, 200.0, 20.0);
//! let handle = Rect::new(0.0, 0.0, 40.0, 40.0);
//!
//! let center = handle_position(Axis::Horizontal, 0.5, track, handle);
//! assert_eq!(center, Point::new(100.0, 10.0));
//!
//! let value = value_from_drag(Point::new(150.0, 10.0), track, handle, Axis::Horizontal);
//! assert_eq!(value, 0.8125);
//! ```

use kurbo::{Point, Rect};

use crate::Axis;

/// Clamps `x` into `lo..=hi`.
///
/// Unlike [`f64::clamp`] this is generic over [`PartialOrd`] and never panics
/// on inverted bounds; `lo` wins when `lo > hi`. Unordered inputs (NaN) are
/// returned unchanged.
#[must_use]
pub fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        if hi < lo { lo } else { hi }
    } else {
        x
    }
}

/// Clamps a slider value into `[0, 1]`.
///
/// NaN maps to `0`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        clamp(value, 0.0, 1.0)
    }
}

/// Returns the distance the handle center can travel along `axis`.
///
/// This is the track extent minus the handle extent. It is zero when the
/// handle exactly fills the track and negative when the handle is larger.
#[must_use]
pub fn travel(axis: Axis, track: Rect, handle: Rect) -> f64 {
    axis.rect_extent(track) - axis.rect_extent(handle)
}

/// Computes the center of the handle for `value` inside `track`.
///
/// The handle is centered on the track along the cross axis. Along a vertical
/// primary axis the mapping is inverted so that higher values sit toward the
/// top of a y-down coordinate space.
///
/// `value` is used as given; callers holding a [`SliderState`](crate::SliderState)
/// always pass a clamped value.
#[must_use]
pub fn handle_position(axis: Axis, value: f64, track: Rect, handle: Rect) -> Point {
    let center = track.center();
    match axis {
        Axis::Horizontal => {
            let half = handle.width() / 2.0;
            Point::new(value * travel(axis, track, handle) + half, center.y)
        }
        Axis::Vertical => {
            let half = handle.height() / 2.0;
            Point::new(center.x, (1.0 - value) * travel(axis, track, handle) + half)
        }
    }
}

/// Returns the handle's rect when centered on [`handle_position`].
///
/// The handle's measured size is preserved.
#[must_use]
pub fn handle_rect(axis: Axis, value: f64, track: Rect, handle: Rect) -> Rect {
    Rect::from_center_size(handle_position(axis, value, track, handle), handle.size())
}

/// Maps a drag location to a slider value in `[0, 1]`.
///
/// `drag` is expressed in the track's local coordinate space. Drags within
/// half a handle of the track start snap to `0`; the far end is only bounded
/// by the final clamp. When the handle fills or exceeds the track there is no
/// travel to divide by and the result is `0`.
#[must_use]
pub fn value_from_drag(drag: Point, track: Rect, handle: Rect, axis: Axis) -> f64 {
    let handle_extent = axis.rect_extent(handle);
    let half_handle = handle_extent / 2.0;
    let along = match axis {
        Axis::Horizontal => drag.x,
        Axis::Vertical => track.height() - drag.y,
    };
    let drag_position = if along <= half_handle {
        0.0
    } else {
        along - half_handle
    };
    let range = axis.rect_extent(track) - handle_extent;
    if range <= 0.0 {
        return 0.0;
    }
    clamp_unit(drag_position / range)
}
