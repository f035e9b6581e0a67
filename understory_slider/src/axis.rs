// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// The axis a slider's handle travels along.
///
/// Horizontal sliders grow left to right. Vertical sliders grow bottom to top,
/// which is inverted relative to a y-down coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Value `0` at the left edge, value `1` at the right edge.
    #[default]
    Horizontal,
    /// Value `0` at the bottom edge, value `1` at the top edge.
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the extent of `rect` along this axis.
    #[must_use]
    pub fn rect_extent(self, rect: Rect) -> f64 {
        self.extent(rect.size())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::Axis;

    #[test]
    fn cross_is_an_involution() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Axis::Vertical.cross().cross(), Axis::Vertical);
    }

    #[test]
    fn extents_pick_the_matching_dimension() {
        let size = Size::new(200.0, 20.0);
        assert_eq!(Axis::Horizontal.extent(size), 200.0);
        assert_eq!(Axis::Vertical.extent(size), 20.0);

        let rect = Rect::new(10.0, 5.0, 50.0, 105.0);
        assert_eq!(Axis::Horizontal.rect_extent(rect), 40.0);
        assert_eq!(Axis::Vertical.rect_extent(rect), 100.0);
    }

    #[test]
    fn default_is_horizontal() {
        assert_eq!(Axis::default(), Axis::Horizontal);
    }
}
