// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface outlines used for clipping, shadow casting and hit testing.

use kurbo::{Circle, Point, Rect, RoundedRect, RoundedRectRadii, Shape};

/// The geometric outline of a surface, independent of its size.
///
/// Resolve it against concrete bounds with [`ShapeBorder::outline`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeBorder {
    /// Sharp corners.
    Rectangle,
    /// Corners rounded by the given radii.
    RoundedRectangle(RoundedRectRadii),
    /// Fully rounded short ends (pill shape).
    Stadium,
    /// The largest circle centered in the bounds.
    Circle,
}

impl Default for ShapeBorder {
    fn default() -> Self {
        Self::RoundedRectangle(RoundedRectRadii::from_single_radius(0.0))
    }
}

impl ShapeBorder {
    /// A rounded rectangle with the same radius on every corner.
    pub fn rounded(radius: f64) -> Self {
        Self::RoundedRectangle(RoundedRectRadii::from_single_radius(radius))
    }

    /// Resolve this shape against `bounds`.
    pub fn outline(&self, bounds: Rect) -> ShapeOutline {
        let bounds = bounds.abs();
        match *self {
            Self::Rectangle => ShapeOutline::Rect(bounds),
            Self::RoundedRectangle(radii) => {
                ShapeOutline::RoundedRect(RoundedRect::from_rect(bounds, radii))
            }
            Self::Stadium => {
                let radius = bounds.width().min(bounds.height()) / 2.0;
                ShapeOutline::RoundedRect(RoundedRect::from_rect(bounds, radius))
            }
            Self::Circle => {
                let radius = bounds.width().min(bounds.height()) / 2.0;
                ShapeOutline::Circle(Circle::new(bounds.center(), radius))
            }
        }
    }
}

/// A [`ShapeBorder`] resolved against concrete bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeOutline {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// A circle.
    Circle(Circle),
}

impl ShapeOutline {
    /// Returns `true` if `point` lies inside the outline.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Rect(rect) => rect.contains(point),
            Self::RoundedRect(rect) => rect.contains(point),
            Self::Circle(circle) => circle.contains(point),
        }
    }

    /// The smallest rectangle enclosing the outline.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::RoundedRect(rect) => rect.rect(),
            Self::Circle(circle) => circle.bounding_box(),
        }
    }
}

/// How a surface clips its content to its shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Clip {
    /// No clipping.
    #[default]
    None,
    /// Clip without anti-aliasing.
    HardEdge,
    /// Clip with anti-aliasing.
    AntiAlias,
    /// Clip with anti-aliasing into an offscreen layer.
    AntiAliasWithSaveLayer,
}
