// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum/maximum size constraints handed to the host layout pass.

use kurbo::Size;

use crate::ConfigError;

/// Minimum and maximum extents along each axis.
///
/// Maximums may be `f64::INFINITY` for an unbounded axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxConstraints {
    /// Minimum width.
    pub min_width: f64,
    /// Maximum width.
    pub max_width: f64,
    /// Minimum height.
    pub min_height: f64,
    /// Maximum height.
    pub max_height: f64,
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::BUTTON
    }
}

impl BoxConstraints {
    /// Default button constraints: at least 88×36, unbounded above.
    pub const BUTTON: Self = Self {
        min_width: 88.0,
        max_width: f64::INFINITY,
        min_height: 36.0,
        max_height: f64::INFINITY,
    };

    /// No minimum and no maximum.
    pub const UNCONSTRAINED: Self = Self {
        min_width: 0.0,
        max_width: f64::INFINITY,
        min_height: 0.0,
        max_height: f64::INFINITY,
    };

    /// Create constraints from explicit extents.
    pub const fn new(min_width: f64, max_width: f64, min_height: f64, max_height: f64) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints that only admit exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// The minimum size.
    pub const fn min(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// The maximum size.
    pub const fn max(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Clamp `size` into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }

    /// Returns `true` if `size` satisfies these constraints.
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        (self.min_width..=self.max_width).contains(&size.width)
            && (self.min_height..=self.max_height).contains(&size.height)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_axis("width", self.min_width, self.max_width)?;
        check_axis("height", self.min_height, self.max_height)
    }
}

fn check_axis(axis: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_nan() || min < 0.0 || min.is_infinite() || max.is_nan() || min > max {
        return Err(ConfigError::InvalidConstraints { axis, min, max });
    }
    Ok(())
}
