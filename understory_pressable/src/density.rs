// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual density and minimum tap-target sizing.
//!
//! Density is a per-axis compactness step in `[-4, 4]`. Each step adds or
//! removes 4 logical pixels of padding on both sides of that axis, and
//! shifts minimum sizes by the same amount.

use kurbo::{Insets, Size, Vec2};

use crate::{BoxConstraints, ConfigError};

/// Side length of the smallest interactive region a padded tap target reserves.
pub const MIN_INTERACTIVE_DIMENSION: f64 = 48.0;

/// Per-axis compactness of a component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VisualDensity {
    /// Horizontal density step; negative is more compact.
    pub horizontal: f64,
    /// Vertical density step; negative is more compact.
    pub vertical: f64,
}

impl VisualDensity {
    /// Lowest accepted density step.
    pub const MINIMUM_DENSITY: f64 = -4.0;
    /// Highest accepted density step.
    pub const MAXIMUM_DENSITY: f64 = 4.0;

    /// The default density.
    pub const STANDARD: Self = Self::new(0.0, 0.0);
    /// Slightly more compact than [`STANDARD`](Self::STANDARD).
    pub const COMFORTABLE: Self = Self::new(-1.0, -1.0);
    /// The most compact preset.
    pub const COMPACT: Self = Self::new(-2.0, -2.0);

    /// Create a density from horizontal and vertical steps.
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The size delta implied by this density: 4 logical pixels per step.
    pub fn base_size_adjustment(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical) * 4.0
    }

    /// Padding to add on each side: `dx` left and right, `dy` top and bottom.
    pub fn padding_adjustment(&self) -> Insets {
        let delta = self.base_size_adjustment();
        Insets::new(delta.x, delta.y, delta.x, delta.y)
    }

    /// Shift the minimums of `constraints` by the density delta.
    ///
    /// Each minimum is clamped to `[0, max]` of its axis; maximums are kept.
    pub fn effective_constraints(&self, constraints: BoxConstraints) -> BoxConstraints {
        let delta = self.base_size_adjustment();
        BoxConstraints {
            min_width: (constraints.min_width + delta.x)
                .max(0.0)
                .min(constraints.max_width),
            min_height: (constraints.min_height + delta.y)
                .max(0.0)
                .min(constraints.max_height),
            ..constraints
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_step("horizontal", self.horizontal)?;
        check_step("vertical", self.vertical)
    }
}

fn check_step(axis: &'static str, value: f64) -> Result<(), ConfigError> {
    if (VisualDensity::MINIMUM_DENSITY..=VisualDensity::MAXIMUM_DENSITY).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::DensityOutOfRange { axis, value })
    }
}

/// How much room a component reserves for touch input beyond its visual bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TapTargetSize {
    /// Reserve at least [`MIN_INTERACTIVE_DIMENSION`] on each axis, adjusted by density.
    #[default]
    Padded,
    /// Reserve only the visual bounds.
    ShrinkWrap,
}

impl TapTargetSize {
    /// Minimum hit-area size for this policy under `density`.
    pub fn min_size(self, density: VisualDensity) -> Size {
        match self {
            Self::Padded => {
                let delta = density.base_size_adjustment();
                Size::new(
                    (MIN_INTERACTIVE_DIMENSION + delta.x).max(0.0),
                    (MIN_INTERACTIVE_DIMENSION + delta.y).max(0.0),
                )
            }
            Self::ShrinkWrap => Size::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_density_is_neutral() {
        let d = VisualDensity::STANDARD;
        assert_eq!(d.base_size_adjustment(), Vec2::ZERO);
        assert_eq!(d.padding_adjustment(), Insets::ZERO);
        assert_eq!(
            d.effective_constraints(BoxConstraints::BUTTON),
            BoxConstraints::BUTTON
        );
    }

    #[test]
    fn compact_shrinks_minimums() {
        let c = VisualDensity::COMPACT.effective_constraints(BoxConstraints::BUTTON);
        assert_eq!(c.min_width, 80.0);
        assert_eq!(c.min_height, 28.0);
        assert!(c.max_width.is_infinite());
    }

    #[test]
    fn effective_minimums_clamp_to_range() {
        let tight = BoxConstraints::new(2.0, 10.0, 9.0, 10.0);

        let shrunk = VisualDensity::new(-4.0, 0.0).effective_constraints(tight);
        assert_eq!(shrunk.min_width, 0.0);

        let grown = VisualDensity::new(0.0, 4.0).effective_constraints(tight);
        assert_eq!(grown.min_height, 10.0);
    }

    #[test]
    fn padding_adjustment_uses_both_sides() {
        let insets = VisualDensity::new(1.0, -2.0).padding_adjustment();
        assert_eq!(insets, Insets::new(4.0, -8.0, 4.0, -8.0));
    }

    #[test]
    fn tap_target_follows_density() {
        assert_eq!(
            TapTargetSize::Padded.min_size(VisualDensity::STANDARD),
            Size::new(48.0, 48.0)
        );
        assert_eq!(
            TapTargetSize::Padded.min_size(VisualDensity::COMPACT),
            Size::new(40.0, 40.0)
        );
        assert_eq!(
            TapTargetSize::ShrinkWrap.min_size(VisualDensity::COMPACT),
            Size::ZERO
        );
    }

    #[test]
    fn density_range_is_inclusive() {
        assert!(VisualDensity::new(-4.0, 4.0).validate().is_ok());
        assert_eq!(
            VisualDensity::new(0.0, 4.5).validate(),
            Err(ConfigError::DensityOutOfRange {
                axis: "vertical",
                value: 4.5
            })
        );
        assert!(VisualDensity::new(f64::NAN, 0.0).validate().is_err());
    }
}
