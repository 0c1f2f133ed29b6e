// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// A [`ButtonConfig`](crate::ButtonConfig) was rejected.
///
/// This is the only error a pressable surface produces. It is returned
/// synchronously from [`PressableSurface::new`](crate::PressableSurface::new)
/// and [`PressableSurface::update_config`](crate::PressableSurface::update_config);
/// once a surface exists every other operation is infallible.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An elevation was negative, NaN or infinite.
    #[error("`{field}` must be a finite, non-negative elevation, got {value}")]
    NegativeElevation {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A visual density component was outside `[-4, 4]`.
    #[error("visual density `{axis}` must be within [-4, 4], got {value}")]
    DensityOutOfRange {
        /// `"horizontal"` or `"vertical"`.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A fixed width or height was negative, NaN or infinite.
    #[error("`{field}` must be a finite, non-negative size, got {value}")]
    InvalidDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Box constraints had a negative or NaN minimum, or a minimum above the maximum.
    #[error("invalid {axis} constraints: min {min}, max {max}")]
    InvalidConstraints {
        /// `"width"` or `"height"`.
        axis: &'static str,
        /// The minimum extent.
        min: f64,
        /// The maximum extent.
        max: f64,
    },
    /// Padding or margin contained a NaN or infinite side.
    #[error("`{field}` insets must be finite")]
    NonFiniteInsets {
        /// Name of the offending field.
        field: &'static str,
    },
}
