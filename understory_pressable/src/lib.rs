// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pressable --heading-base-level=0

//! Understory Pressable: a headless, customizable pressable surface.
//!
//! This crate models a button-like surface with configurable shape,
//! elevation, colors and spacing that reacts to hover, focus, press and
//! disabled states, and forwards taps and long presses to caller callbacks.
//!
//! It does not paint, lay out or recognize gestures itself. Instead:
//!
//! - The host reports hover/focus/press transitions (directly, or as
//!   [`PressEvent`](understory_interaction::press::PressEvent)s from a
//!   `PressGesture` recognizer) to a [`PressableSurface`].
//! - The surface updates its [`InteractionStates`] and derives an effective
//!   style: elevation, padding, constraints, shape and cursor.
//! - [`PressableSurface::render`] returns a [`PressableTree`] describing what
//!   to hand to the host's surface renderer, ink (ripple/highlight) region and
//!   accessibility wrapper.
//!
//! ## Elevation
//!
//! Elevation is picked by a fixed precedence over the active states:
//!
//! **disabled → pressed → hovered → focused → resting**
//!
//! ```rust
//! use understory_pressable::{ButtonConfig, PressableSurface};
//!
//! let config: ButtonConfig = ButtonConfig::new().on_press(|| {});
//! let mut surface = PressableSurface::new(config).unwrap();
//!
//! surface.set_hovered(true);
//! assert_eq!(surface.effective_elevation(), 4.0);
//!
//! surface.set_pressed(true);
//! assert_eq!(surface.effective_elevation(), 8.0);
//!
//! // Removing every press handler disables the surface and ends the press.
//! let mut disabled = surface.config().clone();
//! disabled.on_press = None;
//! surface.update_config(disabled).unwrap();
//! assert!(!surface.states().is_pressed());
//! assert_eq!(surface.effective_elevation(), 0.0);
//! ```
//!
//! ## Driving a surface from pointer input
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_interaction::press::PressGesture;
//! use understory_pressable::{ButtonConfig, Feedback, PressableSurface};
//!
//! let taps = Rc::new(Cell::new(0));
//! let counter = taps.clone();
//! let config: ButtonConfig = ButtonConfig::new().on_press(move || counter.set(counter.get() + 1));
//! let mut surface = PressableSurface::new(config).unwrap();
//! let mut press = PressGesture::new();
//!
//! for event in press.on_down(Point::new(10.0, 10.0), 0) {
//!     surface.handle_press_event(event);
//! }
//! assert_eq!(surface.render().surface.elevation, 8.0);
//!
//! let mut feedback = None;
//! for event in press.on_up(Point::new(10.0, 10.0), 40) {
//!     feedback = feedback.or(surface.handle_press_event(event).feedback());
//! }
//! assert_eq!(taps.get(), 1);
//! assert_eq!(feedback, Some(Feedback::Tap));
//! assert_eq!(surface.render().surface.elevation, 0.0);
//! ```
//!
//! ## Errors
//!
//! Construction and configuration updates validate the config and fail with
//! [`ConfigError`] on negative elevations, out-of-range density, invalid
//! sizes or constraints. Every other operation is infallible.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature instead
//! of the default `std` feature for targets without the standard library.

#![no_std]

extern crate alloc;

mod config;
mod constraints;
mod density;
mod error;
mod property;
mod shape;
mod surface;
mod tree;

pub use config::{
    ButtonConfig, Callback, DEFAULT_ANIMATION_DURATION, FocusNodeId, HighlightCallback,
    clickable_cursor,
};
pub use constraints::BoxConstraints;
pub use density::{MIN_INTERACTIVE_DIMENSION, TapTargetSize, VisualDensity};
pub use error::ConfigError;
pub use property::{StateProperty, StateRules};
pub use shape::{Clip, ShapeBorder, ShapeOutline};
pub use surface::{Feedback, GestureResponse, PressableSurface};
pub use tree::{InkNode, PressableTree, SemanticsNode, SurfaceKind, SurfaceNode};

pub use understory_interaction::states::{InteractionState, InteractionStates};
