// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The description a pressable surface hands to the host each render.
//!
//! The host nests its primitives in field order: semantics wrapper, outer
//! sizing (margin, fixed size, tap target, constraints), the elevated
//! surface, the ink region, then padding around the child.

use core::time::Duration;

use cursor_icon::CursorIcon;
use kurbo::{Insets, Size};
use peniko::Color;

use crate::{BoxConstraints, Clip, FocusNodeId, ShapeBorder};

/// Accessibility wrapper settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SemanticsNode {
    /// Start a new semantics container.
    pub container: bool,
    /// Expose the node with the button role.
    pub button: bool,
    /// Whether the button accepts input.
    pub enabled: bool,
}

/// How the host paints the surface material.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// A filled, shadow-casting button surface.
    Button,
    /// No fill; only ink and content are drawn.
    Transparency,
}

/// Elevated, shaped, colored surface settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceNode {
    /// Fill behavior.
    pub kind: SurfaceKind,
    /// Effective elevation for the current state.
    pub elevation: f64,
    /// Effective outline for the current state.
    pub shape: ShapeBorder,
    /// Fill color, if any.
    pub color: Option<Color>,
    /// Content clipping.
    pub clip: Clip,
    /// Duration the host should animate elevation/shape changes over.
    pub animation_duration: Duration,
}

/// Ripple/highlight region settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InkNode {
    /// Host focus node to attach to.
    pub focus_node: Option<FocusNodeId>,
    /// Request focus when first shown.
    pub autofocus: bool,
    /// Whether the region may take focus at all.
    pub can_request_focus: bool,
    /// Ink color while focused.
    pub focus_color: Option<Color>,
    /// Ink color while hovered.
    pub hover_color: Option<Color>,
    /// Ink color while pressed.
    pub highlight_color: Option<Color>,
    /// Ripple color.
    pub splash_color: Option<Color>,
    /// Outline the ink is clipped to.
    pub border: ShapeBorder,
    /// Cursor over the region.
    pub cursor: CursorIcon,
    /// Play acoustic/haptic feedback on gestures.
    pub enable_feedback: bool,
    /// Route taps back to the surface.
    pub handles_tap: bool,
    /// Route long presses back to the surface.
    pub handles_long_press: bool,
}

/// One render pass worth of host instructions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressableTree<'a, C> {
    /// Accessibility wrapper.
    pub semantics: SemanticsNode,
    /// Space outside the surface.
    pub margin: Insets,
    /// Fixed outer width.
    pub width: Option<f64>,
    /// Fixed outer height.
    pub height: Option<f64>,
    /// Smallest hit area to reserve around the surface.
    pub min_tap_target: Size,
    /// Density-adjusted size constraints.
    pub constraints: BoxConstraints,
    /// Surface renderer settings.
    pub surface: SurfaceNode,
    /// Ink region settings.
    pub ink: InkNode,
    /// Density-adjusted padding around the child.
    pub padding: Insets,
    /// Content, centered inside the padding.
    pub child: Option<&'a C>,
}
