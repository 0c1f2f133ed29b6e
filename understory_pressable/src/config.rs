// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied button configuration.

use alloc::rc::Rc;
use core::fmt;
use core::time::Duration;

use cursor_icon::CursorIcon;
use kurbo::Insets;
use peniko::Color;
use understory_interaction::states::InteractionStates;

use crate::{
    BoxConstraints, Clip, ConfigError, ShapeBorder, StateProperty, TapTargetSize, VisualDensity,
};

/// Press and long-press handlers.
pub type Callback = Rc<dyn Fn()>;

/// Handler told whether the press highlight is now on.
pub type HighlightCallback = Rc<dyn Fn(bool)>;

/// Default duration for elevation and shape animations (the theme change duration).
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Identifier of the host focus node a surface participates in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FocusNodeId(pub u64);

/// Everything a [`PressableSurface`](crate::PressableSurface) renders from.
///
/// Plain fields can be set directly; callbacks have chainable setters that
/// take closures.
///
/// ```rust
/// use understory_pressable::{ButtonConfig, ShapeBorder};
///
/// let config: ButtonConfig = ButtonConfig::new()
///     .on_press(|| {})
///     .shape(ShapeBorder::Stadium)
///     .elevation(2.0);
/// assert!(config.is_enabled());
/// ```
#[derive(Clone)]
pub struct ButtonConfig<C = ()> {
    /// Invoked on tap or keyboard activation.
    pub on_press: Option<Callback>,
    /// Invoked on long press.
    pub on_long_press: Option<Callback>,
    /// Invoked whenever the pressed highlight turns on or off.
    pub on_highlight_changed: Option<HighlightCallback>,
    /// Cursor over the surface; `None` uses [`clickable_cursor`].
    pub mouse_cursor: Option<StateProperty<CursorIcon>>,
    /// Surface fill; `None` makes the surface transparent.
    pub color: Option<Color>,
    /// Ink color while focused.
    pub focus_color: Option<Color>,
    /// Ink color while hovered.
    pub hover_color: Option<Color>,
    /// Ink color while pressed.
    pub highlight_color: Option<Color>,
    /// Ripple color.
    pub splash_color: Option<Color>,
    /// Resting elevation.
    pub elevation: f64,
    /// Elevation while focused.
    pub focus_elevation: f64,
    /// Elevation while hovered.
    pub hover_elevation: f64,
    /// Elevation while pressed.
    pub highlight_elevation: f64,
    /// Elevation while disabled.
    pub disabled_elevation: f64,
    /// Space between the surface edge and the child, before density adjustment.
    pub padding: Insets,
    /// Compactness applied to padding, constraints and the tap target.
    pub visual_density: VisualDensity,
    /// Size constraints, before density adjustment.
    pub constraints: BoxConstraints,
    /// Surface outline.
    pub shape: StateProperty<ShapeBorder>,
    /// Duration of elevation and shape animations.
    pub animation_duration: Duration,
    /// How the surface clips its content.
    pub clip_behavior: Clip,
    /// Host focus node to attach to.
    pub focus_node: Option<FocusNodeId>,
    /// Request focus when first shown.
    pub autofocus: bool,
    /// Minimum hit-area policy.
    pub tap_target_size: TapTargetSize,
    /// Content drawn inside the surface.
    pub child: Option<C>,
    /// Ask the host for acoustic/haptic feedback on gestures.
    pub enable_feedback: bool,
    /// Fixed outer width.
    pub width: Option<f64>,
    /// Fixed outer height.
    pub height: Option<f64>,
    /// Space outside the surface.
    pub margin: Insets,
}

impl<C> Default for ButtonConfig<C> {
    fn default() -> Self {
        Self {
            on_press: None,
            on_long_press: None,
            on_highlight_changed: None,
            mouse_cursor: None,
            color: None,
            focus_color: None,
            hover_color: None,
            highlight_color: None,
            splash_color: None,
            elevation: 0.0,
            focus_elevation: 4.0,
            hover_elevation: 4.0,
            highlight_elevation: 8.0,
            disabled_elevation: 0.0,
            padding: Insets::ZERO,
            visual_density: VisualDensity::STANDARD,
            constraints: BoxConstraints::BUTTON,
            shape: StateProperty::Static(ShapeBorder::default()),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            clip_behavior: Clip::None,
            focus_node: None,
            autofocus: false,
            tap_target_size: TapTargetSize::Padded,
            child: None,
            enable_feedback: true,
            width: None,
            height: None,
            margin: Insets::ZERO,
        }
    }
}

impl<C> ButtonConfig<C> {
    /// A disabled configuration with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tap handler.
    #[must_use]
    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }

    /// Set the long-press handler.
    #[must_use]
    pub fn on_long_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_long_press = Some(Rc::new(f));
        self
    }

    /// Set the highlight-changed handler.
    #[must_use]
    pub fn on_highlight_changed(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_highlight_changed = Some(Rc::new(f));
        self
    }

    /// Set the content.
    #[must_use]
    pub fn child(mut self, child: C) -> Self {
        self.child = Some(child);
        self
    }

    /// Set the surface outline, statically or per state.
    #[must_use]
    pub fn shape(mut self, shape: impl Into<StateProperty<ShapeBorder>>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Set the resting elevation.
    #[must_use]
    pub fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the surface fill.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns `true` if at least one of the press handlers is set.
    pub fn is_enabled(&self) -> bool {
        self.on_press.is_some() || self.on_long_press.is_some()
    }

    /// Check every constrained field, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("elevation", self.elevation),
            ("focus_elevation", self.focus_elevation),
            ("hover_elevation", self.hover_elevation),
            ("highlight_elevation", self.highlight_elevation),
            ("disabled_elevation", self.disabled_elevation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeElevation { field, value });
            }
        }
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        for (field, insets) in [("padding", self.padding), ("margin", self.margin)] {
            if !insets_are_finite(insets) {
                return Err(ConfigError::NonFiniteInsets { field });
            }
        }
        self.visual_density.validate()?;
        self.constraints.validate()
    }
}

fn insets_are_finite(insets: Insets) -> bool {
    [insets.x0, insets.y0, insets.x1, insets.y1]
        .iter()
        .all(|side| side.is_finite())
}

/// Pointer over enabled surfaces, the default arrow over disabled ones.
pub fn clickable_cursor(states: InteractionStates) -> CursorIcon {
    if states.is_disabled() {
        CursorIcon::Default
    } else {
        CursorIcon::Pointer
    }
}

impl<C: fmt::Debug> fmt::Debug for ButtonConfig<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("on_press", &self.on_press.is_some())
            .field("on_long_press", &self.on_long_press.is_some())
            .field("on_highlight_changed", &self.on_highlight_changed.is_some())
            .field("mouse_cursor", &self.mouse_cursor)
            .field("color", &self.color)
            .field("focus_color", &self.focus_color)
            .field("hover_color", &self.hover_color)
            .field("highlight_color", &self.highlight_color)
            .field("splash_color", &self.splash_color)
            .field("elevation", &self.elevation)
            .field("focus_elevation", &self.focus_elevation)
            .field("hover_elevation", &self.hover_elevation)
            .field("highlight_elevation", &self.highlight_elevation)
            .field("disabled_elevation", &self.disabled_elevation)
            .field("padding", &self.padding)
            .field("visual_density", &self.visual_density)
            .field("constraints", &self.constraints)
            .field("shape", &self.shape)
            .field("animation_duration", &self.animation_duration)
            .field("clip_behavior", &self.clip_behavior)
            .field("focus_node", &self.focus_node)
            .field("autofocus", &self.autofocus)
            .field("tap_target_size", &self.tap_target_size)
            .field("child", &self.child)
            .field("enable_feedback", &self.enable_feedback)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .finish()
    }
}
