// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pressable surface component.

use cursor_icon::CursorIcon;
use kurbo::{Insets, Point, Rect, Size};
use understory_interaction::press::PressEvent;
use understory_interaction::states::{InteractionState, InteractionStates};

use crate::config::clickable_cursor;
use crate::tree::{InkNode, PressableTree, SemanticsNode, SurfaceKind, SurfaceNode};
use crate::{BoxConstraints, ButtonConfig, ConfigError, ShapeBorder};

/// Which platform feedback the host should play for a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Feedback for a tap or keyboard activation.
    Tap,
    /// Feedback for a long press.
    LongPress,
}

/// Outcome of delivering an input event to a [`PressableSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureResponse {
    /// Nothing changed and no handler ran.
    Ignored,
    /// The interaction state changed; re-render.
    Updated,
    /// A press handler ran.
    Invoked {
        /// Feedback to play, if enabled.
        feedback: Option<Feedback>,
    },
}

impl GestureResponse {
    /// Returns `true` if a press handler ran.
    pub fn is_invoked(self) -> bool {
        matches!(self, Self::Invoked { .. })
    }

    /// Feedback the host should play, if any.
    pub fn feedback(self) -> Option<Feedback> {
        match self {
            Self::Invoked { feedback } => feedback,
            _ => None,
        }
    }
}

/// A tappable surface that derives its elevation, shape and cursor from the
/// interaction states the host reports.
///
/// The surface owns its [`InteractionStates`]. `DISABLED` mirrors
/// [`ButtonConfig::is_enabled`]; `PRESSED` is never set while disabled.
///
/// # Example
///
/// ```rust
/// use understory_pressable::{ButtonConfig, PressableSurface};
///
/// let config: ButtonConfig = ButtonConfig::new().on_press(|| {});
/// let mut surface = PressableSurface::new(config).unwrap();
///
/// assert_eq!(surface.effective_elevation(), 0.0);
/// surface.set_pressed(true);
/// assert_eq!(surface.effective_elevation(), 8.0);
/// surface.set_pressed(false);
/// assert_eq!(surface.effective_elevation(), 0.0);
/// ```
#[derive(Debug)]
pub struct PressableSurface<C = ()> {
    config: ButtonConfig<C>,
    states: InteractionStates,
}

impl<C> PressableSurface<C> {
    /// Validate `config` and create a surface in its initial state.
    pub fn new(config: ButtonConfig<C>) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            tracing::debug!(%err, "rejected button config");
            return Err(err);
        }
        let mut states = InteractionStates::empty();
        states.set(InteractionStates::DISABLED, !config.is_enabled());
        Ok(Self { config, states })
    }

    /// The current configuration.
    pub fn config(&self) -> &ButtonConfig<C> {
        &self.config
    }

    /// The current interaction states.
    pub fn states(&self) -> InteractionStates {
        self.states
    }

    /// Returns `true` if the surface accepts input.
    pub fn is_enabled(&self) -> bool {
        !self.states.is_disabled()
    }

    /// Replace the configuration.
    ///
    /// If the new configuration disables a pressed surface, the press ends
    /// first (notifying the highlight handler) and only then is the surface
    /// marked disabled. A rejected configuration leaves the surface untouched.
    pub fn update_config(&mut self, config: ButtonConfig<C>) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            tracing::debug!(%err, "rejected button config update");
            return Err(err);
        }
        let enabled = config.is_enabled();
        self.config = config;
        if !enabled && self.states.is_pressed() {
            self.apply_pressed(false);
        }
        if self.states.update(InteractionStates::DISABLED, !enabled) {
            tracing::debug!(enabled, "pressable surface enabled state changed");
        }
        Ok(())
    }

    /// Host reports press start (`true`) or end (`false`).
    ///
    /// Returns `true` if the state changed. Presses on a disabled surface are ignored.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        if pressed && self.states.is_disabled() {
            tracing::trace!("ignoring press on disabled surface");
            return false;
        }
        self.apply_pressed(pressed)
    }

    /// Host reports hover enter (`true`) or exit (`false`).
    ///
    /// Returns `true` if the state changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.states.update(InteractionStates::HOVERED, hovered);
        if changed {
            tracing::trace!(hovered, "hover changed");
        }
        changed
    }

    /// Host reports focus gain (`true`) or loss (`false`).
    ///
    /// Returns `true` if the state changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.states.update(InteractionStates::FOCUSED, focused);
        if changed {
            tracing::trace!(focused, "focus changed");
        }
        changed
    }

    fn apply_pressed(&mut self, pressed: bool) -> bool {
        if !self.states.update(InteractionStates::PRESSED, pressed) {
            return false;
        }
        tracing::trace!(pressed, "highlight changed");
        if let Some(on_highlight_changed) = &self.config.on_highlight_changed {
            on_highlight_changed(pressed);
        }
        true
    }

    /// Host recognized a tap: runs `on_press`.
    pub fn tap(&mut self) -> GestureResponse {
        self.invoke(Feedback::Tap)
    }

    /// Host recognized a long press: runs `on_long_press`.
    pub fn long_press(&mut self) -> GestureResponse {
        self.invoke(Feedback::LongPress)
    }

    /// Keyboard activation (Enter/Space on the focused surface); behaves as a tap.
    pub fn activate(&mut self) -> GestureResponse {
        self.invoke(Feedback::Tap)
    }

    fn invoke(&self, gesture: Feedback) -> GestureResponse {
        if self.states.is_disabled() {
            tracing::trace!(?gesture, "ignoring gesture on disabled surface");
            return GestureResponse::Ignored;
        }
        let handler = match gesture {
            Feedback::Tap => &self.config.on_press,
            Feedback::LongPress => &self.config.on_long_press,
        };
        let Some(handler) = handler else {
            return GestureResponse::Ignored;
        };
        tracing::trace!(?gesture, "invoking press handler");
        handler();
        GestureResponse::Invoked {
            feedback: self.config.enable_feedback.then_some(gesture),
        }
    }

    /// Apply one event from a [`PressGesture`](understory_interaction::press::PressGesture).
    pub fn handle_press_event(&mut self, event: PressEvent) -> GestureResponse {
        match event {
            PressEvent::PressStart | PressEvent::PressEnd => {
                if self.set_pressed(event == PressEvent::PressStart) {
                    GestureResponse::Updated
                } else {
                    GestureResponse::Ignored
                }
            }
            PressEvent::Tap => self.tap(),
            PressEvent::LongPress => self.long_press(),
        }
    }

    /// Elevation for the current states.
    ///
    /// Precedence is `disabled > pressed > hovered > focused > resting`.
    pub fn effective_elevation(&self) -> f64 {
        let config = &self.config;
        match self.states.dominant() {
            Some(InteractionState::Disabled) => config.disabled_elevation,
            Some(InteractionState::Pressed) => config.highlight_elevation,
            Some(InteractionState::Hovered) => config.hover_elevation,
            Some(InteractionState::Focused) => config.focus_elevation,
            None => config.elevation,
        }
    }

    /// Configured padding plus the density adjustment, no side below zero.
    pub fn effective_padding(&self) -> Insets {
        let base = self.config.padding;
        let delta = self.config.visual_density.padding_adjustment();
        Insets::new(
            (base.x0 + delta.x0).max(0.0),
            (base.y0 + delta.y0).max(0.0),
            (base.x1 + delta.x1).max(0.0),
            (base.y1 + delta.y1).max(0.0),
        )
    }

    /// Configured constraints with density-adjusted minimums.
    pub fn effective_constraints(&self) -> BoxConstraints {
        self.config
            .visual_density
            .effective_constraints(self.config.constraints)
    }

    /// Smallest hit area the host should reserve.
    pub fn min_tap_target(&self) -> Size {
        self.config
            .tap_target_size
            .min_size(self.config.visual_density)
    }

    /// Hit-area size for a surface laid out at `surface_size`.
    ///
    /// The surface is centered in this area; input landing in the extra
    /// room counts as input on the surface.
    pub fn input_size(&self, surface_size: Size) -> Size {
        let min = self.min_tap_target();
        Size::new(
            surface_size.width.max(min.width),
            surface_size.height.max(min.height),
        )
    }

    /// Outline for the current states.
    pub fn shape(&self) -> ShapeBorder {
        self.config.shape.resolve(self.states)
    }

    /// Cursor for the current states.
    pub fn mouse_cursor(&self) -> CursorIcon {
        match &self.config.mouse_cursor {
            Some(cursor) => cursor.resolve(self.states),
            None => clickable_cursor(self.states),
        }
    }

    /// Returns `true` if `point` falls inside the current outline laid out in `bounds`.
    pub fn hit_test(&self, bounds: Rect, point: Point) -> bool {
        self.shape().outline(bounds).contains(point)
    }

    /// Describe the surface for the host's layout and paint pass.
    pub fn render(&self) -> PressableTree<'_, C> {
        let config = &self.config;
        let enabled = self.is_enabled();
        let shape = self.shape();
        PressableTree {
            semantics: SemanticsNode {
                container: true,
                button: true,
                enabled,
            },
            margin: config.margin,
            width: config.width,
            height: config.height,
            min_tap_target: self.min_tap_target(),
            constraints: self.effective_constraints(),
            surface: SurfaceNode {
                kind: if config.color.is_some() {
                    SurfaceKind::Button
                } else {
                    SurfaceKind::Transparency
                },
                elevation: self.effective_elevation(),
                shape,
                color: config.color,
                clip: config.clip_behavior,
                animation_duration: config.animation_duration,
            },
            ink: InkNode {
                focus_node: config.focus_node,
                autofocus: config.autofocus,
                can_request_focus: enabled,
                focus_color: config.focus_color,
                hover_color: config.hover_color,
                highlight_color: config.highlight_color,
                splash_color: config.splash_color,
                border: shape,
                cursor: self.mouse_cursor(),
                enable_feedback: config.enable_feedback,
                handles_tap: enabled && config.on_press.is_some(),
                handles_long_press: enabled && config.on_long_press.is_some(),
            },
            padding: self.effective_padding(),
            child: config.child.as_ref(),
        }
    }
}
