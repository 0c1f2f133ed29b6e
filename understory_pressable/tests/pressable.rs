// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pressable` crate.
//!
//! These exercise `PressableSurface` through its public API the way a host
//! would: construct from a config, feed interaction changes and gestures, and
//! inspect the rendered description.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Insets, Point, Size};
use peniko::Color;
use understory_interaction::press::PressGesture;
use understory_pressable::{
    BoxConstraints, ButtonConfig, Clip, ConfigError, FocusNodeId, InteractionStates,
    PressableSurface, ShapeBorder, SurfaceKind, TapTargetSize, VisualDensity,
};

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = count.clone();
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn disabled_surface_always_uses_disabled_elevation() {
    let mut config: ButtonConfig = ButtonConfig::new();
    config.elevation = 1.0;
    config.focus_elevation = 2.0;
    config.hover_elevation = 3.0;
    config.highlight_elevation = 4.0;
    config.disabled_elevation = 0.5;
    let mut surface = PressableSurface::new(config).unwrap();

    assert_eq!(surface.effective_elevation(), 0.5);
    surface.set_hovered(true);
    assert_eq!(surface.effective_elevation(), 0.5);
    surface.set_focused(true);
    assert_eq!(surface.effective_elevation(), 0.5);
    surface.set_pressed(true);
    assert_eq!(surface.effective_elevation(), 0.5);
    assert!(!surface.states().is_pressed());
}

#[test]
fn pressed_overrides_hover_and_focus() {
    let (_, on_press) = counter();
    let mut surface = PressableSurface::new(ButtonConfig::<()>::new().on_press(on_press)).unwrap();
    surface.set_hovered(true);
    surface.set_focused(true);
    assert_eq!(surface.effective_elevation(), 4.0);

    surface.set_pressed(true);
    assert_eq!(surface.effective_elevation(), 8.0);
}

#[test]
fn repeated_transitions_are_no_ops() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let (_, on_press) = counter();
    let config: ButtonConfig = ButtonConfig::new()
        .on_press(on_press)
        .on_highlight_changed(move |on| sink.borrow_mut().push(on));
    let mut surface = PressableSurface::new(config).unwrap();

    assert!(!surface.set_pressed(false));
    assert!(!surface.set_hovered(false));
    assert!(!surface.set_focused(false));
    assert!(calls.borrow().is_empty());

    assert!(surface.set_hovered(true));
    let before = surface.states();
    assert!(!surface.set_hovered(true));
    assert_eq!(surface.states(), before);
}

#[test]
fn becoming_disabled_while_pressed_ends_press() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let (_, on_press) = counter();
    let config: ButtonConfig = ButtonConfig::new()
        .on_press(on_press)
        .on_highlight_changed(move |on| sink.borrow_mut().push(on));
    let mut surface = PressableSurface::new(config).unwrap();
    surface.set_pressed(true);

    let mut disabled = surface.config().clone();
    disabled.on_press = None;
    surface.update_config(disabled).unwrap();

    assert_eq!(*calls.borrow(), [true, false]);
    assert!(!surface.states().is_pressed());
    assert!(surface.states().is_disabled());
}

#[test]
fn re_enabling_clears_disabled() {
    let mut surface: PressableSurface = PressableSurface::new(ButtonConfig::new()).unwrap();
    assert!(!surface.is_enabled());

    let (_, on_long_press) = counter();
    surface
        .update_config(ButtonConfig::new().on_long_press(on_long_press))
        .unwrap();
    assert!(surface.is_enabled());
    assert_eq!(surface.states(), InteractionStates::empty());
}

#[test]
fn negative_elevation_is_rejected_at_construction() {
    let mut config: ButtonConfig = ButtonConfig::new();
    config.highlight_elevation = -8.0;
    let err = PressableSurface::new(config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NegativeElevation {
            field: "highlight_elevation",
            value: -8.0
        }
    );
    assert!(err.to_string().contains("highlight_elevation"));
}

#[test]
fn press_scenario_elevation_transitions() {
    let (_, on_press) = counter();
    let mut config: ButtonConfig = ButtonConfig::new().on_press(on_press);
    config.elevation = 0.0;
    config.highlight_elevation = 8.0;
    config.disabled_elevation = 0.0;
    let mut surface = PressableSurface::new(config).unwrap();

    assert_eq!(surface.effective_elevation(), 0.0);
    surface.set_pressed(true);
    assert_eq!(surface.effective_elevation(), 8.0);
    surface.set_pressed(false);
    assert_eq!(surface.effective_elevation(), 0.0);
}

#[test]
fn surface_without_handlers_ignores_taps() {
    let mut surface: PressableSurface = PressableSurface::new(ButtonConfig::new()).unwrap();
    assert!(!surface.is_enabled());
    assert!(!surface.tap().is_invoked());
    assert!(!surface.long_press().is_invoked());
    assert!(!surface.activate().is_invoked());

    let tree = surface.render();
    assert!(!tree.semantics.enabled);
    assert!(!tree.ink.handles_tap);
    assert!(!tree.ink.can_request_focus);
}

#[test]
fn recognizer_long_press_invokes_long_press_only() {
    let (taps, on_press) = counter();
    let (long_presses, on_long_press) = counter();
    let config: ButtonConfig = ButtonConfig::new()
        .on_press(on_press)
        .on_long_press(on_long_press);
    let mut surface = PressableSurface::new(config).unwrap();
    let mut press = PressGesture::new();

    for event in press.on_down(Point::new(5.0, 5.0), 0) {
        surface.handle_press_event(event);
    }
    assert!(surface.states().is_pressed());

    for event in press.poll(600) {
        surface.handle_press_event(event);
    }
    assert!(!surface.states().is_pressed());

    for event in press.on_up(Point::new(5.0, 5.0), 700) {
        surface.handle_press_event(event);
    }
    assert_eq!(taps.get(), 0);
    assert_eq!(long_presses.get(), 1);
}

#[test]
fn compact_density_scenario() {
    let (_, on_press) = counter();
    let mut config: ButtonConfig = ButtonConfig::new().on_press(on_press);
    config.padding = Insets::uniform_xy(6.0, 2.0);
    config.visual_density = VisualDensity::COMPACT;
    let surface = PressableSurface::new(config).unwrap();

    assert_eq!(surface.effective_padding(), Insets::ZERO);
    assert_eq!(
        surface.effective_constraints(),
        BoxConstraints::new(80.0, f64::INFINITY, 28.0, f64::INFINITY)
    );
    assert_eq!(surface.min_tap_target(), Size::new(40.0, 40.0));
}

#[test]
fn render_describes_host_primitives() {
    let (_, on_press) = counter();
    let color = Color::from_rgb8(0x20, 0x60, 0xc0);
    let mut config = ButtonConfig::new()
        .on_press(on_press)
        .color(color)
        .shape(ShapeBorder::rounded(6.0))
        .child("label");
    config.clip_behavior = Clip::AntiAlias;
    config.focus_node = Some(FocusNodeId(7));
    config.autofocus = true;
    config.tap_target_size = TapTargetSize::ShrinkWrap;
    config.width = Some(120.0);
    config.margin = Insets::uniform(4.0);
    let mut surface = PressableSurface::new(config).unwrap();
    surface.set_focused(true);

    let tree = surface.render();
    assert!(tree.semantics.container);
    assert!(tree.semantics.button);
    assert!(tree.semantics.enabled);
    assert_eq!(tree.margin, Insets::uniform(4.0));
    assert_eq!(tree.width, Some(120.0));
    assert_eq!(tree.height, None);
    assert_eq!(tree.min_tap_target, Size::ZERO);

    assert_eq!(tree.surface.kind, SurfaceKind::Button);
    assert_eq!(tree.surface.elevation, 4.0);
    assert_eq!(tree.surface.shape, ShapeBorder::rounded(6.0));
    assert_eq!(tree.surface.color, Some(color));
    assert_eq!(tree.surface.clip, Clip::AntiAlias);

    assert_eq!(tree.ink.focus_node, Some(FocusNodeId(7)));
    assert!(tree.ink.autofocus);
    assert!(tree.ink.handles_tap);
    assert!(!tree.ink.handles_long_press);
    assert!(tree.ink.enable_feedback);
    assert_eq!(tree.child, Some(&"label"));
}

#[test]
fn transparent_surface_without_color() {
    let (_, on_press) = counter();
    let surface = PressableSurface::new(ButtonConfig::<()>::new().on_press(on_press)).unwrap();
    assert_eq!(surface.render().surface.kind, SurfaceKind::Transparency);
}
