// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_interaction --heading-base-level=0

//! Understory Interaction: interaction state and press recognition for UI elements.
//!
//! This crate provides two small kernels that pressable elements (buttons,
//! list rows, chips) need regardless of the toolkit hosting them:
//!
//! - [`states`]: A flag set over hovered/focused/pressed/disabled with a fixed
//!   precedence lookup for choosing state-dependent values
//! - [`press`]: A recognizer that turns pointer down/move/up/cancel plus
//!   timestamps into press-start, press-end, tap and long-press events
//!
//! Neither kernel knows about layout, painting or event routing. The host
//! decides which element a pointer event targets and feeds it in; the kernels
//! answer with transitions the element can apply.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use understory_interaction::press::{PressEvent, PressGesture};
//! use understory_interaction::states::InteractionStates;
//!
//! let mut states = InteractionStates::empty();
//! let mut press = PressGesture::new();
//!
//! for event in press.on_down(Point::new(4.0, 4.0), 0) {
//!     if event == PressEvent::PressStart {
//!         states.update(InteractionStates::PRESSED, true);
//!     }
//! }
//! assert!(states.is_pressed());
//!
//! let mut tapped = false;
//! for event in press.on_up(Point::new(4.0, 4.0), 60) {
//!     match event {
//!         PressEvent::PressEnd => {
//!             states.update(InteractionStates::PRESSED, false);
//!         }
//!         PressEvent::Tap => tapped = true,
//!         _ => {}
//!     }
//! }
//! assert!(tapped);
//! assert!(!states.is_pressed());
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod press;
pub mod states;
