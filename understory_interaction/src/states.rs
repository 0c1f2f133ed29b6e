// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state set: which of hovered/focused/pressed/disabled are active.
//!
//! ## Usage
//!
//! 1) Keep one [`InteractionStates`] per interactive element.
//! 2) Flip flags with [`InteractionStates::update`] as the host reports
//!    hover, focus and press transitions. It returns `false` when nothing
//!    changed so callers can skip redundant work.
//! 3) Use [`InteractionStates::dominant`] to pick state-dependent values with
//!    the fixed precedence `disabled > pressed > hovered > focused`.
//!
//! ## Minimal example
//!
//! ```
//! use understory_interaction::states::{InteractionState, InteractionStates};
//!
//! let mut states = InteractionStates::empty();
//! assert!(states.update(InteractionStates::HOVERED, true));
//! assert!(states.update(InteractionStates::PRESSED, true));
//!
//! // Setting a flag to its current value is a no-op.
//! assert!(!states.update(InteractionStates::PRESSED, true));
//!
//! assert_eq!(states.dominant(), Some(InteractionState::Pressed));
//! ```

bitflags::bitflags! {
    /// The set of interaction states currently active on an element.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionStates: u8 {
        /// The pointer is over the element.
        const HOVERED  = 0b0000_0001;
        /// The element holds keyboard focus.
        const FOCUSED  = 0b0000_0010;
        /// A press is in progress (highlighted).
        const PRESSED  = 0b0000_0100;
        /// The element does not accept input.
        const DISABLED = 0b0000_1000;
    }
}

impl Default for InteractionStates {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single interaction state, in precedence order (highest first).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InteractionState {
    /// See [`InteractionStates::DISABLED`].
    Disabled,
    /// See [`InteractionStates::PRESSED`].
    Pressed,
    /// See [`InteractionStates::HOVERED`].
    Hovered,
    /// See [`InteractionStates::FOCUSED`].
    Focused,
}

impl InteractionState {
    /// All states, highest precedence first.
    pub const PRECEDENCE: [Self; 4] = [Self::Disabled, Self::Pressed, Self::Hovered, Self::Focused];

    /// The flag corresponding to this state.
    pub const fn flag(self) -> InteractionStates {
        match self {
            Self::Disabled => InteractionStates::DISABLED,
            Self::Pressed => InteractionStates::PRESSED,
            Self::Hovered => InteractionStates::HOVERED,
            Self::Focused => InteractionStates::FOCUSED,
        }
    }
}

impl InteractionStates {
    /// Set or clear `flag`, returning `true` if the set changed.
    pub fn update(&mut self, flag: Self, on: bool) -> bool {
        let before = *self;
        self.set(flag, on);
        *self != before
    }

    /// Returns `true` if [`DISABLED`](Self::DISABLED) is set.
    pub const fn is_disabled(self) -> bool {
        self.contains(Self::DISABLED)
    }

    /// Returns `true` if [`PRESSED`](Self::PRESSED) is set.
    pub const fn is_pressed(self) -> bool {
        self.contains(Self::PRESSED)
    }

    /// Returns `true` if [`HOVERED`](Self::HOVERED) is set.
    pub const fn is_hovered(self) -> bool {
        self.contains(Self::HOVERED)
    }

    /// Returns `true` if [`FOCUSED`](Self::FOCUSED) is set.
    pub const fn is_focused(self) -> bool {
        self.contains(Self::FOCUSED)
    }

    /// The highest-precedence active state, if any.
    pub fn dominant(self) -> Option<InteractionState> {
        InteractionState::PRECEDENCE
            .into_iter()
            .find(|state| self.contains(state.flag()))
    }

    /// Number of active states.
    ///
    /// Used as the specificity of a state requirement when several rules match.
    pub const fn specificity(self) -> u32 {
        self.bits().count_ones()
    }
}
