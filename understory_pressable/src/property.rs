// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values that vary with the current interaction state.
//!
//! A [`StateProperty`] is resolved against an [`InteractionStates`] snapshot
//! every render. Rule lists follow the same matching model as single-element
//! style selectors: a rule applies when all of its required states are
//! active, the most specific applicable rule wins, and later rules win ties.

use smallvec::SmallVec;
use understory_interaction::states::InteractionStates;

/// A value chosen from the current interaction state.
#[derive(Clone, Debug)]
pub enum StateProperty<T> {
    /// The same value in every state.
    Static(T),
    /// A pure function of the state set.
    Resolver(fn(InteractionStates) -> T),
    /// An ordered rule list with a fallback.
    Rules(StateRules<T>),
}

impl<T: Default> Default for StateProperty<T> {
    fn default() -> Self {
        Self::Static(T::default())
    }
}

impl<T> From<T> for StateProperty<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: Clone> StateProperty<T> {
    /// Resolve the value for `states`.
    #[must_use]
    pub fn resolve(&self, states: InteractionStates) -> T {
        match self {
            Self::Static(value) => value.clone(),
            Self::Resolver(f) => f(states),
            Self::Rules(rules) => rules.resolve(states).clone(),
        }
    }
}

/// A fallback value plus state-specific overrides.
///
/// # Example
///
/// ```rust
/// use understory_interaction::states::InteractionStates;
/// use understory_pressable::StateRules;
///
/// let radius = StateRules::new(4.0)
///     .on(InteractionStates::HOVERED, 8.0)
///     .on(InteractionStates::HOVERED | InteractionStates::PRESSED, 12.0);
///
/// assert_eq!(*radius.resolve(InteractionStates::empty()), 4.0);
/// assert_eq!(*radius.resolve(InteractionStates::HOVERED), 8.0);
/// assert_eq!(
///     *radius.resolve(InteractionStates::HOVERED | InteractionStates::PRESSED),
///     12.0
/// );
/// ```
#[derive(Clone, Debug)]
pub struct StateRules<T> {
    fallback: T,
    rules: SmallVec<[(InteractionStates, T); 4]>,
}

impl<T> StateRules<T> {
    /// Create a rule list that yields `fallback` until a rule matches.
    #[must_use]
    pub fn new(fallback: T) -> Self {
        Self {
            fallback,
            rules: SmallVec::new(),
        }
    }

    /// Use `value` whenever every state in `required` is active.
    #[must_use]
    pub fn on(mut self, required: InteractionStates, value: T) -> Self {
        self.rules.push((required, value));
        self
    }

    /// The value used when no rule applies.
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Number of override rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no override rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Pick the value for `states`.
    pub fn resolve(&self, states: InteractionStates) -> &T {
        let mut best: Option<(u32, &T)> = None;
        for (required, value) in &self.rules {
            if !states.contains(*required) {
                continue;
            }
            let specificity = required.specificity();
            if best.is_none_or(|(current, _)| specificity >= current) {
                best = Some((specificity, value));
            }
        }
        best.map_or(&self.fallback, |(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_ignores_states() {
        let p = StateProperty::Static(3_u8);
        assert_eq!(p.resolve(InteractionStates::empty()), 3);
        assert_eq!(p.resolve(InteractionStates::all()), 3);
    }

    #[test]
    fn resolver_sees_states() {
        let p: StateProperty<bool> = StateProperty::Resolver(InteractionStates::is_pressed);
        assert!(!p.resolve(InteractionStates::HOVERED));
        assert!(p.resolve(InteractionStates::PRESSED));
    }

    #[test]
    fn rules_fall_back_when_nothing_matches() {
        let rules = StateRules::new("base").on(InteractionStates::FOCUSED, "focus");
        assert_eq!(*rules.resolve(InteractionStates::HOVERED), "base");
        assert_eq!(rules.len(), 1);
        assert_eq!(*rules.fallback(), "base");
    }

    #[test]
    fn more_specific_rule_wins_regardless_of_order() {
        let rules = StateRules::new(0)
            .on(InteractionStates::HOVERED | InteractionStates::FOCUSED, 2)
            .on(InteractionStates::HOVERED, 1);
        let both = InteractionStates::HOVERED | InteractionStates::FOCUSED;
        assert_eq!(*rules.resolve(both), 2);
        assert_eq!(*rules.resolve(InteractionStates::HOVERED), 1);
    }

    #[test]
    fn later_rule_wins_ties() {
        let rules = StateRules::new(0)
            .on(InteractionStates::HOVERED, 1)
            .on(InteractionStates::FOCUSED, 2);
        let both = InteractionStates::HOVERED | InteractionStates::FOCUSED;
        assert_eq!(*rules.resolve(both), 2);
    }

    #[test]
    fn empty_requirement_always_matches() {
        let rules = StateRules::new(0).on(InteractionStates::empty(), 7);
        assert_eq!(*rules.resolve(InteractionStates::empty()), 7);
        assert!(!rules.is_empty());
    }

    #[test]
    fn plain_values_convert_to_static() {
        let p: StateProperty<i32> = 5.into();
        assert!(matches!(p, StateProperty::Static(5)));
        let p = StateProperty::Rules(StateRules::new(1));
        assert_eq!(p.resolve(InteractionStates::PRESSED), 1);
    }
}
