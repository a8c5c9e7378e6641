// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: classify pointer moves into enter/stay/leave transitions.
//!
//! ## States
//!
//! [`HoverState`] is either idle or hovering a resolved target. For each pointer move the
//! caller reports only whether *anything* registered was hit:
//!
//! | state    | hit | transition               |
//! |----------|-----|--------------------------|
//! | idle     | yes | [`HoverTransition::Enter`] |
//! | hovering | yes | [`HoverTransition::Stay`]  |
//! | hovering | no  | [`HoverTransition::Leave`] |
//! | idle     | no  | [`HoverTransition::Rest`]  |
//!
//! While hovering, a hit on a *different* node is still `Stay`: moving from one overlapping
//! target straight onto another fires neither a leave nor an enter until the pointer crosses
//! empty space.
//!
//! ## Minimal example
//!
//! ```
//! use pointerpick_responder::hover::{HoverState, HoverTransition, Hovered};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.transition(true), HoverTransition::Enter);
//! h.enter(Hovered { target: 1, leaf: 3, payload: () });
//! assert_eq!(h.transition(true), HoverTransition::Stay);
//! assert_eq!(h.transition(false), HoverTransition::Leave);
//! assert_eq!(h.leave().map(|h| h.leaf), Some(3));
//! assert!(!h.is_hovering());
//! ```

/// What a pointer move means for the hover state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    /// Idle and something was hit: resolve it and call [`HoverState::enter`].
    Enter,
    /// Already hovering and something was hit: nothing to do.
    Stay,
    /// Hovering and nothing was hit: call [`HoverState::leave`].
    Leave,
    /// Idle and nothing was hit: nothing to do.
    Rest,
}

/// The node being hovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hovered<K, T = ()> {
    /// Registered node the hit resolved to.
    pub target: K,
    /// Leaf that was intersected on entry.
    pub leaf: K,
    /// Data captured on entry, such as the leave callback.
    pub payload: T,
}

/// A two-state hover machine: idle, or hovering one resolved target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K, T = ()> {
    current: Option<Hovered<K, T>>,
}

impl<K, T> Default for HoverState<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> HoverState<K, T> {
    /// Create an idle hover state.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Whether a target is being hovered.
    pub fn is_hovering(&self) -> bool {
        self.current.is_some()
    }

    /// The hovered target, if any.
    pub fn current(&self) -> Option<&Hovered<K, T>> {
        self.current.as_ref()
    }

    /// Classify a pointer move. Does not change state.
    pub fn transition(&self, hit: bool) -> HoverTransition {
        match (self.current.is_some(), hit) {
            (false, true) => HoverTransition::Enter,
            (true, true) => HoverTransition::Stay,
            (true, false) => HoverTransition::Leave,
            (false, false) => HoverTransition::Rest,
        }
    }

    /// Start hovering `hovered`, replacing any current target.
    pub fn enter(&mut self, hovered: Hovered<K, T>) {
        self.current = Some(hovered);
    }

    /// Return to idle, yielding the target that was hovered.
    pub fn leave(&mut self) -> Option<Hovered<K, T>> {
        self.current.take()
    }
}
