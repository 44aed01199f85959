// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-or-click recognition for a single pointer.
//!
//! A press starts over some target (or over empty space). While the pointer stays
//! within the click distance of where it went down, nothing happens. Once it moves
//! further, the press becomes a pan for the rest of its life and every subsequent
//! move reports a delta. On release, a press that never became a pan and ends on the
//! target it started on is a click.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lineage_view2d::gesture::{GestureResult, GestureState};
//!
//! let mut state: GestureState<u32> = GestureState::new();
//!
//! // A short wobble is still a click.
//! state.on_down(Some(7), Point::new(10.0, 10.0));
//! assert_eq!(state.on_move(Point::new(12.0, 11.0)), None);
//! assert_eq!(state.on_up(Some(&7), Point::new(12.0, 11.0)), GestureResult::Click(7));
//!
//! // A long drag pans, and catches up with the distance already covered.
//! state.on_down(Some(7), Point::new(10.0, 10.0));
//! assert_eq!(state.on_move(Point::new(30.0, 10.0)), Some(Vec2::new(20.0, 0.0)));
//! assert_eq!(state.on_move(Point::new(35.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
//! assert_eq!(state.on_up(Some(&7), Point::new(35.0, 12.0)), GestureResult::Panned);
//! ```

use kurbo::{Point, Vec2};

/// An active press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// What was under the pointer when it went down, if anything.
    pub target: Option<K>,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Position at the last reported move.
    pub last_position: Point,
    /// True once the pointer has left the click distance.
    pub panning: bool,
}

/// Outcome of a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureResult<K> {
    /// The press stayed put and ended on its original target.
    Click(K),
    /// The press turned into a pan.
    Panned,
    /// No click: released elsewhere, over empty space, or with no active press.
    Suppressed(Option<K>),
}

/// Press tracker distinguishing clicks from drags.
#[derive(Clone, Debug)]
pub struct GestureState<K> {
    press: Option<Press<K>>,
    /// Distance the pointer may travel from its down position and still click.
    pub click_distance: f64,
}

impl<K: PartialEq + Clone> GestureState<K> {
    /// Create a tracker with a 5-pixel click distance.
    pub fn new() -> Self {
        Self::with_click_distance(5.0)
    }

    /// Create a tracker with a custom click distance.
    pub fn with_click_distance(click_distance: f64) -> Self {
        Self {
            press: None,
            click_distance,
        }
    }

    /// Start a press, replacing any press still in flight.
    pub fn on_down(&mut self, target: Option<K>, position: Point) {
        self.press = Some(Press {
            target,
            down_position: position,
            last_position: position,
            panning: false,
        });
    }

    /// Track movement; returns the pan delta once the press has become a pan.
    pub fn on_move(&mut self, position: Point) -> Option<Vec2> {
        let press = self.press.as_mut()?;
        if !press.panning {
            if press.down_position.distance(position) <= self.click_distance {
                return None;
            }
            press.panning = true;
        }
        let delta = position - press.last_position;
        press.last_position = position;
        Some(delta)
    }

    /// End the press.
    pub fn on_up(&mut self, current_target: Option<&K>, position: Point) -> GestureResult<K> {
        let Some(press) = self.press.take() else {
            return GestureResult::Suppressed(None);
        };
        if press.panning || press.down_position.distance(position) > self.click_distance {
            return if press.panning {
                GestureResult::Panned
            } else {
                GestureResult::Suppressed(press.target)
            };
        }
        match press.target {
            Some(target) if Some(&target) == current_target => GestureResult::Click(target),
            other => GestureResult::Suppressed(other),
        }
    }

    /// Drop the active press. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// Returns `true` while a press is active.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Returns `true` while the active press is panning.
    pub fn is_panning(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.panning)
    }

    /// The active press, if any.
    pub fn press(&self) -> Option<&Press<K>> {
        self.press.as_ref()
    }
}

impl<K: PartialEq + Clone> Default for GestureState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_target_without_movement_clicks() {
        let mut state: GestureState<u32> = GestureState::new();
        state.on_down(Some(42), Point::new(10.0, 20.0));
        assert_eq!(
            state.on_up(Some(&42), Point::new(10.0, 20.0)),
            GestureResult::Click(42)
        );
        assert!(!state.is_pressed());
    }

    #[test]
    fn different_target_suppresses() {
        let mut state: GestureState<u32> = GestureState::new();
        state.on_down(Some(42), Point::new(10.0, 20.0));
        assert_eq!(
            state.on_up(Some(&99), Point::new(11.0, 20.0)),
            GestureResult::Suppressed(Some(42))
        );
    }

    #[test]
    fn background_press_never_clicks() {
        let mut state: GestureState<u32> = GestureState::new();
        state.on_down(None, Point::ZERO);
        assert_eq!(state.on_up(None, Point::ZERO), GestureResult::Suppressed(None));
    }

    #[test]
    fn drag_beyond_threshold_pans_and_suppresses_click() {
        let mut state: GestureState<u32> = GestureState::with_click_distance(3.0);
        state.on_down(Some(1), Point::new(0.0, 0.0));
        assert_eq!(state.on_move(Point::new(2.0, 0.0)), None);
        assert!(!state.is_panning());
        assert_eq!(state.on_move(Point::new(4.0, 0.0)), Some(Vec2::new(4.0, 0.0)));
        assert!(state.is_panning());
        // Coming back inside the threshold keeps panning.
        assert_eq!(state.on_move(Point::new(1.0, 0.0)), Some(Vec2::new(-3.0, 0.0)));
        assert_eq!(state.on_up(Some(&1), Point::new(1.0, 0.0)), GestureResult::Panned);
    }

    #[test]
    fn release_far_away_without_moves_suppresses() {
        let mut state: GestureState<u32> = GestureState::new();
        state.on_down(Some(1), Point::ZERO);
        assert_eq!(
            state.on_up(Some(&1), Point::new(50.0, 0.0)),
            GestureResult::Suppressed(Some(1))
        );
    }

    #[test]
    fn no_press_suppresses_and_moves_are_ignored() {
        let mut state: GestureState<u32> = GestureState::new();
        assert_eq!(state.on_move(Point::new(100.0, 0.0)), None);
        assert_eq!(state.on_up(Some(&1), Point::ZERO), GestureResult::Suppressed(None));
        state.on_down(Some(1), Point::ZERO);
        assert!(state.cancel());
        assert!(!state.cancel());
    }
}
