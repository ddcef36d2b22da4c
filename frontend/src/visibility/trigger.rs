//! One-shot visibility trigger state, independent of the DOM.
//!
//! Each watched key moves `Observed -> Revealed` at most once. Keys that were
//! never registered stay `Unobserved` and every report about them is ignored.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Unobserved,
    Observed,
    Revealed,
}

/// What the host reported for one element in one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn at(ratio: f64) -> Self {
        Self {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    pub fn outside() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The key crossed the threshold just now; apply its effect and stop watching it.
    Revealed,
    /// Below threshold, already revealed, or unknown.
    Unchanged,
}

/// Fraction of the element's box that must be visible, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn is_met_by(self, intersection: Intersection) -> bool {
        intersection.is_intersecting && intersection.ratio >= self.0
    }
}

#[derive(Debug)]
pub struct TriggerRegistry<K> {
    threshold: Threshold,
    states: HashMap<K, WatchState>,
}

impl<K: Eq + Hash> TriggerRegistry<K> {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            states: HashMap::new(),
        }
    }

    /// Starts watching `key`. Returns false if it was already watched or revealed.
    pub fn watch(&mut self, key: K) -> bool {
        match self.states.get(&key) {
            Some(_) => false,
            None => {
                self.states.insert(key, WatchState::Observed);
                true
            }
        }
    }

    pub fn record(&mut self, key: &K, intersection: Intersection) -> Transition {
        let met = self.threshold.is_met_by(intersection);
        match self.states.get_mut(key) {
            Some(state) if met && *state == WatchState::Observed => {
                *state = WatchState::Revealed;
                Transition::Revealed
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn state(&self, key: &K) -> WatchState {
        self.states
            .get(key)
            .copied()
            .unwrap_or(WatchState::Unobserved)
    }

    /// Number of keys still waiting to be revealed.
    pub fn watching(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == WatchState::Observed)
            .count()
    }

    /// True once nothing is left to reveal.
    pub fn is_empty(&self) -> bool {
        self.watching() == 0
    }
}
