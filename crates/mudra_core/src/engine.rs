//! Façade owning the symbol library and driving the per-hand flow.
//!
//! One engine instance is constructed at service startup and handed to
//! whoever needs it; the store handle inside is already thread-safe, so
//! `learn` may be called from a different thread than the per-frame
//! `process` loop.

use image::RgbImage;
use log::debug;

use crate::common::hand::Hand;
use crate::common::symbol::MatchResult;
use crate::common::types::Handedness;
use crate::conversions::normalize::normalize;
use crate::display::roi::{extract, RoiConfig, RoiFrame};
use crate::error::EngineError;
use crate::symbols::matcher::match_symbols;
use crate::symbols::store::SymbolStore;

/// Engine options.
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    pub roi: RoiConfig,
}

/// Everything the engine derives from one hand in one frame.
#[derive(Clone, Debug)]
pub struct ProcessedHand {
    pub handedness: Handedness,
    /// Full ranking against the learned library, best first. Empty when the
    /// pose could not be canonicalized or nothing is stored for this side.
    pub matches: Vec<MatchResult>,
    pub roi: RoiFrame,
}

/// Owns the symbol library and the per-hand pipeline configuration.
#[derive(Clone, Debug, Default)]
pub struct HandEngine {
    store: SymbolStore,
    config: EngineConfig,
}

impl HandEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { store: SymbolStore::new(), config }
    }

    /// The underlying symbol library, e.g. for direct inspection in tests or
    /// for swapping in pre-learned symbols.
    #[must_use]
    pub fn store(&self) -> &SymbolStore {
        &self.store
    }

    /// Canonicalize the hand's current pose and file it under `name`.
    ///
    /// # Errors
    /// [`EngineError::Pose`] when the pose cannot be canonicalized,
    /// [`EngineError::Input`] for an empty name.
    pub fn learn(&self, name: &str, hand: &Hand) -> Result<(), EngineError> {
        let features = normalize(hand.landmarks())?;
        self.store.insert(name, hand.handedness(), features)?;
        Ok(())
    }

    /// Run both per-frame branches for one hand: canonicalize-and-match, and
    /// ROI extraction. The branches are independent; a pose that cannot be
    /// canonicalized this frame still gets its crop, with an empty ranking.
    #[must_use]
    pub fn process(&self, hand: &Hand, frame: &RgbImage) -> ProcessedHand {
        let matches = match normalize(hand.landmarks()) {
            Ok(features) => match_symbols(&features, hand.handedness(), &self.store),
            Err(err) => {
                debug!("{} hand not matchable this frame: {err}", hand.handedness());
                Vec::new()
            }
        };
        let roi = extract(hand.landmarks(), frame, &self.config.roi);
        ProcessedHand { handedness: hand.handedness(), matches, roi }
    }
}

/// Passes a payload through only when it differs from the previous one, so a
/// static scene is not republished every frame.
#[derive(Clone, Debug)]
pub struct DeltaGate<T: PartialEq> {
    last: Option<T>,
}

impl<T: PartialEq> Default for DeltaGate<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> DeltaGate<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `value` differs from the last payload that passed; the gate
    /// then remembers it.
    pub fn changed(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }
        self.last = Some(value.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_passes_first_and_changed_payloads_only() {
        let mut gate = DeltaGate::new();
        assert!(gate.changed(&1));
        assert!(!gate.changed(&1));
        assert!(gate.changed(&2));
        assert!(!gate.changed(&2));
        assert!(gate.changed(&1));
    }
}
