use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Side label assigned to a detected hand by the upstream estimator.
///
/// The engine trusts the label as given; any mirror correction for a flipped
/// camera feed happens once, at ingestion, via [`Handedness::mirrored`].
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq, Display, EnumIter, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// The opposite side.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Coordinate convention of incoming landmark x,y values. Both forms appear
/// among producers, so the consuming transform must be told which it gets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CoordinateSpace {
    /// x,y in [0,1] relative to frame width/height.
    #[default]
    Normalized,
    /// x,y already in pixel units.
    Pixel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn mirroring_is_an_involution() {
        for side in Handedness::iter() {
            assert_ne!(side.mirrored(), side);
            assert_eq!(side.mirrored().mirrored(), side);
        }
    }

    #[test]
    fn labels_round_trip_through_serde() {
        for side in Handedness::iter() {
            let json = serde_json::to_string(&side).unwrap();
            let back: Handedness = serde_json::from_str(&json).unwrap();
            assert_eq!(back, side);
        }
        assert_eq!(serde_json::to_string(&Handedness::Left).unwrap(), "\"Left\"");
    }
}
