//! AI difficulty presets and dragon temperament modifiers.

use serde::{Deserialize, Serialize};

use crate::catalog::DragonArchetype;

/// Tunable AI temperament.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiProfile {
    /// Score jitter magnitude; 0 plays fully deterministically.
    pub randomness: f32,
    /// Bias toward attacking and damage, in `[0, 1]`.
    pub aggression: f32,
    /// Bias toward targeting the rider over the dragon, in `[0, 1]`.
    pub rider_focus: f32,
}

/// Difficulty presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// The base profile for this difficulty.
    #[must_use]
    pub fn profile(self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                randomness: 15.0,
                aggression: 0.5,
                rider_focus: 0.3,
            },
            Difficulty::Medium => AiProfile {
                randomness: 8.0,
                aggression: 0.6,
                rider_focus: 0.4,
            },
            Difficulty::Hard => AiProfile {
                randomness: 3.0,
                aggression: 0.7,
                rider_focus: 0.5,
            },
            Difficulty::Expert => AiProfile {
                randomness: 0.0,
                aggression: 0.7,
                rider_focus: 0.5,
            },
        }
    }

    /// The profile for this difficulty, with the dragon's temperament
    /// overriding aggression.
    #[must_use]
    pub fn profile_for(self, dragon: DragonArchetype) -> AiProfile {
        let mut profile = self.profile();
        profile.aggression = match dragon {
            DragonArchetype::Voidmaw | DragonArchetype::Voltwing => 0.8,
            DragonArchetype::Emberfang => 0.6,
            DragonArchetype::Cryowyrm => 0.5,
            DragonArchetype::Steelhorn => 0.4,
        };
        profile
    }
}
