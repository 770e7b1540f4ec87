//! Reward display labels.

use serde::{Deserialize, Serialize};

/// Reward type index the remote source uses when no reward type was given.
pub const NO_REWARD_TYPE_INDEX: i64 = -1;

/// Display label derived from the remote reward type index.
///
/// The API only ever hands out medals for Major Orders, so every known
/// index maps to [`RewardType::Medals`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum RewardType {
    /// No reward type given
    #[strum(serialize = "N/A")]
    NotApplicable,
    /// Medals
    #[strum(serialize = "Medals")]
    Medals,
}

impl RewardType {
    /// Derive the label from a remote reward type index.
    pub fn from_index(index: i64) -> Self {
        if index == NO_REWARD_TYPE_INDEX {
            Self::NotApplicable
        } else {
            Self::Medals
        }
    }
}
