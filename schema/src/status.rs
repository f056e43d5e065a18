use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Status ailments that make a wild Pokemon easier to catch.
///
/// Each ailment carries two modifiers taken from the Gen 1 capture routine:
/// the amount subtracted from the ball draw, and the bonus added when the
/// game decides how many times a failed ball shakes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StatusKind {
    #[default]
    Normal,
    Poisoned,
    Burned,
    Paralyzed,
    Asleep,
    Frozen,
}

impl StatusKind {
    /// Subtracted from the ball draw; larger values make the early catch more likely.
    pub const fn catch_modifier(self) -> u8 {
        match self {
            StatusKind::Normal | StatusKind::Poisoned => 0,
            StatusKind::Burned | StatusKind::Paralyzed => 12,
            StatusKind::Asleep | StatusKind::Frozen => 25,
        }
    }

    /// Added to the shake score of a failed throw.
    pub const fn animation_modifier(self) -> u8 {
        match self {
            StatusKind::Normal => 0,
            StatusKind::Poisoned | StatusKind::Burned | StatusKind::Paralyzed => 5,
            StatusKind::Asleep | StatusKind::Frozen => 10,
        }
    }

    pub const fn display(self) -> &'static str {
        match self {
            StatusKind::Normal => "Normal",
            StatusKind::Poisoned => "Poisoned",
            StatusKind::Burned => "Burned",
            StatusKind::Paralyzed => "Paralyzed",
            StatusKind::Asleep => "Asleep",
            StatusKind::Frozen => "Frozen",
        }
    }
}
