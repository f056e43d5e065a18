use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Balls the player can throw at a wild Pokemon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BallKind {
    #[strum(serialize = "poke", to_string = "Pokeball")]
    Poke,
    #[strum(serialize = "great", to_string = "Greatball")]
    Great,
    #[strum(serialize = "ultra", to_string = "Ultraball")]
    Ultra,
    #[strum(serialize = "safari", to_string = "Safariball")]
    Safari,
    #[strum(serialize = "master", to_string = "Masterball")]
    Master,
}

impl BallKind {
    /// Upper bound of the ball draw. Also the divisor of the shake score.
    pub const fn catch_modifier(self) -> u8 {
        match self {
            BallKind::Poke => 255,
            BallKind::Great => 200,
            BallKind::Ultra | BallKind::Safari => 150,
            BallKind::Master => 0,
        }
    }

    /// Divides the scaled max HP in the HP check. Unused by the master ball.
    pub const fn hp_factor(self) -> u8 {
        match self {
            BallKind::Poke | BallKind::Ultra | BallKind::Safari => 12,
            BallKind::Great => 8,
            BallKind::Master => 1,
        }
    }

    pub const fn is_master(self) -> bool {
        matches!(self, BallKind::Master)
    }

    pub const fn display(self) -> &'static str {
        match self {
            BallKind::Poke => "Pokeball",
            BallKind::Great => "Greatball",
            BallKind::Ultra => "Ultraball",
            BallKind::Safari => "Safariball",
            BallKind::Master => "Masterball",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_modifier_table() {
        let table: Vec<(u8, u8)> = BallKind::iter()
            .map(|b| (b.catch_modifier(), b.hp_factor()))
            .collect();
        assert_eq!(
            table,
            vec![(255, 12), (200, 8), (150, 12), (150, 12), (0, 1)]
        );
    }

    #[test]
    fn test_only_master_is_master() {
        let masters: Vec<BallKind> = BallKind::iter().filter(|b| b.is_master()).collect();
        assert_eq!(masters, vec![BallKind::Master]);
    }

    #[test]
    fn test_display() {
        assert_eq!(BallKind::Ultra.to_string(), "Ultraball");
        for ball in BallKind::iter() {
            assert_eq!(ball.to_string(), ball.display());
        }
    }

    #[test]
    fn test_parse_short_key_and_label() {
        assert_eq!(BallKind::from_str("great"), Ok(BallKind::Great));
        assert_eq!(BallKind::from_str("Greatball"), Ok(BallKind::Great));
        assert_eq!(BallKind::from_str("MASTER"), Ok(BallKind::Master));
        assert!(BallKind::from_str("premier").is_err());
    }
}
