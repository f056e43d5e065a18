//! Ball shake animation.
//!
//! After a throw fails, Gen 1 decides how many times the ball wobbles
//! before the Pokemon breaks out. The result is purely cosmetic and is
//! derived from the same ball and HP values as the catch itself, without
//! any further random draws.

use crate::catch::calculation::{attempt_catch, hpcheck};
use crate::pokemon::WildPokemon;
use crate::rng::RandomSource;
use schema::BallKind;
use serde::{Deserialize, Serialize};

/// Number of wobbles shown when a ball succeeds.
pub const CAUGHT_SHAKES: u8 = 3;

/// Result of throwing a ball, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    Caught,
    /// The Pokemon escaped after `shakes` wobbles (0 means the ball missed)
    BrokeFree { shakes: u8 },
    /// Scripted target that cannot be caught at all
    Dodged,
}

impl ThrowOutcome {
    pub fn shakes(&self) -> u8 {
        match self {
            ThrowOutcome::Caught => CAUGHT_SHAKES,
            ThrowOutcome::BrokeFree { shakes } => *shakes,
            ThrowOutcome::Dodged => 0,
        }
    }

    pub fn is_caught(&self) -> bool {
        matches!(self, ThrowOutcome::Caught)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ThrowOutcome::Caught => "All right! The POKéMON was caught!",
            ThrowOutcome::Dodged => "It dodged the thrown BALL! This POKéMON can't be caught!",
            ThrowOutcome::BrokeFree { shakes: 0 } => "The ball missed the POKéMON!",
            ThrowOutcome::BrokeFree { shakes: 1 } => "Darn! The POKéMON broke free!",
            ThrowOutcome::BrokeFree { shakes: 2 } => "Aww! It appeared to be caught!",
            ThrowOutcome::BrokeFree { .. } => "Shoot! It was so close too!",
        }
    }
}

/// How many times the ball shakes if `target` escapes from `ball`.
pub fn shake_count(target: &WildPokemon, ball: BallKind) -> u8 {
    if ball.is_master() {
        return CAUGHT_SHAKES;
    }

    let rate_score = target.catch_rate() as u32 * 100 / ball.catch_modifier() as u32;
    if rate_score > 255 {
        return 3;
    }

    let hp_check = hpcheck(target.max_hp(), target.current_hp(), ball) as u32;
    let score = rate_score * hp_check / 255 + target.status().animation_modifier() as u32;
    match score {
        0..=9 => 0,
        10..=29 => 1,
        30..=69 => 2,
        _ => 3,
    }
}

/// Throw `ball` at `target`: the catch attempt plus its animation.
pub fn throw_ball<R: RandomSource + ?Sized>(
    target: &WildPokemon,
    ball: BallKind,
    rng: &mut R,
) -> ThrowOutcome {
    let outcome = if target.is_uncatchable() {
        ThrowOutcome::Dodged
    } else if attempt_catch(target, ball, rng) {
        ThrowOutcome::Caught
    } else {
        ThrowOutcome::BrokeFree {
            shakes: shake_count(target, ball),
        }
    };
    tracing::info!(
        pokemon = target.name(),
        ball = %ball,
        shakes = outcome.shakes(),
        caught = outcome.is_caught(),
        "ball thrown"
    );
    outcome
}
