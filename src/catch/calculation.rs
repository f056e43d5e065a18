use crate::pokemon::WildPokemon;
use crate::rng::RandomSource;
use schema::{BallKind, StatusKind};

/// Draw against the ball and subtract the status bonus.
/// A lower value makes the catch easier; below zero it is guaranteed.
pub fn ballcheck<R: RandomSource + ?Sized>(status: StatusKind, ball: BallKind, rng: &mut R) -> i32 {
    let draw = rng.uniform(0, ball.catch_modifier() as i32, "ball check");
    draw - status.catch_modifier() as i32
}

/// HP factor of the catch: the lower the current HP relative to max, the
/// higher the value. Capped at 255.
pub fn hpcheck(max_hp: u16, current_hp: u16, ball: BallKind) -> u8 {
    let mut check = max_hp as u32 * 255 / ball.hp_factor() as u32;
    let divisor = current_hp as u32 / 4;
    if divisor > 0 {
        check /= divisor;
    }
    check.min(255) as u8
}

/// Attempt to catch `target` with `ball` using the Gen 1 checks.
///
/// The order of the checks matters: it fixes how many values are drawn
/// from `rng` (none for the ghost or a master ball, one when the ball
/// check decides, two otherwise).
pub fn attempt_catch<R: RandomSource + ?Sized>(
    target: &WildPokemon,
    ball: BallKind,
    rng: &mut R,
) -> bool {
    if target.is_uncatchable() {
        tracing::debug!(pokemon = target.name(), "target cannot be caught");
        return false;
    }
    if ball.is_master() {
        tracing::debug!(pokemon = target.name(), "master ball always catches");
        return true;
    }

    let ball_check = ballcheck(target.status(), ball, rng);
    if ball_check < 0 {
        tracing::debug!(ball_check, "status bonus guarantees the catch");
        return true;
    }
    if (target.catch_rate() as i32) < ball_check {
        tracing::debug!(
            ball_check,
            catch_rate = target.catch_rate(),
            "ball check above catch rate, broke free"
        );
        return false;
    }

    let hp_check = hpcheck(target.max_hp(), target.current_hp(), ball);
    let roll = rng.uniform(0, 255, "hp check roll");
    let caught = roll <= hp_check as i32;
    tracing::debug!(ball_check, hp_check, roll, caught, "hp check resolved");
    caught
}
