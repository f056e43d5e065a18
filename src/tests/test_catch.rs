use crate::catch::{attempt_catch, ballcheck, hpcheck};
use crate::rng::ScriptedRng;
use crate::tests::common::TestPokemonBuilder;
use rstest::rstest;
use schema::{BallKind, StatusKind};
use strum::IntoEnumIterator;

#[rstest]
#[case(35, BallKind::Poke, StatusKind::Burned, 23)]
#[case(35, BallKind::Poke, StatusKind::Frozen, 10)]
#[case(0, BallKind::Poke, StatusKind::Burned, -12)]
#[case(0, BallKind::Great, StatusKind::Normal, 0)]
#[case(150, BallKind::Ultra, StatusKind::Asleep, 125)]
fn test_ballcheck(
    #[case] draw: i32,
    #[case] ball: BallKind,
    #[case] status: StatusKind,
    #[case] expected: i32,
) {
    let mut rng = ScriptedRng::new(vec![draw]);
    assert_eq!(ballcheck(status, ball, &mut rng), expected);
}

#[rstest]
#[case(100, 100, BallKind::Poke, 85)]
#[case(100, 100, BallKind::Great, 127)]
#[case(10, 2, BallKind::Poke, 212)]
#[case(10, 2, BallKind::Great, 255)]
fn test_hpcheck(
    #[case] max_hp: u16,
    #[case] current_hp: u16,
    #[case] ball: BallKind,
    #[case] expected: u8,
) {
    assert_eq!(hpcheck(max_hp, current_hp, ball), expected);
}

#[test]
fn test_master_ball_ignores_everything() {
    for status in StatusKind::iter() {
        for catch_rate in [0, 3, 45, 255] {
            let pokemon = TestPokemonBuilder::new(250, 100)
                .with_catch_rate(catch_rate)
                .with_status(status)
                .build();
            let mut rng = ScriptedRng::new(vec![]);
            assert!(attempt_catch(&pokemon, BallKind::Master, &mut rng));
        }
    }
}

#[test]
fn test_uncatchable_beats_master_ball() {
    for ball in BallKind::iter() {
        let ghost = TestPokemonBuilder::new(60, 30)
            .with_status(StatusKind::Asleep)
            .with_hp(1)
            .uncatchable()
            .build();
        // Would be a guaranteed catch for anything else
        let mut rng = ScriptedRng::new(vec![0, 0]);
        assert!(!attempt_catch(&ghost, ball, &mut rng), "{:?}", ball);
    }
}

#[rstest]
#[case(StatusKind::Burned, 11)]
#[case(StatusKind::Paralyzed, 0)]
#[case(StatusKind::Asleep, 24)]
#[case(StatusKind::Frozen, 3)]
fn test_draw_below_status_modifier_guarantees_catch(
    #[case] status: StatusKind,
    #[case] draw: i32,
) {
    // Full HP and catch rate 0 would otherwise never be caught
    let pokemon = TestPokemonBuilder::new(250, 100)
        .with_catch_rate(0)
        .with_status(status)
        .build();
    let mut rng = ScriptedRng::new(vec![draw]);
    assert!(attempt_catch(&pokemon, BallKind::Poke, &mut rng));
}

#[rstest]
#[case(BallKind::Poke, 46)]
#[case(BallKind::Great, 200)]
#[case(BallKind::Ultra, 100)]
#[case(BallKind::Safari, 46)]
fn test_ballcheck_above_catch_rate_always_escapes(#[case] ball: BallKind, #[case] draw: i32) {
    // Lowest possible HP: the HP check would always pass
    let pokemon = TestPokemonBuilder::new(70, 25)
        .with_catch_rate(45)
        .with_hp(0)
        .build();
    let mut rng = ScriptedRng::new(vec![draw, 0]);
    assert!(!attempt_catch(&pokemon, ball, &mut rng));
}

#[rstest]
#[case(BallKind::Poke)]
#[case(BallKind::Great)]
#[case(BallKind::Ultra)]
#[case(BallKind::Safari)]
fn test_hpcheck_monotonic_in_current_hp(#[case] ball: BallKind) {
    let pokemon = TestPokemonBuilder::new(250, 100).build();
    let max_hp = pokemon.max_hp();
    let checks: Vec<u8> = (0..=max_hp).map(|hp| hpcheck(max_hp, hp, ball)).collect();
    assert!(checks.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(checks[0] > checks[max_hp as usize]);
}

#[test]
fn test_clamped_hpcheck_catches_on_every_roll() {
    // max HP 11 at level 1, current HP 2 with a Great Ball -> hpcheck 255
    let pokemon = TestPokemonBuilder::new(0, 1)
        .with_catch_rate(255)
        .with_hp(2)
        .build();
    for roll in [0, 128, 255] {
        let mut rng = ScriptedRng::new(vec![200, roll]);
        assert!(attempt_catch(&pokemon, BallKind::Great, &mut rng));
        assert_eq!(rng.remaining(), 0);
    }
}
