use crate::pokemon::calculate_max_hp;
use rstest::rstest;

#[rstest]
#[case(0, 0, 1, 11, "Minimum inputs")]
#[case(10, 0, 1, 11, "Diglett level 1")]
#[case(10, 15, 1, 11, "Diglett level 1, max IV")]
#[case(10, 0, 50, 70, "Diglett level 50")]
#[case(10, 15, 50, 85, "Diglett level 50, max IV")]
#[case(10, 0, 100, 130, "Diglett level 100")]
#[case(10, 15, 100, 160, "Diglett level 100, max IV")]
#[case(70, 0, 1, 12, "Scyther level 1")]
#[case(70, 15, 1, 12, "Scyther level 1, max IV")]
#[case(70, 0, 50, 130, "Scyther level 50")]
#[case(70, 15, 50, 145, "Scyther level 50, max IV")]
#[case(70, 0, 100, 250, "Scyther level 100")]
#[case(70, 15, 100, 280, "Scyther level 100, max IV")]
#[case(250, 0, 1, 16, "Chansey level 1")]
#[case(250, 15, 1, 16, "Chansey level 1, max IV")]
#[case(250, 0, 50, 310, "Chansey level 50")]
#[case(250, 15, 50, 325, "Chansey level 50, max IV")]
#[case(250, 0, 100, 610, "Chansey level 100")]
#[case(250, 15, 100, 640, "Chansey level 100, max IV")]
fn test_max_hp_table(
    #[case] base_hp: u8,
    #[case] hp_ivs: u8,
    #[case] level: u8,
    #[case] expected: u16,
    #[case] description: &str,
) {
    assert_eq!(
        calculate_max_hp(base_hp, hp_ivs, level),
        expected,
        "{}",
        description
    );
}
