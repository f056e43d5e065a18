use crate::pokemon::WildPokemon;
use crate::rng::ScriptedRng;
use schema::StatusKind;

/// A builder for wild Pokemon in tests: fixed IVs, no random draws.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new(70, 25)
///     .with_catch_rate(45)
///     .with_status(StatusKind::Asleep)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    base_hp: u8,
    level: u8,
    hp_ivs: u8,
    catch_rate: u8,
    status: StatusKind,
    current_hp: Option<u16>,
    uncatchable: bool,
}

impl TestPokemonBuilder {
    pub fn new(base_hp: u8, level: u8) -> Self {
        Self {
            base_hp,
            level,
            hp_ivs: 0,
            catch_rate: 255,
            status: StatusKind::Normal,
            current_hp: None,
            uncatchable: false,
        }
    }

    pub fn with_catch_rate(mut self, catch_rate: u8) -> Self {
        self.catch_rate = catch_rate;
        self
    }

    pub fn with_status(mut self, status: StatusKind) -> Self {
        self.status = status;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn uncatchable(mut self) -> Self {
        self.uncatchable = true;
        self
    }

    pub fn build(self) -> WildPokemon {
        let mut rng = ScriptedRng::new(vec![]);
        let mut pokemon = match WildPokemon::builder(self.base_hp)
            .hp_ivs(self.hp_ivs)
            .level(self.level)
            .catch_rate(self.catch_rate)
            .status_kind(self.status)
            .uncatchable(self.uncatchable)
            .build(&mut rng)
        {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build test Pokemon: {}", err),
        };

        if let Some(hp) = self.current_hp {
            pokemon.set_hp(hp);
        }
        pokemon
    }
}
