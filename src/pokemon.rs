use crate::catch::{self, ThrowOutcome};
use crate::errors::{PokemonError, PokemonResult};
use crate::rng::RandomSource;
use schema::{BallKind, SpeciesRecord, StatusKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Randomly generate the HP IV the way Gen 1 does: the low bit of the
/// attack, defense, speed and special IVs packed from high to low.
pub fn generate_hp_ivs<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    let attack = (rng.uniform(0, 15, "attack iv") & 0b1) << 3;
    let defense = (rng.uniform(0, 15, "defense iv") & 0b1) << 2;
    let speed = (rng.uniform(0, 15, "speed iv") & 0b1) << 1;
    let special = rng.uniform(0, 15, "special iv") & 0b1;
    (attack | defense | speed | special) as u8
}

/// Max HP = floor((base + iv) * 2 * level / 100) + level + 10
pub fn calculate_max_hp(base_hp: u8, hp_ivs: u8, level: u8) -> u16 {
    let level = level as u32;
    let hp = ((base_hp as u32 + hp_ivs as u32) * 2 * level) / 100 + level + 10;
    hp as u16
}

/// Resolve a status key such as "asleep" or "Frozen" to a `StatusKind`.
pub fn parse_status(key: &str) -> PokemonResult<StatusKind> {
    StatusKind::from_str(key).map_err(|_| PokemonError::InvalidStatusKey {
        key: key.to_string(),
        valid: StatusKind::iter().map(|s| s.to_string()).collect(),
    })
}

/// A single wild encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildPokemon {
    name: String,
    level: u8,
    catch_rate: u8,
    status: StatusKind,
    max_hp: u16,
    current_hp: u16,
    uncatchable: bool,
    base_hp: u8,
    hp_ivs: u8,
}

impl WildPokemon {
    pub fn builder(base_hp: u8) -> WildPokemonBuilder {
        WildPokemonBuilder::new(base_hp)
    }

    /// Create a wild Pokemon from fetched species data with random IVs.
    pub fn from_species<R: RandomSource + ?Sized>(
        species: &SpeciesRecord,
        level: u8,
        rng: &mut R,
    ) -> Self {
        let hp_ivs = generate_hp_ivs(rng);
        Self::with_stats(
            species.display_name(),
            species.base_hp,
            hp_ivs,
            level,
            species.catch_rate,
            StatusKind::Normal,
            false,
        )
    }

    fn with_stats(
        name: String,
        base_hp: u8,
        hp_ivs: u8,
        level: u8,
        catch_rate: u8,
        status: StatusKind,
        uncatchable: bool,
    ) -> Self {
        let max_hp = calculate_max_hp(base_hp, hp_ivs, level);
        WildPokemon {
            name,
            level,
            catch_rate,
            status,
            max_hp,
            current_hp: max_hp,
            uncatchable,
            base_hp,
            hp_ivs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn catch_rate(&self) -> u8 {
        self.catch_rate
    }

    pub fn status(&self) -> StatusKind {
        self.status
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    /// Scripted encounters (the ghost in Pokemon Tower) can never be caught.
    pub fn is_uncatchable(&self) -> bool {
        self.uncatchable
    }

    pub fn base_hp(&self) -> u8 {
        self.base_hp
    }

    pub fn hp_ivs(&self) -> u8 {
        self.hp_ivs
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Deal damage; HP bottoms out at zero.
    pub fn take_damage(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    pub fn set_status(&mut self, status: StatusKind) {
        self.status = status;
    }

    /// One capture attempt. Leaves the Pokemon untouched.
    pub fn catch<R: RandomSource + ?Sized>(&self, ball: BallKind, rng: &mut R) -> bool {
        catch::attempt_catch(self, ball, rng)
    }

    /// A capture attempt plus the shakes shown for it.
    pub fn throw_ball<R: RandomSource + ?Sized>(
        &self,
        ball: BallKind,
        rng: &mut R,
    ) -> ThrowOutcome {
        catch::throw_ball(self, ball, rng)
    }
}

impl fmt::Display for WildPokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Lv.{} HP: {}/{} [{}]",
            self.name, self.level, self.current_hp, self.max_hp, self.status
        )
    }
}

/// Builder for [`WildPokemon`] with the classic defaults: level 1, catch
/// rate 255, Normal status, random HP IVs.
#[derive(Debug, Clone)]
pub struct WildPokemonBuilder {
    base_hp: u8,
    hp_ivs: Option<u8>,
    level: u8,
    catch_rate: u8,
    status: StatusKind,
    status_key: Option<String>,
    name: String,
    uncatchable: bool,
}

impl WildPokemonBuilder {
    pub fn new(base_hp: u8) -> Self {
        Self {
            base_hp,
            hp_ivs: None,
            level: 1,
            catch_rate: 255,
            status: StatusKind::Normal,
            status_key: None,
            name: "Pokemon".to_string(),
            uncatchable: false,
        }
    }

    /// Fix the HP IV instead of rolling it. Values above 15 are masked.
    pub fn hp_ivs(mut self, hp_ivs: u8) -> Self {
        self.hp_ivs = Some(hp_ivs & 0x0F);
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn catch_rate(mut self, catch_rate: u8) -> Self {
        self.catch_rate = catch_rate;
        self
    }

    /// Status by key; resolved (and validated) in `build`.
    pub fn status(mut self, key: &str) -> Self {
        self.status_key = Some(key.to_string());
        self
    }

    pub fn status_kind(mut self, status: StatusKind) -> Self {
        self.status = status;
        self.status_key = None;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn uncatchable(mut self, uncatchable: bool) -> Self {
        self.uncatchable = uncatchable;
        self
    }

    /// Build the Pokemon, rolling HP IVs from `rng` when none were given.
    pub fn build<R: RandomSource + ?Sized>(self, rng: &mut R) -> PokemonResult<WildPokemon> {
        let hp_ivs = match self.hp_ivs {
            Some(ivs) => ivs,
            None => generate_hp_ivs(rng),
        };
        let status = match &self.status_key {
            Some(key) => parse_status(key)?,
            None => self.status,
        };

        Ok(WildPokemon::with_stats(
            self.name,
            self.base_hp,
            hp_ivs,
            self.level,
            self.catch_rate,
            status,
            self.uncatchable,
        ))
    }
}
