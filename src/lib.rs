// In: src/lib.rs

//! Scyther
//!
//! A small simulation of Generation 1 wild Pokemon capture: HP and status of
//! a wild encounter, the ball-driven catch check, the ball shake animation,
//! and a cached client for remote species data.

// --- MODULE DECLARATIONS ---
pub mod catch;
pub mod errors;
pub mod pokedex;
pub mod pokemon;
pub mod rng;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BallKind, SpeciesRecord, StatusKind};

// --- From this crate's modules (`src/`) ---

// Capture routine and its building blocks.
pub use catch::{attempt_catch, ballcheck, hpcheck, shake_count, throw_ball, ThrowOutcome};

// The wild encounter.
pub use pokemon::{calculate_max_hp, generate_hp_ivs, parse_status, WildPokemon, WildPokemonBuilder};

// Random sources.
pub use rng::{GameRng, RandomSource, ScriptedRng};

// Species data.
pub use pokedex::{Pokedex, PokedexConfig};

// Crate-specific error and result types.
pub use errors::{PokedexError, PokedexResult, PokemonError, PokemonResult};
