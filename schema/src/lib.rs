// Scyther Schema - Shared type definitions
// The closed data sets of the capture simulation: status ailments, balls,
// and the species fields pulled from the remote pokedex.

pub use ball::*;
pub use species_data::*;
pub use status::*;

pub mod ball;
pub mod species_data;
pub mod status;
