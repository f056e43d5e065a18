use thiserror::Error;

/// Errors raised while building a wild Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonError {
    /// The status key did not name any `StatusKind`
    #[error("Invalid status '{key}', expected one of: {}", .valid.join(", "))]
    InvalidStatusKey { key: String, valid: Vec<String> },
}

/// Errors raised by the species-data client.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Requested pokedex number lies outside the configured range
    #[error("Pokedex number {id} is outside {min}..={max}")]
    OutOfRange { id: u16, min: u16, max: u16 },
    /// Network or HTTP status failure
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The payload lacked a field the simulation needs
    #[error("Species payload is missing {0}")]
    MissingField(&'static str),
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cache file is not valid RON: {0}")]
    RonDecode(#[from] ron::error::SpannedError),
    #[error("Could not encode cache entry: {0}")]
    RonEncode(#[from] ron::Error),
}

/// Type alias for Results using PokemonError
pub type PokemonResult<T> = Result<T, PokemonError>;

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;
