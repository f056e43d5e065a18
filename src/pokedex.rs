//! Species data client for the PokeAPI v2 REST service.
//!
//! Only the fields the capture simulation needs are kept (`base_hp` and
//! `catch_rate`). Records are cached in memory and, when a cache directory
//! is configured, as RON files named `{number:03}-{name}.ron`.

use crate::errors::{PokedexError, PokedexResult};
use reqwest::Client;
use schema::SpeciesRecord;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Where species data comes from and which pokedex numbers are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexConfig {
    pub base_url: String,
    pub min_id: u16,
    pub max_id: u16,
    pub cache_dir: Option<PathBuf>,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_id: 1,
            max_id: 151,
            cache_dir: None,
        }
    }
}

impl PokedexConfig {
    /// Defaults overridden by environment variables
    ///
    /// Optional: POKEAPI_URL (defaults to the public PokeAPI v2)
    /// Optional: SCYTHER_CACHE_DIR (no disk cache when unset)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("POKEAPI_URL") {
            config.base_url = url;
        }
        if let Ok(dir) = std::env::var("SCYTHER_CACHE_DIR") {
            config.cache_dir = Some(PathBuf::from(dir));
        }
        config
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    fn endpoint(&self, resource: &str, id: u16) -> String {
        format!("{}/{}/{}", self.base_url.trim_end_matches('/'), resource, id)
    }
}

/// Extract the base HP from a `pokemon/{id}` payload.
pub fn parse_base_hp(pokemon: &Value) -> PokedexResult<u8> {
    pokemon["stats"]
        .as_array()
        .and_then(|stats| {
            stats
                .iter()
                .find(|stat| stat["stat"]["name"] == "hp")
                .and_then(|stat| stat["base_stat"].as_u64())
        })
        .map(|hp| hp.min(u8::MAX as u64) as u8)
        .ok_or(PokedexError::MissingField("stats.hp.base_stat"))
}

/// Extract the catch rate from a `pokemon-species/{id}` payload.
pub fn parse_capture_rate(species: &Value) -> PokedexResult<u8> {
    species["capture_rate"]
        .as_u64()
        .map(|rate| rate.min(u8::MAX as u64) as u8)
        .ok_or(PokedexError::MissingField("capture_rate"))
}

/// Combine the two payloads for pokedex number `id` into a record.
pub fn parse_species(id: u16, pokemon: &Value, species: &Value) -> PokedexResult<SpeciesRecord> {
    let name = pokemon["name"]
        .as_str()
        .ok_or(PokedexError::MissingField("name"))?;

    Ok(SpeciesRecord {
        pokedex_number: id,
        name: name.to_string(),
        base_hp: parse_base_hp(pokemon)?,
        catch_rate: parse_capture_rate(species)?,
    })
}

/// Fetches species data, serving repeat lookups from its caches.
#[derive(Debug)]
pub struct Pokedex {
    client: Client,
    config: PokedexConfig,
    cache: HashMap<u16, SpeciesRecord>,
}

impl Pokedex {
    pub fn new(config: PokedexConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    /// Records currently held in memory.
    pub fn cached(&self, id: u16) -> Option<&SpeciesRecord> {
        self.cache.get(&id)
    }

    fn check_range(&self, id: u16) -> PokedexResult<()> {
        if id < self.config.min_id || id > self.config.max_id {
            return Err(PokedexError::OutOfRange {
                id,
                min: self.config.min_id,
                max: self.config.max_id,
            });
        }
        Ok(())
    }

    /// Store a record in memory and, if configured, on disk.
    ///
    /// The memory cache is always updated; an error only reports that the
    /// disk copy could not be written.
    pub fn cache_put(&mut self, record: SpeciesRecord) -> PokedexResult<()> {
        self.cache.insert(record.pokedex_number, record.clone());

        if let Some(dir) = &self.config.cache_dir {
            let content = ron::ser::to_string_pretty(&record, ron::ser::PrettyConfig::default())?;
            fs::create_dir_all(dir)?;
            let path = dir.join(format!("{}.ron", record.file_stem()));
            fs::write(&path, content)?;
            tracing::debug!(path = %path.display(), "species cached to disk");
        }
        Ok(())
    }

    fn cache_get(&mut self, id: u16) -> PokedexResult<Option<SpeciesRecord>> {
        if let Some(record) = self.cache.get(&id) {
            return Ok(Some(record.clone()));
        }

        let Some(dir) = &self.config.cache_dir else {
            return Ok(None);
        };
        if !dir.is_dir() {
            return Ok(None);
        }

        // Files are named "123-scyther.ron"
        let prefix = format!("{:03}-", id);
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("ron") {
                continue;
            }
            let matches = path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| stem.starts_with(&prefix));
            if matches {
                let content = fs::read_to_string(&path)?;
                match ron::from_str::<SpeciesRecord>(&content) {
                    Ok(record) => {
                        self.cache.insert(id, record.clone());
                        return Ok(Some(record));
                    }
                    // Unreadable entries are refetched and overwritten
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "ignoring corrupt cache file"
                        );
                        return Ok(None);
                    }
                }
            }
        }
        Ok(None)
    }

    async fn fetch_json(&self, url: String) -> PokedexResult<Value> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| PokedexError::Http {
                url: url.clone(),
                source,
            })?;

        response
            .json()
            .await
            .map_err(|source| PokedexError::Http { url, source })
    }

    /// Fetch a species straight from the API, bypassing the caches.
    pub async fn fetch(&self, id: u16) -> PokedexResult<SpeciesRecord> {
        self.check_range(id)?;
        tracing::info!(id, base_url = %self.config.base_url, "fetching species");

        let pokemon = self.fetch_json(self.config.endpoint("pokemon", id)).await?;
        let species = self
            .fetch_json(self.config.endpoint("pokemon-species", id))
            .await?;
        parse_species(id, &pokemon, &species)
    }

    /// Get a species from the cache, fetching and caching it on a miss.
    pub async fn get(&mut self, id: u16) -> PokedexResult<SpeciesRecord> {
        self.check_range(id)?;
        if let Some(record) = self.cache_get(id)? {
            tracing::debug!(id, "species cache hit");
            return Ok(record);
        }

        let record = self.fetch(id).await?;
        if let Err(err) = self.cache_put(record.clone()) {
            tracing::warn!(id, error = %err, "could not write species to disk cache");
        }
        Ok(record)
    }

    /// Every species in the configured range, in pokedex order.
    pub async fn get_all(&mut self) -> PokedexResult<Vec<SpeciesRecord>> {
        let mut records = Vec::new();
        for id in self.config.min_id..=self.config.max_id {
            records.push(self.get(id).await?);
        }
        Ok(records)
    }
}
