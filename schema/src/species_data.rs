use serde::{Deserialize, Serialize};

/// The slice of remote species data the capture simulation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub pokedex_number: u16,
    pub name: String,
    pub base_hp: u8,
    pub catch_rate: u8,
}

impl SpeciesRecord {
    /// Display name with the first letter capitalised ("scyther" -> "Scyther").
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// File stem used by the on-disk cache, e.g. "123-scyther".
    pub fn file_stem(&self) -> String {
        format!("{:03}-{}", self.pokedex_number, self.name.to_lowercase())
    }
}
