/// Wire models for the three listing endpoints.
///
/// Entities are deserialized straight from the `results` array of each page
/// and serialized again unchanged for JSON output. Unknown upstream fields
/// (`url`, `created`, `image`, ...) are ignored.
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The API's top-level entity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Character,
    Episode,
    Location,
}

impl ResourceKind {
    /// Path segment of the listing endpoint.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Episode => "episode",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An entity that can be listed page by page.
pub trait Resource: DeserializeOwned {
    /// Which listing endpoint serves this entity.
    const KIND: ResourceKind;

    /// Upstream-assigned identifier.
    fn id(&self) -> u32;
}

/// A character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub status: String,
    pub gender: String,
    /// Sub-species or variant; usually empty.
    #[serde(rename = "type")]
    pub kind: String,
}

/// An episode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    /// Character reference URLs, e.g. `https://rickandmortyapi.com/api/character/1`.
    #[serde(rename = "characters")]
    pub character_refs: Vec<String>,
}

/// A location record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
}

impl Resource for Character {
    const KIND: ResourceKind = ResourceKind::Character;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Resource for Episode {
    const KIND: ResourceKind = ResourceKind::Episode;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Resource for Location {
    const KIND: ResourceKind = ResourceKind::Location;

    fn id(&self) -> u32 {
        self.id
    }
}

/// One page of a listing response. An empty `results` array ends pagination.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
}
