/// Cross-referencing characters against episode cast lists.
use std::collections::HashSet;

use crate::api::{Character, Episode};

/// Extract the character id from a reference such as
/// `https://rickandmortyapi.com/api/character/12` or `/character/12/`.
///
/// Returns `None` unless the last path segment is an integer and the one
/// before it is `character`.
#[must_use]
pub fn character_id_from_ref(reference: &str) -> Option<u32> {
    let mut segments = reference.trim_end_matches('/').rsplit('/');
    let id = segments.next()?.parse::<u32>().ok()?;
    (segments.next()? == "character").then_some(id)
}

/// Count the episodes in which at least one of `characters` appears.
///
/// Each episode counts once no matter how many of the characters it
/// references. An empty character slice always yields 0.
#[must_use]
pub fn count_episodes_with_any(characters: &[Character], episodes: &[Episode]) -> usize {
    let ids: HashSet<u32> = characters.iter().map(|c| c.id).collect();
    if ids.is_empty() {
        return 0;
    }

    episodes
        .iter()
        .filter(|episode| {
            episode
                .character_refs
                .iter()
                .filter_map(|r| character_id_from_ref(r))
                .any(|id| ids.contains(&id))
        })
        .count()
}
