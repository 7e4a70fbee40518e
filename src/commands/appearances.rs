/// `appearances` command: unique episodes featuring any matching character.
use tracing::debug;

use crate::api::{ApiClient, Character, Episode};
use crate::cli::Timer;
use crate::cli::args::AppearancesArgs;
use crate::types::Report;
use crate::universe::{Filter, RickyError, count_episodes_with_any};

/// Run `ricky appearances`.
///
/// Characters are fetched with the filter; episodes are fetched unfiltered and
/// all of them are scanned.
///
/// # Errors
///
/// Returns `RickyError::MissingFilter` or `RickyError::MalformedFilter` before
/// any request is made, or `RickyError::Api` if any page fails.
pub fn execute(args: &AppearancesArgs, client: &ApiClient) -> Result<Report, RickyError> {
    let raw = args.filter.as_deref().ok_or(RickyError::MissingFilter)?;
    let filter = Filter::parse(raw)?;

    let t_characters = Timer::start("fetch characters");
    let characters: Vec<Character> = client.fetch_all(Some(&filter))?;
    drop(t_characters);

    // Nothing can match; skip the episode listing.
    if characters.is_empty() {
        debug!(%filter, "no characters match");
        return Ok(Report::Count(0));
    }

    let t_episodes = Timer::start("fetch episodes");
    let episodes: Vec<Episode> = client.fetch_all(None)?;
    drop(t_episodes);

    debug!(
        characters = characters.len(),
        episodes = episodes.len(),
        "correlating"
    );
    Ok(Report::Count(count_episodes_with_any(&characters, &episodes)))
}
