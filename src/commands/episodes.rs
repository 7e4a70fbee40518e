/// `episodes` command: list every episode with its cast size, or count them.
use crate::api::{ApiClient, Episode};
use crate::cli::Timer;
use crate::cli::args::EpisodesArgs;
use crate::types::Report;
use crate::universe::RickyError;

/// Run `ricky episodes`. Episodes are always fetched unfiltered.
///
/// # Errors
///
/// Returns `RickyError::Api` if any page fails.
pub fn execute(args: &EpisodesArgs, client: &ApiClient) -> Result<Report, RickyError> {
    let _t = Timer::start("fetch episodes");
    let episodes: Vec<Episode> = client.fetch_all(None)?;

    if args.count {
        Ok(Report::Count(episodes.len()))
    } else {
        Ok(Report::Episodes(episodes))
    }
}
