/// `locations` command: list locations, optionally filtered, or count them.
use crate::api::{ApiClient, Location};
use crate::cli::Timer;
use crate::cli::args::ListArgs;
use crate::types::Report;
use crate::universe::{Filter, RickyError};

/// Run `ricky locations`.
///
/// # Errors
///
/// Returns `RickyError::MalformedFilter` or `RickyError::Api`.
pub fn execute(args: &ListArgs, client: &ApiClient) -> Result<Report, RickyError> {
    let filter = Filter::parse_opt(args.filter.as_deref())?;

    let _t = Timer::start("fetch locations");
    let locations: Vec<Location> = client.fetch_all(filter.as_ref())?;

    if args.count {
        Ok(Report::Count(locations.len()))
    } else {
        Ok(Report::Locations(locations))
    }
}
