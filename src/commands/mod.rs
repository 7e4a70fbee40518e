/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod appearances;
pub mod characters;
pub mod episodes;
pub mod locations;

use std::time::Duration;

use crate::api::{ApiClient, ClientConfig};
use crate::cli::args::{Cli, Command};
use crate::cli::{OutputCtx, write_report};
use crate::types::Report;
use crate::universe::RickyError;

/// Build the API client from the global flags.
///
/// # Errors
///
/// Returns `RickyError::Api` if the base URL is invalid or the client cannot be built.
pub fn build_client(cli: &Cli) -> Result<ApiClient, RickyError> {
    let config = ClientConfig::new(&cli.api_url, cli.timeout.map(Duration::from_secs))?;
    Ok(ApiClient::new(config)?)
}

/// Run a parsed `Command` and return its report without printing it.
///
/// # Errors
///
/// Returns `RickyError` on any command failure.
pub fn execute(command: &Command, client: &ApiClient) -> Result<Report, RickyError> {
    match command {
        Command::Characters(args) => characters::execute(args, client),
        Command::Locations(args) => locations::execute(args, client),
        Command::Episodes(args) => episodes::execute(args, client),
        Command::Appearances(args) => appearances::execute(args, client),
    }
}

/// Dispatch the parsed CLI to its handler and print the report.
///
/// Nothing is written to stdout unless the command succeeds.
///
/// # Errors
///
/// Returns `RickyError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), RickyError> {
    let client = build_client(cli)?;
    let report = execute(&cli.command, &client)?;
    write_report(&report, ctx);
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use httpmock::prelude::*;
    use serde_json::Value;

    use crate::api::{ApiClient, ClientConfig};

    /// Client pointed at `{server}/api`.
    pub fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig::new(&server.url("/api"), None).unwrap();
        ApiClient::new(config).unwrap()
    }

    /// Serve `pages` for `kind` as pages 1..=n, followed by an empty page.
    pub fn serve_pages(server: &MockServer, kind: &str, pages: Vec<Vec<Value>>) {
        let path = format!("/api/{kind}/");
        let last = pages.len() + 1;
        for (i, results) in pages.into_iter().enumerate() {
            let page = (i + 1).to_string();
            let path = path.clone();
            server.mock(move |when, then| {
                when.method(GET).path(path).query_param("page", page);
                then.status(200)
                    .json_body(serde_json::json!({ "results": results }));
            });
        }
        server.mock(move |when, then| {
            when.method(GET)
                .path(path)
                .query_param("page", last.to_string());
            then.status(200)
                .json_body(serde_json::json!({ "results": [] }));
        });
    }
}
