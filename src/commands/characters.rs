/// `characters` command: list characters, optionally filtered, or count them.
use crate::api::{ApiClient, Character};
use crate::cli::Timer;
use crate::cli::args::ListArgs;
use crate::types::Report;
use crate::universe::{Filter, RickyError};

/// Run `ricky characters`.
///
/// # Errors
///
/// Returns `RickyError::MalformedFilter` before any request if `--filter` is
/// not `key=value`, or `RickyError::Api` if any page fails.
pub fn execute(args: &ListArgs, client: &ApiClient) -> Result<Report, RickyError> {
    let filter = Filter::parse_opt(args.filter.as_deref())?;

    let _t = Timer::start("fetch characters");
    let characters: Vec<Character> = client.fetch_all(filter.as_ref())?;

    if args.count {
        Ok(Report::Count(characters.len()))
    } else {
        Ok(Report::Characters(characters))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::commands::test_support::{client_for, serve_pages};

    fn character(id: u32, species: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("c{id}"),
            "species": species,
            "status": "unknown",
            "gender": "Genderless",
            "type": ""
        })
    }

    #[test]
    fn test_lists_all_pages() {
        let server = MockServer::start();
        serve_pages(
            &server,
            "character",
            vec![
                vec![character(1, "Human"), character(2, "Human")],
                vec![character(3, "Robot")],
            ],
        );

        let args = ListArgs {
            filter: None,
            count: false,
        };
        let report = execute(&args, &client_for(&server)).unwrap();

        match report {
            Report::Characters(items) => {
                let ids: Vec<u32> = items.iter().map(|c| c.id).collect();
                assert_eq!(ids, vec![1, 2, 3]);
            }
            other => panic!("expected characters, got {other:?}"),
        }
    }

    #[test]
    fn test_count_returns_length_not_records() {
        let server = MockServer::start();
        serve_pages(
            &server,
            "character",
            vec![vec![character(1, "Robot"), character(2, "Robot")]],
        );

        let args = ListArgs {
            filter: None,
            count: true,
        };
        assert_eq!(execute(&args, &client_for(&server)).unwrap(), Report::Count(2));
    }

    #[test]
    fn test_filter_forwarded() {
        let server = MockServer::start();
        let filtered = server.mock(|when, then| {
            when.path("/api/character/")
                .query_param("species", "Robot");
            then.status(404)
                .json_body(json!({ "error": "There is nothing here" }));
        });

        let args = ListArgs {
            filter: Some("species=Robot".to_owned()),
            count: true,
        };
        assert_eq!(execute(&args, &client_for(&server)).unwrap(), Report::Count(0));
        filtered.assert_hits(1);
    }

    #[test]
    fn test_malformed_filter_makes_no_request() {
        let server = MockServer::start();
        let any = server.mock(|when, then| {
            when.path_contains("/api/");
            then.status(200).json_body(json!({ "results": [] }));
        });

        let args = ListArgs {
            filter: Some("species".to_owned()),
            count: false,
        };
        let err = execute(&args, &client_for(&server)).unwrap_err();
        assert!(matches!(err, RickyError::MalformedFilter { .. }));
        any.assert_hits(0);
    }
}
