/// Output formatting: JSON, table, id modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::api::{Character, Episode, Location, Resource};
use crate::types::{CountOutput, ErrorOutput, Report};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

/// Write a command's report to stdout.
pub fn write_report(report: &Report, ctx: &OutputCtx) {
    match report {
        Report::Characters(items) => write_entities(items, ctx, characters_table),
        Report::Locations(items) => write_entities(items, ctx, locations_table),
        Report::Episodes(items) => write_entities(items, ctx, episodes_table),
        Report::Count(count) => write_count(*count, ctx),
    }
}

fn write_entities<T: Resource + Serialize>(
    items: &[T],
    ctx: &OutputCtx,
    table: fn(&[T], bool) -> Table,
) {
    match ctx.format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Compact => print_compact_json(items),
        OutputFormat::Ndjson => print_ndjson(items),
        OutputFormat::Id => {
            for item in items {
                println!("{}", item.id());
            }
        }
        OutputFormat::Table | OutputFormat::Auto => println!("{}", table(items, ctx.no_header)),
    }
}

// --- Tables ---

/// Character table: ID, NAME, SPECIES, STATUS, GENDER, TYPE.
#[must_use]
pub fn characters_table(items: &[Character], no_header: bool) -> Table {
    let mut table = new_table();
    if !no_header {
        table.set_header(["ID", "NAME", "SPECIES", "STATUS", "GENDER", "TYPE"]);
    }
    for c in items {
        table.add_row([
            c.id.to_string().as_str(),
            c.name.as_str(),
            c.species.as_str(),
            c.status.as_str(),
            c.gender.as_str(),
            c.kind.as_str(),
        ]);
    }
    table
}

/// Location table: ID, NAME, TYPE, DIMENSION.
#[must_use]
pub fn locations_table(items: &[Location], no_header: bool) -> Table {
    let mut table = new_table();
    if !no_header {
        table.set_header(["ID", "NAME", "TYPE", "DIMENSION"]);
    }
    for l in items {
        table.add_row([
            l.id.to_string().as_str(),
            l.name.as_str(),
            l.kind.as_str(),
            l.dimension.as_str(),
        ]);
    }
    table
}

/// Episode table: ID, NAME, CHARACTERS (number of cast references).
#[must_use]
pub fn episodes_table(items: &[Episode], no_header: bool) -> Table {
    let mut table = new_table();
    if !no_header {
        table.set_header(["ID", "NAME", "CHARACTERS"]);
    }
    for e in items {
        table.add_row([
            e.id.to_string(),
            e.name.clone(),
            e.character_refs.len().to_string(),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table
}

// --- Count ---

fn write_count(count: usize, ctx: &OutputCtx) {
    let out = CountOutput { count };
    match ctx.format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Compact | OutputFormat::Ndjson => print_compact_json(&out),
        OutputFormat::Id => println!("{count}"),
        OutputFormat::Table | OutputFormat::Auto => println!("Count: {count}"),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot() -> Character {
        Character {
            id: 244,
            name: "Mr. Meeseeks".to_owned(),
            species: "Humanoid".to_owned(),
            status: "Alive".to_owned(),
            gender: "Male".to_owned(),
            kind: "Meeseeks".to_owned(),
        }
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Table, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Ndjson, false), OutputFormat::Ndjson);
    }

    #[test]
    fn test_characters_table_has_all_columns() {
        let rendered = characters_table(&[robot()], false).to_string();
        for header in ["ID", "NAME", "SPECIES", "STATUS", "GENDER", "TYPE"] {
            assert!(rendered.contains(header), "missing {header}");
        }
        assert!(rendered.contains("244"));
        assert!(rendered.contains("Mr. Meeseeks"));
        assert!(rendered.contains("Meeseeks"));
    }

    #[test]
    fn test_no_header_omits_headers() {
        let loc = Location {
            id: 1,
            name: "Earth (C-137)".to_owned(),
            kind: "Planet".to_owned(),
            dimension: "Dimension C-137".to_owned(),
        };
        let rendered = locations_table(&[loc], true).to_string();
        assert!(!rendered.contains("DIMENSION"));
        assert!(rendered.contains("Earth (C-137)"));
    }

    #[test]
    fn test_episodes_table_counts_refs() {
        let ep = Episode {
            id: 1,
            name: "Pilot".to_owned(),
            character_refs: vec!["/character/1".to_owned(), "/character/2".to_owned()],
        };
        let rendered = episodes_table(&[ep], false).to_string();
        assert!(rendered.contains("CHARACTERS"));
        assert!(rendered.contains("Pilot"));
        assert!(rendered.contains('2'));
    }
}
