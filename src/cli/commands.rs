//! CLI command implementations
//!
//! Each showcase command turns configuration and arguments into a JSON
//! value. `run_command` wraps them with logging and writes the response.

use serde_json::{json, Value};

use crate::capitalize::User;
use crate::observability::{Event, Logger};
use crate::projection::{sort_by_field_directed, SortDirection, SortSpec};
use crate::record::{DynamicRecord, DynamicSorter, Person};
use crate::shape::{create_shape_with_radius, validate_frame, CalculableShape, Rect};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Field names `key-path` accepts
const PERSON_FIELDS: &[&str] = &["age", "name"];

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::load_or_default(cli.config.as_deref())?;
    run_command(cli.command, &config)
}

/// Run one command, writing its JSON response to stdout
pub fn run_command(cmd: Command, config: &Config) -> CliResult<()> {
    let logger = Logger::new(config.log_level);
    let name = cmd.name();

    logger.info(Event::ConfigLoaded, &[("log_level", config.log_level.as_str())]);
    logger.info(Event::CommandStart, &[("command", name)]);

    match execute(cmd, config, &logger) {
        Ok(data) => {
            write_response(data)?;
            logger.info(Event::CommandComplete, &[("command", name)]);
            Ok(())
        }
        Err(e) => {
            logger.error(
                Event::CommandFailed,
                &[("command", name), ("code", e.code_str())],
            );
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Dispatch to the command, returning the response data
pub fn execute(cmd: Command, config: &Config, logger: &Logger) -> CliResult<Value> {
    match cmd {
        Command::DynamicLookup { members } => dynamic_lookup(config, &members, logger),
        Command::KeyPath { field, desc } => {
            key_path(config, &field, resolve_direction(desc, config), logger)
        }
        Command::OpaqueShape => opaque_shape(config, logger),
        Command::Capitalized { name } => capitalized(&name, logger),
        Command::Sort { field, desc } => {
            let input = read_request()?;
            let spec = SortSpec::with_direction(field, resolve_direction(desc, config));
            sort_records(&input, &spec, logger)
        }
    }
}

/// `--desc` forces descending; otherwise the configured direction applies
pub fn resolve_direction(desc: bool, config: &Config) -> SortDirection {
    if desc {
        SortDirection::Desc
    } else {
        config.sort_direction
    }
}

/// Look up members of the configured record by name.
///
/// Missing members are reported as `null` and render as empty text.
pub fn dynamic_lookup(config: &Config, members: &[String], logger: &Logger) -> CliResult<Value> {
    let record = &config.lookup;
    let mut values = serde_json::Map::new();

    for member in members {
        match record.member(member) {
            Some(value) => {
                values.insert(member.clone(), value.to_json());
            }
            None => {
                logger.warn(Event::MemberMissing, &[("member", member.as_str())]);
                values.insert(member.clone(), Value::Null);
            }
        }
    }

    let names: Vec<&str> = members.iter().map(String::as_str).collect();
    let text = record.render(&names);

    let count = members.len().to_string();
    logger.info(Event::MemberLookup, &[("members", count.as_str())]);

    Ok(json!({
        "text": text,
        "values": Value::Object(values),
    }))
}

/// Sort the configured people by a named field reference
pub fn key_path(
    config: &Config,
    field: &str,
    direction: SortDirection,
    logger: &Logger,
) -> CliResult<Value> {
    let sorted = match field {
        "age" => sort_by_field_directed(&config.people, &Person::age_field(), direction),
        "name" => sort_by_field_directed(&config.people, &Person::name_field(), direction),
        other => return Err(CliError::unknown_field(other, PERSON_FIELDS)),
    };

    let count = sorted.len().to_string();
    logger.info(
        Event::RecordsSorted,
        &[
            ("count", count.as_str()),
            ("direction", direction.as_str()),
            ("field", field),
        ],
    );

    Ok(json!({
        "field": field,
        "direction": direction.as_str(),
        "people": serde_json::to_value(&sorted)?,
    }))
}

/// Build the configured shape and describe it without naming its kind
pub fn opaque_shape(config: &Config, logger: &Logger) -> CliResult<Value> {
    let shape = create_shape_with_radius(config.circle_radius)?;
    let frame = Rect::from_size(config.frame);
    validate_frame(&frame)?;

    let path = shape.path(frame);
    let area = shape.area();

    let area_text = format!("{:.3}", area);
    logger.info(Event::ShapeCreated, &[("area", area_text.as_str())]);

    Ok(json!({
        "area": area,
        "frame": serde_json::to_value(frame)?,
        "bounds": serde_json::to_value(path.bounding_rect())?,
        "path": serde_json::to_value(&path)?,
    }))
}

/// Assign a name through the upper-casing setter
pub fn capitalized(name: &str, logger: &Logger) -> CliResult<Value> {
    let mut user = User::default();
    user.set_name(name);

    logger.info(Event::NameAssigned, &[("name", user.name())]);

    Ok(json!({
        "input": name,
        "name": user.name(),
    }))
}

/// Sort a JSON array of flat objects by a named field
pub fn sort_records(input: &Value, spec: &SortSpec, logger: &Logger) -> CliResult<Value> {
    let items = input
        .as_array()
        .ok_or_else(|| CliError::invalid_input("Expected a JSON array of objects"))?;

    let records = items
        .iter()
        .map(DynamicRecord::from_json)
        .collect::<Result<Vec<_>, _>>()?;

    let sorted = DynamicSorter::sort(&records, spec);

    let count = sorted.len().to_string();
    logger.info(
        Event::RecordsSorted,
        &[
            ("count", count.as_str()),
            ("direction", spec.direction.as_str()),
            ("field", spec.field.as_str()),
        ],
    );

    Ok(Value::Array(sorted.iter().map(DynamicRecord::to_json).collect()))
}
