pub mod email;
pub mod explanation;
pub mod shape;
pub mod view_mode;

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use shape::{DrawnShape, ShapeError};

/// The locally renderable parts of an incident record.
#[derive(Debug, Default, PartialEq)]
pub struct Incident {
    pub shapes: Vec<DrawnShape>,
    pub explanation: Option<String>,
}

/// An incident plus whatever had to be dropped while reading it.
#[derive(Debug, PartialEq)]
pub struct LoadedIncident {
    pub incident: Incident,
    pub problems: Vec<ShapeError>,
}

impl Incident {
    /// Read an exported incident record (`drawn_shapes`, `explanation`).
    pub fn read(path: impl AsRef<Path>) -> Result<LoadedIncident, anyhow::Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read incident {}", path.display()))?;
        let record: Value = serde_json::from_str(&content)
            .with_context(|| format!("incident {} is not valid JSON", path.display()))?;

        Ok(Self::from_record(&record))
    }

    pub fn from_record(record: &Value) -> LoadedIncident {
        let mut incident = Incident {
            explanation: record["explanation"].as_str().map(str::to_string),
            ..Incident::default()
        };
        let mut problems = vec![];

        match &record["drawn_shapes"] {
            Value::Null => (),
            shapes => match shape::parse_shapes(shapes) {
                Ok(parsed) => {
                    incident.shapes = parsed.shapes;
                    problems = parsed.skipped;
                }
                Err(err) => {
                    log::error!("{}", err);
                    problems.push(err);
                }
            },
        }

        LoadedIncident { incident, problems }
    }
}
