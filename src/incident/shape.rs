//! Shapes drawn on the incident map, as stored in the incident's
//! `drawn_shapes` JSON column.
//!
//! Coordinates are accepted as `[a, b]` pairs, `{"lat": .., "lng": ..}`
//! objects or `{"coordinates": [a, b]}` objects, possibly nested inside
//! further arrays. The first level that yields any coordinate wins.

use std::fmt::Display;

use serde_json::Value;

pub const DEFAULT_RADIUS: f64 = 100.0;

pub type Coord = [f64; 2];

#[derive(Debug, Clone, PartialEq)]
pub enum DrawnShape {
    Polygon(Vec<Coord>),
    Rectangle(Vec<Coord>),
    Circle { center: Coord, radius: f64 },
}

impl DrawnShape {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawnShape::Polygon(_) => "Polygon",
            DrawnShape::Rectangle(_) => "Rectangle",
            DrawnShape::Circle { .. } => "Circle",
        }
    }
}

impl Display for DrawnShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawnShape::Polygon(points) | DrawnShape::Rectangle(points) => {
                write!(f, "{} with {} points", self.kind(), points.len())
            }
            DrawnShape::Circle { center, radius } => write!(
                f,
                "Circle at {:.5}, {:.5} radius {}m",
                center[0], center[1], radius
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    NotAnArray,
    InvalidCoordinates { index: usize },
    UnknownType { index: usize, kind: String },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NotAnArray => f.write_str("drawn shapes are not a list"),
            ShapeError::InvalidCoordinates { index } => {
                write!(f, "shape {} has invalid coordinates", index)
            }
            ShapeError::UnknownType { index, kind } => {
                write!(f, "shape {} has unknown type \"{}\"", index, kind)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Shapes that could be read, plus the reason each other one was skipped.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedShapes {
    pub shapes: Vec<DrawnShape>,
    pub skipped: Vec<ShapeError>,
}

pub fn parse_shapes(value: &Value) -> Result<ParsedShapes, ShapeError> {
    let Value::Array(items) = value else {
        return Err(ShapeError::NotAnArray);
    };

    let mut parsed = ParsedShapes::default();
    for (index, item) in items.iter().enumerate() {
        match parse_shape(index, item) {
            Ok(shape) => parsed.shapes.push(shape),
            Err(err) => {
                log::warn!("skipping drawn shape: {}", err);
                parsed.skipped.push(err);
            }
        }
    }
    Ok(parsed)
}

fn parse_shape(index: usize, shape: &Value) -> Result<DrawnShape, ShapeError> {
    let coords = extract_coordinates(&shape["coordinates"])
        .ok_or(ShapeError::InvalidCoordinates { index })?;

    // stored as lng/lat, displayed as lat/lng
    let swapped = || coords.iter().map(|[a, b]| [*b, *a]).collect::<Vec<Coord>>();

    match shape["type"].as_str() {
        Some("Polygon") => Ok(DrawnShape::Polygon(swapped())),
        Some("Rectangle") => Ok(DrawnShape::Rectangle(swapped())),
        Some("Circle") => {
            let [a, b] = coords[0];
            let radius = match shape["radius"].as_f64() {
                Some(r) if r != 0.0 => r,
                _ => DEFAULT_RADIUS,
            };
            Ok(DrawnShape::Circle {
                center: [b, a],
                radius,
            })
        }
        other => Err(ShapeError::UnknownType {
            index,
            kind: other.map_or_else(|| shape["type"].to_string(), str::to_string),
        }),
    }
}

/// Find the first non-empty list of coordinates in `value`.
pub fn extract_coordinates(value: &Value) -> Option<Vec<Coord>> {
    let Value::Array(items) = value else {
        return None;
    };
    if items.is_empty() {
        return None;
    }

    let coords: Vec<Coord> = items.iter().filter_map(coordinate).collect();
    if !coords.is_empty() {
        return Some(coords);
    }

    items
        .iter()
        .filter(|item| item.is_array())
        .find_map(extract_coordinates)
}

fn coordinate(item: &Value) -> Option<Coord> {
    match item {
        Value::Array(_) => pair(item),
        Value::Object(object) => {
            if let (Some(lat), Some(lng)) = (object.get("lat"), object.get("lng")) {
                return Some([lat.as_f64()?, lng.as_f64()?]);
            }
            object.get("coordinates").and_then(pair)
        }
        _ => None,
    }
}

fn pair(value: &Value) -> Option<Coord> {
    match value.as_array()?.as_slice() {
        [a, b] => Some([a.as_f64()?, b.as_f64()?]),
        _ => None,
    }
}
