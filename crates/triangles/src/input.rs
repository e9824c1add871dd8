//! Triangle list parsing
//!
//! Input is whitespace separated: a triangle count `N` followed by `N`
//! triangles of nine coordinates each (`x y z` for three vertices). Line
//! breaks carry no meaning beyond error reporting. Triangle `i` in input
//! order becomes polygon index `i`.

use std::io::Read;

use collision_engine::prelude::*;
use log::warn;

/// Coordinates per triangle
const COORDINATES_PER_TRIANGLE: usize = 9;

/// Errors raised while reading the triangle list
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// Underlying reader failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to read
    #[error("input is empty, expected a triangle count")]
    MissingCount,

    /// First token is not a non-negative integer
    #[error("invalid triangle count {0:?}")]
    InvalidCount(String),

    /// A coordinate failed to parse
    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber {
        /// Offending token
        token: String,
        /// 1-based line number
        line: usize,
    },

    /// Input ended before every announced triangle was read
    #[error("expected {expected} coordinates, found {found}")]
    Truncated {
        /// Coordinates announced by the count
        expected: usize,
        /// Coordinates actually present
        found: usize,
    },

    /// A coordinate is NaN or infinite
    #[error("triangle {triangle} has a non-finite coordinate")]
    NonFinite {
        /// Index of the offending triangle
        triangle: usize,
    },
}

/// Read and normalize every triangle from `reader`
pub fn read_polygons<R: Read>(mut reader: R) -> Result<Vec<Polygon>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_polygons(&text)
}

/// Parse and normalize every triangle in `text`
pub fn parse_polygons(text: &str) -> Result<Vec<Polygon>, InputError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(line, content)| content.split_whitespace().map(move |token| (line + 1, token)));

    let (_, count_token) = tokens.next().ok_or(InputError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| InputError::InvalidCount(count_token.to_string()))?;

    let expected = count
        .checked_mul(COORDINATES_PER_TRIANGLE)
        .ok_or_else(|| InputError::InvalidCount(count_token.to_string()))?;

    let mut coordinates = Vec::with_capacity(expected.min(1 << 20));
    for (line, token) in tokens.by_ref().take(expected) {
        let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
            token: token.to_string(),
            line,
        })?;
        coordinates.push(value);
    }

    if coordinates.len() < expected {
        return Err(InputError::Truncated {
            expected,
            found: coordinates.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("Ignoring {trailing} tokens after the last triangle");
    }

    coordinates
        .chunks_exact(COORDINATES_PER_TRIANGLE)
        .enumerate()
        .map(|(index, c)| {
            if c.iter().any(|value| !value.is_finite()) {
                return Err(InputError::NonFinite { triangle: index });
            }
            Ok(Polygon::from_vertices(
                Point3::new(c[0], c[1], c[2]),
                Point3::new(c[3], c[4], c[5]),
                Point3::new(c[6], c[7], c[8]),
                index,
            ))
        })
        .collect()
}

/// Root box enclosing every polygon, or `None` when there are none
pub fn bounding_box(polygons: &[Polygon], padding: f64) -> Result<Option<AABB>, BoundsError> {
    match AABB::enclosing(polygons.iter().flat_map(Polygon::vertices), padding) {
        Ok(bounds) => Ok(Some(bounds)),
        Err(BoundsError::Empty) => Ok(None),
        Err(err) => Err(err),
    }
}
