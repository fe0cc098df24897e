//! Validation for fill inputs.
//!
//! Filling never validates on its own; degenerate polygons go straight to the predicates.
//! These checks are for callers that want to reject bad input before filling.

use crate::error::{FillError, Result};
use geo::{Coord, Polygon};

/// Validates a coordinate is finite with longitude in [-180, 180] and latitude in [-90, 90].
///
/// # Examples
///
/// ```
/// use hashfill::compute::validation::validate_coord;
/// use geo::Coord;
///
/// assert!(validate_coord(&Coord { x: -122.4, y: 37.7 }).is_ok());
/// assert!(validate_coord(&Coord { x: 200.0, y: 37.7 }).is_err());
/// assert!(validate_coord(&Coord { x: 0.0, y: f64::NAN }).is_err());
/// ```
pub fn validate_coord(coord: &Coord<f64>) -> Result<()> {
    if !coord.x.is_finite() {
        return Err(FillError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            coord.x
        )));
    }

    if !coord.y.is_finite() {
        return Err(FillError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            coord.y
        )));
    }

    if !(-180.0..=180.0).contains(&coord.x) {
        return Err(FillError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            coord.x
        )));
    }

    if !(-90.0..=90.0).contains(&coord.y) {
        return Err(FillError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            coord.y
        )));
    }

    Ok(())
}

/// Validates every ring of a polygon.
///
/// The exterior must be a closed ring of at least four coordinates, and every coordinate
/// of every ring must pass [`validate_coord`].
///
/// ```
/// use hashfill::compute::validation::validate_polygon;
/// use geo::polygon;
///
/// let fence = polygon![
///     (x: -80.0, y: 35.0),
///     (x: -70.0, y: 35.0),
///     (x: -70.0, y: 45.0),
///     (x: -80.0, y: 45.0),
/// ];
/// assert!(validate_polygon(&fence).is_ok());
/// ```
pub fn validate_polygon(polygon: &Polygon<f64>) -> Result<()> {
    if polygon.exterior().0.len() < 4 {
        return Err(FillError::InvalidInput(format!(
            "Polygon exterior needs at least 4 coordinates, got: {}",
            polygon.exterior().0.len()
        )));
    }

    for (idx, coord) in polygon.exterior().coords().enumerate() {
        validate_coord(coord).map_err(|e| {
            FillError::InvalidInput(format!("Exterior ring point at index {}: {}", idx, e))
        })?;
    }

    for (ring_idx, interior) in polygon.interiors().iter().enumerate() {
        for (idx, coord) in interior.coords().enumerate() {
            validate_coord(coord).map_err(|e| {
                FillError::InvalidInput(format!(
                    "Interior ring {} point at index {}: {}",
                    ring_idx, idx, e
                ))
            })?;
        }
    }

    Ok(())
}
