//! GeoJSON conversion for fill polygons.

use crate::error::{FillError, Result};
use geo::{Coord, LineString, Polygon};
use geojson::{GeoJson, Geometry, Value};

/// Converts a Polygon to a GeoJSON geometry string.
pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> Result<String> {
    let mut rings = Vec::with_capacity(1 + polygon.interiors().len());
    rings.push(ring_positions(polygon.exterior()));
    for interior in polygon.interiors() {
        rings.push(ring_positions(interior));
    }

    let geom = Geometry::new(Value::Polygon(rings));

    serde_json::to_string(&geom)
        .map_err(|e| FillError::InvalidInput(format!("Failed to serialize polygon: {}", e)))
}

/// Parses a GeoJSON Polygon geometry, or a Feature wrapping one.
///
/// # Examples
///
/// ```
/// use hashfill::compute::geojson::polygon_from_geojson;
///
/// let fence = polygon_from_geojson(
///     r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#,
/// )?;
/// assert_eq!(fence.exterior().0.len(), 5);
/// # Ok::<(), hashfill::FillError>(())
/// ```
pub fn polygon_from_geojson(geojson: &str) -> Result<Polygon<f64>> {
    let parsed: GeoJson = geojson
        .parse()
        .map_err(|e| FillError::InvalidInput(format!("Failed to parse GeoJSON: {}", e)))?;

    let geom = match parsed {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feature) => feature.geometry.ok_or_else(|| {
            FillError::InvalidInput("GeoJSON feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => {
            return Err(FillError::InvalidInput(
                "Expected a single Polygon, got a FeatureCollection".to_string(),
            ));
        }
    };

    match geom.value {
        Value::Polygon(rings) => {
            let mut rings = rings.iter();
            let exterior = rings.next().ok_or_else(|| {
                FillError::InvalidInput("Polygon must have at least one ring".to_string())
            })?;
            let exterior = parse_ring(exterior)?;
            let interiors = rings.map(|ring| parse_ring(ring)).collect::<Result<Vec<_>>>()?;
            Ok(Polygon::new(exterior, interiors))
        }
        _ => Err(FillError::InvalidInput(
            "GeoJSON geometry is not a Polygon".to_string(),
        )),
    }
}

fn ring_positions(ring: &LineString<f64>) -> Vec<Vec<f64>> {
    ring.coords().map(|coord| vec![coord.x, coord.y]).collect()
}

fn parse_ring(positions: &[Vec<f64>]) -> Result<LineString<f64>> {
    positions
        .iter()
        .map(|coords| match coords.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(FillError::InvalidInput(
                "Coordinate must have at least 2 values".to_string(),
            )),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::from)
}
