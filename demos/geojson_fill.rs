//! Fill a GeoJSON polygon and print the cover back out.
//!
//! Run with: cargo run --example geojson_fill

use hashfill::compute::geojson::{polygon_from_geojson, polygon_to_geojson};
use hashfill::compute::validation::validate_polygon;
use hashfill::prelude::*;

const FENCE: &str = r#"{
    "type": "Feature",
    "properties": {"name": "Alcatraz"},
    "geometry": {
        "type": "Polygon",
        "coordinates": [[
            [-122.4270, 37.8240],
            [-122.4195, 37.8240],
            [-122.4195, 37.8285],
            [-122.4270, 37.8285],
            [-122.4270, 37.8240]
        ]]
    }
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let fence = polygon_from_geojson(FENCE)?;
    validate_polygon(&fence)?;
    println!("Fence: {}", polygon_to_geojson(&fence)?);

    let filler = FillerBuilder::new().max_precision(7).build();
    let hashes = filler.fill(&fence, FillMode::Intersects, 1000)?;
    println!("{} cells: {}", hashes.len(), hashes.join(","));

    Ok(())
}
