//! Fill a polygon in both modes and with fixed precision output.
//!
//! Run with: cargo run --example fill_polygon

use geo::polygon;
use hashfill::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let golden_gate_park = polygon![
        (x: -122.5110, y: 37.7640),
        (x: -122.4530, y: 37.7660),
        (x: -122.4540, y: 37.7740),
        (x: -122.5110, y: 37.7720),
    ];

    let filler = FillerBuilder::new().max_precision(6).build();

    let inside = filler.fill(&golden_gate_park, FillMode::Contains, 10_000)?;
    println!("Contains: {} cells", inside.len());
    for hash in &inside {
        println!("  {}", hash);
    }

    let touching = filler.fill(&golden_gate_park, FillMode::Intersects, 10_000)?;
    println!("Intersects: {} cells", touching.len());

    let fixed = FillerBuilder::new().max_precision(7).fixed_precision().build();
    let cells = fixed.fill(&golden_gate_park, FillMode::Contains, 10_000)?;
    println!("Contains at fixed precision 7: {} cells", cells.len());

    match filler.fill(&golden_gate_park, FillMode::Intersects, 5) {
        Err(err @ FillError::HashLimitExceeded { .. }) => println!("Capped fill: {}", err),
        other => println!("Unexpected result: {:?}", other),
    }

    Ok(())
}
