//! Geohash cell addressing.
//!
//! A cell is a string over the 32 symbol geohash alphabet. Its length is its precision,
//! the empty string is the whole world, and appending one symbol selects one of the 32
//! children. The tree is never materialized; children are derived from the string on demand.

use crate::error::Result;
use geo::{Polygon, Rect};

/// The geohash base32 alphabet, in visiting order.
pub const GEOHASH_ALPHABET: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'k',
    'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Deepest precision the `geohash` crate can decode.
pub const MAX_GEOHASH_PRECISION: usize = 12;

/// The 32 children of `cell`, in alphabet order.
///
/// # Examples
///
/// ```
/// use hashfill::cell::children;
///
/// let kids: Vec<String> = children("9q").collect();
/// assert_eq!(kids.len(), 32);
/// assert_eq!(kids[0], "9q0");
/// assert_eq!(kids[31], "9qz");
/// ```
pub fn children(cell: &str) -> impl Iterator<Item = String> + '_ {
    GEOHASH_ALPHABET.iter().map(move |symbol| {
        let mut child = String::with_capacity(cell.len() + 1);
        child.push_str(cell);
        child.push(*symbol);
        child
    })
}

/// Geographic bounds of a cell. The empty cell spans `[-180, 180] x [-90, 90]`.
pub fn cell_bounds(cell: &str) -> Result<Rect<f64>> {
    // geohash overflows decoding a zero length hash
    if cell.is_empty() {
        return Ok(Rect::new((-180.0, -90.0), (180.0, 90.0)));
    }
    Ok(geohash::decode_bbox(cell)?)
}

/// Bounds of a cell as a closed polygon.
pub fn cell_polygon(cell: &str) -> Result<Polygon<f64>> {
    Ok(cell_bounds(cell)?.to_polygon())
}
