//! Variable precision search.

use super::{FillMode, RecursiveFiller, check_limit};
use crate::cell::children;
use crate::error::Result;
use crate::predicates::CellPredicates;
use geo::Polygon;

impl<P: CellPredicates> RecursiveFiller<P> {
    /// Smallest set of cells under `cell` that match `fence` according to `mode`.
    ///
    /// A contained cell is accepted whole, a disjoint cell is dropped, and a boundary cell is
    /// split into its 32 children until it reaches `max_precision`, where `mode` decides it.
    pub(super) fn compute_variable_hashes(
        &self,
        fence: &Polygon<f64>,
        mode: FillMode,
        cell: &str,
        max_hashes: usize,
    ) -> Result<Vec<String>> {
        if self.predicates.contains(fence, cell)? {
            return Ok(vec![cell.to_string()]);
        }

        if !self.predicates.intersects(fence, cell)? {
            return Ok(Vec::new());
        }

        if cell.len() >= self.config.max_precision {
            return Ok(match mode {
                FillMode::Intersects => vec![cell.to_string()],
                FillMode::Contains => Vec::new(),
            });
        }

        let mut hashes = Vec::new();
        for child in children(cell) {
            let found = self.compute_variable_hashes(fence, mode, &child, max_hashes)?;
            check_limit(found.len(), max_hashes)?;
            hashes.extend(found);
            check_limit(hashes.len(), max_hashes)?;
        }
        Ok(hashes)
    }
}
