//! Fixed precision expansion of accepted cells.

use super::{RecursiveFiller, check_limit};
use crate::cell::children;
use crate::error::Result;

impl<P> RecursiveFiller<P> {
    /// Every descendant of `cell` at exactly `max_precision`, in alphabet order.
    ///
    /// Pure enumeration: the geometry was settled by the search that accepted `cell`.
    pub(super) fn extend_hash_to_max_precision(
        &self,
        cell: &str,
        max_hashes: usize,
    ) -> Result<Vec<String>> {
        if cell.len() >= self.config.max_precision {
            return Ok(vec![cell.to_string()]);
        }

        let mut hashes = Vec::with_capacity(32);
        for child in children(cell) {
            let extended = self.extend_hash_to_max_precision(&child, max_hashes)?;
            check_limit(extended.len(), max_hashes)?;
            hashes.extend(extended);
            check_limit(hashes.len(), max_hashes)?;
        }
        Ok(hashes)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::FillerBuilder;
    use crate::error::FillError;

    #[test]
    fn test_cell_at_max_precision_is_returned_unchanged() {
        let filler = FillerBuilder::new().max_precision(5).build();
        let hashes = filler.extend_hash_to_max_precision("9q8yy", 1).unwrap();
        assert_eq!(hashes, vec!["9q8yy"]);
    }

    #[test]
    fn test_expands_one_level() {
        let filler = FillerBuilder::new().max_precision(6).build();
        let hashes = filler.extend_hash_to_max_precision("9q8yy", 32).unwrap();
        assert_eq!(hashes.len(), 32);
        assert_eq!(hashes[0], "9q8yy0");
        assert_eq!(hashes[31], "9q8yyz");
        assert!(hashes.iter().all(|h| h.starts_with("9q8yy") && h.len() == 6));
    }

    #[test]
    fn test_expands_two_levels_in_order() {
        let filler = FillerBuilder::new().max_precision(3).build();
        let hashes = filler.extend_hash_to_max_precision("u", 1024).unwrap();
        assert_eq!(hashes.len(), 1024);
        assert_eq!(hashes[0], "u00");
        assert_eq!(hashes[1], "u01");
        assert_eq!(hashes[32], "u10");
        assert_eq!(hashes[1023], "uzz");

        let mut sorted = hashes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 1024);
    }

    #[test]
    fn test_expansion_past_limit_fails_early() {
        let filler = FillerBuilder::new().max_precision(3).build();
        let err = filler.extend_hash_to_max_precision("u", 100).unwrap_err();
        assert_eq!(
            err,
            FillError::HashLimitExceeded {
                limit: 100,
                count: 128
            }
        );
    }
}
