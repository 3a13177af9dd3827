use crate::models::{Occupation, OccupationEntry};

/// Builds the `occupations.json` payload: every source row becomes one
/// entry, no deduplication, input order preserved.
pub struct OccupationExporter;

impl OccupationExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, occupations: &[Occupation]) -> Vec<OccupationEntry> {
        occupations.iter().map(OccupationEntry::from).collect()
    }
}

impl Default for OccupationExporter {
    fn default() -> Self {
        Self::new()
    }
}
