use std::collections::BTreeSet;

use crate::models::Occupation;

/// Builds the `jobs.json` payload: unique job titles, lexicographically
/// sorted.
pub struct JobTitlesExporter;

impl JobTitlesExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, occupations: &[Occupation]) -> Vec<String> {
        let titles: BTreeSet<&str> = occupations.iter().map(|o| o.title.as_str()).collect();
        titles.into_iter().map(|t| t.to_string()).collect()
    }
}

impl Default for JobTitlesExporter {
    fn default() -> Self {
        Self::new()
    }
}
