use serde_json::{Map, Value};

use crate::models::CountyRecord;

/// Builds the `geography.json` payload: county/town names grouped under
/// their state, first-seen order for states and for names within a state,
/// no deduplication.
pub struct GeographyExporter;

impl GeographyExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, counties: &[CountyRecord]) -> Map<String, Value> {
        let mut grouped = Map::new();

        for record in counties {
            let entry = grouped
                .entry(record.state.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(names) = entry {
                names.push(Value::String(record.county_town.clone()));
            }
        }

        grouped
    }
}

impl Default for GeographyExporter {
    fn default() -> Self {
        Self::new()
    }
}
